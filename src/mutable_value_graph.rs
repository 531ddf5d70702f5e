use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};

use crate::{
    builder::{GraphBuilder, ValueGraphBuilder},
    debug::format_debug_value_graph,
    directedness::Directedness,
    element_order::ElementOrder,
    endpoint_pair::EndpointPair,
    error::GraphError,
    graph::{Graph, GraphMut, NodeId, ValueGraph, ValueGraphMut},
    mutable_graph::MutableGraph,
    tracing_support::trace,
};

/// A [`ValueGraph`] made of a [`MutableGraph`] for the topology plus a table
/// of edge values keyed by canonical [`EndpointPair`].
///
/// The table holds exactly one value for each edge of the topology.
#[derive(Clone)]
pub struct MutableValueGraph<N, V> {
    graph: MutableGraph<N>,
    values: HashMap<EndpointPair<N>, V>,
}

impl<N: NodeId, V> MutableValueGraph<N, V> {
    pub(crate) fn from_builder(builder: &ValueGraphBuilder<N, V>) -> Self {
        let graph: GraphBuilder<N> = builder.graph;
        Self {
            graph: graph.build(),
            values: HashMap::new(),
        }
    }

    fn key(&self, u: N, v: N) -> EndpointPair<N> {
        EndpointPair::of(self.graph.directedness(), u, v)
    }

    /// Iterates over every edge together with its value.
    pub fn edge_values(&self) -> impl Iterator<Item = (EndpointPair<N>, &V)> + '_ {
        self.graph.edges().filter_map(move |endpoints| {
            let value = self.values.get(&endpoints)?;
            Some((endpoints, value))
        })
    }
}

impl<N: NodeId, V> Graph for MutableValueGraph<N, V> {
    type Node = N;

    fn directedness(&self) -> Directedness {
        self.graph.directedness()
    }

    fn allows_self_loops(&self) -> bool {
        self.graph.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.graph.node_order()
    }

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.graph.nodes()
    }

    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn contains_node(&self, node: N) -> bool {
        self.graph.contains_node(node)
    }

    fn adjacent_nodes(&self, node: N) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        self.graph.adjacent_nodes(node)
    }

    fn predecessors(&self, node: N) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        self.graph.predecessors(node)
    }

    fn successors(&self, node: N) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        self.graph.successors(node)
    }

    fn degree(&self, node: N) -> Result<usize, GraphError<N>> {
        self.graph.degree(node)
    }

    fn in_degree(&self, node: N) -> Result<usize, GraphError<N>> {
        self.graph.in_degree(node)
    }

    fn out_degree(&self, node: N) -> Result<usize, GraphError<N>> {
        self.graph.out_degree(node)
    }

    fn edges(&self) -> impl Iterator<Item = EndpointPair<N>> + '_ {
        self.graph.edges()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn has_edge_connecting(&self, u: N, v: N) -> bool {
        self.graph.has_edge_connecting(u, v)
    }
}

impl<N: NodeId, V> ValueGraph for MutableValueGraph<N, V> {
    type Value = V;

    fn edge_value(&self, u: N, v: N) -> Result<&V, GraphError<N>> {
        for node in [&u, &v] {
            if !self.graph.contains_node(node.clone()) {
                return Err(GraphError::NodeNotFound(node.clone()));
            }
        }
        self.values
            .get(&self.key(u.clone(), v.clone()))
            .ok_or(GraphError::EdgeConnectingNotFound(u, v))
    }
}

impl<N: NodeId, V> ValueGraphMut for MutableValueGraph<N, V> {
    fn add_node(&mut self, node: N) -> bool {
        self.graph.add_node(node)
    }

    fn put_edge_value(&mut self, u: N, v: N, value: V) -> Result<Option<V>, GraphError<N>> {
        let key = self.key(u.clone(), v.clone());
        self.graph.put_edge(u, v)?;
        let previous = self.values.insert(key, value);
        trace!(replaced = previous.is_some(), "stored edge value");
        Ok(previous)
    }

    fn remove_node(&mut self, node: N) -> bool {
        let Ok(incident) = self.graph.incident_edges(node.clone()) else {
            return false;
        };
        let incident: Vec<_> = incident.collect();
        for endpoints in &incident {
            self.values.remove(endpoints);
        }
        self.graph.remove_node(node)
    }

    fn remove_edge(&mut self, u: N, v: N) -> Option<V> {
        let key = self.key(u.clone(), v.clone());
        if !self.graph.remove_edge(u, v) {
            return None;
        }
        self.values.remove(&key)
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.values.clear();
    }
}

impl<N: NodeId, V: Debug> Debug for MutableValueGraph<N, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug_value_graph(self, f, "MutableValueGraph")
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::graph_test_support::{ArbValueGraph, check_graph_consistency};

    use super::*;

    fn undirected() -> MutableValueGraph<&'static str, i32> {
        ValueGraphBuilder::undirected().allows_self_loops(true).build()
    }

    #[test]
    fn test_undirected_values_ignore_order() {
        let mut graph = undirected();
        assert_eq!(graph.put_edge_value("a", "b", 5), Ok(None));
        assert_eq!(graph.edge_value("b", "a"), Ok(&5));
        assert_eq!(graph.put_edge_value("b", "a", 7), Ok(Some(5)));
        assert_eq!(graph.edge_value("a", "b"), Ok(&7));
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_directed_values_keep_direction() {
        let mut graph: MutableValueGraph<&str, i32> = ValueGraphBuilder::directed().build();
        graph.put_edge_value("a", "b", 1).unwrap();
        assert_eq!(graph.edge_value("b", "a"), Err(GraphError::EdgeConnectingNotFound("b", "a")));
        assert_eq!(graph.edge_value_or("b", "a", 0), 0);
        assert_eq!(graph.edge_value_or("a", "b", 0), 1);
    }

    #[test]
    fn test_edge_value_errors() {
        let mut graph = undirected();
        graph.add_node("a");
        assert_eq!(graph.edge_value("a", "z"), Err(GraphError::NodeNotFound("z")));
        graph.add_node("b");
        assert_eq!(graph.edge_value("a", "b"), Err(GraphError::EdgeConnectingNotFound("a", "b")));
    }

    #[test]
    fn test_self_loop_rejected_without_change() {
        let mut graph: MutableValueGraph<&str, i32> = ValueGraphBuilder::directed().build();
        assert_eq!(graph.put_edge_value("a", "a", 1), Err(GraphError::SelfLoopNotAllowed("a")));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_put_edge_keeps_existing_value() {
        let mut graph = undirected();
        assert_eq!(graph.put_edge("a", "b"), Ok(true));
        assert_eq!(graph.edge_value("a", "b"), Ok(&0));
        graph.put_edge_value("a", "b", 3).unwrap();
        assert_eq!(graph.put_edge("b", "a"), Ok(false));
        assert_eq!(graph.edge_value("a", "b"), Ok(&3));
    }

    #[test]
    fn test_remove_edge_returns_value() {
        let mut graph = undirected();
        graph.put_edge_value("a", "b", 9).unwrap();
        assert_eq!(graph.remove_edge("b", "a"), Some(9));
        assert_eq!(graph.remove_edge("a", "b"), None);
        assert!(graph.contains_node("a"));
    }

    #[test]
    fn test_remove_node_drops_values() {
        let mut graph = undirected();
        graph.put_edge_value("a", "b", 1).unwrap();
        graph.put_edge_value("a", "a", 2).unwrap();
        graph.put_edge_value("b", "c", 3).unwrap();
        assert!(graph.remove_node("a"));
        assert_eq!(graph.values.len(), 1);
        assert_eq!(graph.edge_values().collect::<Vec<_>>(), vec![(EndpointPair::unordered("b", "c"), &3)]);
    }

    #[quickcheck]
    fn prop_one_value_per_edge(arb: ArbValueGraph) -> bool {
        check_graph_consistency(&arb.graph);
        let graph = &arb.graph;
        graph.values.len() == graph.num_edges()
            && graph
                .edges()
                .all(|endpoints| graph.edge_value_endpoints(&endpoints).is_ok())
    }
}
