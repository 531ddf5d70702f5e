//! A mutable graph backed by per-node adjacency sets.
use std::fmt::{Debug, Formatter};

use crate::{
    builder::GraphBuilder,
    debug::format_debug,
    directedness::Directedness,
    element_map::ElementMap,
    element_order::ElementOrder,
    error::GraphError,
    graph::{Graph, GraphMut, NodeId},
    tracing_support::{debug, trace},
};

mod connections;

use connections::GraphConnections;

/// A [`Graph`] stored as a map from each node to its neighbors.
///
/// Adjacency queries and edge lookups take constant expected time; removing
/// a node takes time proportional to its degree.  Nodes are enumerated in the
/// builder's node order, and so are each node's neighbors.
///
/// Create one with [`GraphBuilder`]:
///
/// ```
/// use netgraph::prelude::*;
///
/// let mut graph = GraphBuilder::undirected().build();
/// graph.put_edge("a", "b").unwrap();
/// assert!(graph.has_edge_connecting("b", "a"));
/// ```
#[derive(Clone)]
pub struct MutableGraph<N> {
    nodes: ElementMap<N, GraphConnections<N>>,
    directedness: Directedness,
    allows_self_loops: bool,
    num_edges: usize,
}

impl<N: NodeId> MutableGraph<N> {
    pub(crate) fn from_builder(builder: &GraphBuilder<N>) -> Self {
        Self {
            nodes: ElementMap::with_capacity(
                builder.node_order,
                builder.expected_node_count.unwrap_or_default(),
            ),
            directedness: builder.directedness,
            allows_self_loops: builder.allows_self_loops,
            num_edges: 0,
        }
    }

    fn connections(&self, node: N) -> Result<&GraphConnections<N>, GraphError<N>> {
        self.nodes.get(&node).ok_or(GraphError::NodeNotFound(node))
    }

    fn connections_entry(&mut self, node: N) -> &mut GraphConnections<N> {
        let directedness = self.directedness;
        let order = self.nodes.order();
        self.nodes
            .get_or_insert_with(node, || GraphConnections::new(directedness, order))
    }
}

impl<N: NodeId> Graph for MutableGraph<N> {
    type Node = N;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn node_order(&self) -> ElementOrder {
        self.nodes.order()
    }

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.keys().cloned()
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn contains_node(&self, node: N) -> bool {
        self.nodes.contains_key(&node)
    }

    fn adjacent_nodes(
        &self,
        node: N,
    ) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        Ok(self.connections(node)?.adjacent_nodes().cloned())
    }

    fn predecessors(&self, node: N) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        Ok(self.connections(node)?.predecessors().iter().cloned())
    }

    fn successors(&self, node: N) -> Result<impl Iterator<Item = N> + '_, GraphError<N>> {
        Ok(self.connections(node)?.successors().iter().cloned())
    }

    fn degree(&self, node: N) -> Result<usize, GraphError<N>> {
        let connections = self.connections(node.clone())?;
        Ok(match connections {
            GraphConnections::Directed {
                predecessors,
                successors,
            } => predecessors.len() + successors.len(),
            GraphConnections::Undirected { adjacent } => {
                adjacent.len() + usize::from(adjacent.contains(&node))
            }
        })
    }

    fn in_degree(&self, node: N) -> Result<usize, GraphError<N>> {
        if self.is_directed() {
            Ok(self.connections(node)?.predecessors().len())
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: N) -> Result<usize, GraphError<N>> {
        if self.is_directed() {
            Ok(self.connections(node)?.successors().len())
        } else {
            self.degree(node)
        }
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn has_edge_connecting(&self, u: N, v: N) -> bool {
        self.nodes
            .get(&u)
            .is_some_and(|connections| connections.successors().contains(&v))
    }
}

impl<N: NodeId> GraphMut for MutableGraph<N> {
    fn add_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        trace!(?node, "adding node");
        self.connections_entry(node);
        true
    }

    fn put_edge(&mut self, u: N, v: N) -> Result<bool, GraphError<N>> {
        if u == v && !self.allows_self_loops {
            debug!(node = ?u, "rejected self-loop");
            return Err(GraphError::SelfLoopNotAllowed(u));
        }
        let added = self.connections_entry(u.clone()).add_successor(v.clone());
        self.connections_entry(v.clone()).add_predecessor(u.clone());
        if added {
            trace!(?u, ?v, "added edge");
            self.num_edges += 1;
        }
        Ok(added)
    }

    fn remove_node(&mut self, node: N) -> bool {
        let Some(connections) = self.nodes.get(&node) else {
            return false;
        };
        let successors = connections.successors().to_vec();
        let predecessors = if self.is_directed() {
            connections.predecessors().to_vec()
        } else {
            Vec::new()
        };
        #[cfg(feature = "tracing")]
        let edges_before = self.num_edges;
        for successor in successors {
            self.remove_edge(node.clone(), successor);
        }
        for predecessor in predecessors {
            self.remove_edge(predecessor, node.clone());
        }
        self.nodes.remove(&node);
        debug!(
            ?node,
            edges_removed = edges_before - self.num_edges,
            "removed node"
        );
        true
    }

    fn remove_edge(&mut self, u: N, v: N) -> bool {
        let removed = self
            .nodes
            .get_mut(&u)
            .is_some_and(|connections| connections.remove_successor(&v));
        if !removed {
            return false;
        }
        if let Some(connections) = self.nodes.get_mut(&v) {
            connections.remove_predecessor(&u);
        }
        self.num_edges -= 1;
        trace!(?u, ?v, "removed edge");
        true
    }

    fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.num_edges, "clearing graph");
        self.nodes.clear();
        self.num_edges = 0;
    }
}

impl<N: NodeId> Debug for MutableGraph<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "MutableGraph")
    }
}
