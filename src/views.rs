//! Adapters that present one structure through another's interface.
//!
//! Each view wraps a borrow (or any other pointer) of the underlying
//! structure and reads through it on every call, so a view always reflects
//! the current state.  Views holding a mutable borrow also implement
//! [`GraphMut`] and write through to the underlying structure.
use std::ops::{Deref, DerefMut};

use crate::{
    directedness::Directedness,
    element_order::ElementOrder,
    endpoint_pair::EndpointPair,
    error::{GraphError, narrow},
    graph::{Graph, GraphMut, Network, NetworkMut, ValueGraph, ValueGraphMut},
};

/// A [`Network`] seen as a [`Graph`].
///
/// Parallel edges between two nodes collapse into a single graph edge, so the
/// view's edge count can be less than the network's.  Degrees are taken from
/// the network and count every edge.
///
/// Edges cannot be added through this view, since a graph edge carries no
/// identifier to give the new network edge.
#[derive(Clone, Copy, Debug)]
pub struct NetworkAsGraph<R> {
    network: R,
}

impl<R> NetworkAsGraph<R> {
    pub fn new(network: R) -> Self {
        Self { network }
    }

    pub fn into_inner(self) -> R {
        self.network
    }
}

impl<R> Graph for NetworkAsGraph<R>
where
    R: Deref,
    R::Target: Network,
{
    type Node = <R::Target as Network>::Node;

    fn directedness(&self) -> Directedness {
        self.network.directedness()
    }

    fn allows_self_loops(&self) -> bool {
        self.network.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.network.node_order()
    }

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.network.nodes()
    }

    fn num_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    fn contains_node(&self, node: Self::Node) -> bool {
        self.network.contains_node(node)
    }

    fn adjacent_nodes(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.network.adjacent_nodes(node).map_err(narrow)
    }

    fn predecessors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.network.predecessors(node).map_err(narrow)
    }

    fn successors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.network.successors(node).map_err(narrow)
    }

    fn degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.network.degree(node).map_err(narrow)
    }

    fn in_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.network.in_degree(node).map_err(narrow)
    }

    fn out_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.network.out_degree(node).map_err(narrow)
    }

    fn has_edge_connecting(&self, u: Self::Node, v: Self::Node) -> bool {
        self.network.has_edge_connecting(u, v)
    }
}

impl<R> GraphMut for NetworkAsGraph<R>
where
    R: DerefMut,
    R::Target: NetworkMut,
{
    fn add_node(&mut self, node: Self::Node) -> bool {
        self.network.add_node(node)
    }

    fn put_edge(&mut self, _u: Self::Node, _v: Self::Node) -> Result<bool, GraphError<Self::Node>> {
        Err(GraphError::InvalidOperation {
            operation: "put_edge",
            reason: "a network's graph view has no edge identifier to give a new edge; \
                     use add_edge on the network instead",
        })
    }

    fn remove_node(&mut self, node: Self::Node) -> bool {
        self.network.remove_node(node)
    }

    /// Removes every network edge connecting `u` to `v`.
    fn remove_edge(&mut self, u: Self::Node, v: Self::Node) -> bool {
        let edges: Vec<_> = match self.network.edges_connecting(u, v) {
            Ok(edges) => edges.collect(),
            Err(_) => return false,
        };
        let mut removed = false;
        for edge in edges {
            removed |= self.network.remove_edge(edge);
        }
        removed
    }

    fn clear(&mut self) {
        self.network.clear();
    }
}

/// A [`ValueGraph`] seen as a [`Graph`], ignoring edge values.
///
/// Edges added through a mutable view carry the value type's default value.
#[derive(Clone, Copy, Debug)]
pub struct ValueGraphAsGraph<R> {
    value_graph: R,
}

impl<R> ValueGraphAsGraph<R> {
    pub fn new(value_graph: R) -> Self {
        Self { value_graph }
    }

    pub fn into_inner(self) -> R {
        self.value_graph
    }
}

impl<R> Graph for ValueGraphAsGraph<R>
where
    R: Deref,
    R::Target: ValueGraph,
{
    type Node = <R::Target as Graph>::Node;

    fn directedness(&self) -> Directedness {
        self.value_graph.directedness()
    }

    fn allows_self_loops(&self) -> bool {
        self.value_graph.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.value_graph.node_order()
    }

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.value_graph.nodes()
    }

    fn num_nodes(&self) -> usize {
        self.value_graph.num_nodes()
    }

    fn contains_node(&self, node: Self::Node) -> bool {
        self.value_graph.contains_node(node)
    }

    fn adjacent_nodes(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.value_graph.adjacent_nodes(node)
    }

    fn predecessors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.value_graph.predecessors(node)
    }

    fn successors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.value_graph.successors(node)
    }

    fn degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.value_graph.degree(node)
    }

    fn in_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.value_graph.in_degree(node)
    }

    fn out_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.value_graph.out_degree(node)
    }

    fn edges(&self) -> impl Iterator<Item = EndpointPair<Self::Node>> + '_ {
        self.value_graph.edges()
    }

    fn num_edges(&self) -> usize {
        self.value_graph.num_edges()
    }

    fn has_edge_connecting(&self, u: Self::Node, v: Self::Node) -> bool {
        self.value_graph.has_edge_connecting(u, v)
    }
}

impl<R> GraphMut for ValueGraphAsGraph<R>
where
    R: DerefMut,
    R::Target: ValueGraphMut,
    <R::Target as ValueGraph>::Value: Default,
{
    fn add_node(&mut self, node: Self::Node) -> bool {
        self.value_graph.add_node(node)
    }

    fn put_edge(&mut self, u: Self::Node, v: Self::Node) -> Result<bool, GraphError<Self::Node>> {
        ValueGraphMut::put_edge(&mut *self.value_graph, u, v)
    }

    fn remove_node(&mut self, node: Self::Node) -> bool {
        self.value_graph.remove_node(node)
    }

    fn remove_edge(&mut self, u: Self::Node, v: Self::Node) -> bool {
        self.value_graph.remove_edge(u, v).is_some()
    }

    fn clear(&mut self) {
        self.value_graph.clear();
    }
}

/// A [`Graph`] with every edge reversed.  Transposing an undirected graph
/// changes nothing.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<R> {
    graph: R,
}

impl<R> Transposed<R> {
    pub fn new(graph: R) -> Self {
        Self { graph }
    }

    pub fn into_inner(self) -> R {
        self.graph
    }
}

/// Returns a view of `graph` with every edge reversed.
pub fn transpose<G: Graph>(graph: &G) -> Transposed<&G> {
    Transposed::new(graph)
}

impl<R> Graph for Transposed<R>
where
    R: Deref,
    R::Target: Graph,
{
    type Node = <R::Target as Graph>::Node;

    fn directedness(&self) -> Directedness {
        self.graph.directedness()
    }

    fn allows_self_loops(&self) -> bool {
        self.graph.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.graph.node_order()
    }

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.graph.nodes()
    }

    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn contains_node(&self, node: Self::Node) -> bool {
        self.graph.contains_node(node)
    }

    fn adjacent_nodes(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.graph.adjacent_nodes(node)
    }

    fn predecessors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.graph.successors(node)
    }

    fn successors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>> {
        self.graph.predecessors(node)
    }

    fn degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.graph.degree(node)
    }

    fn in_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.graph.out_degree(node)
    }

    fn out_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        self.graph.in_degree(node)
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn has_edge_connecting(&self, u: Self::Node, v: Self::Node) -> bool {
        self.graph.has_edge_connecting(v, u)
    }
}

impl<R> GraphMut for Transposed<R>
where
    R: DerefMut,
    R::Target: GraphMut,
{
    fn add_node(&mut self, node: Self::Node) -> bool {
        self.graph.add_node(node)
    }

    fn put_edge(&mut self, u: Self::Node, v: Self::Node) -> Result<bool, GraphError<Self::Node>> {
        self.graph.put_edge(v, u)
    }

    fn remove_node(&mut self, node: Self::Node) -> bool {
        self.graph.remove_node(node)
    }

    fn remove_edge(&mut self, u: Self::Node, v: Self::Node) -> bool {
        self.graph.remove_edge(v, u)
    }

    fn clear(&mut self) {
        self.graph.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        builder::{GraphBuilder, NetworkBuilder, ValueGraphBuilder},
        mutable_graph::MutableGraph,
        mutable_network::MutableNetwork,
        mutable_value_graph::MutableValueGraph,
    };

    use super::*;

    #[test]
    fn test_network_view_collapses_parallel_edges() {
        let mut network: MutableNetwork<&str, u32> = NetworkBuilder::directed()
            .allows_parallel_edges(true)
            .build();
        network.add_edge(1, "a", "b").unwrap();
        network.add_edge(2, "a", "b").unwrap();
        network.add_edge(3, "b", "c").unwrap();
        let view = network.as_graph();
        assert_eq!(view.num_edges(), 2);
        assert_eq!(
            view.edges().collect::<Vec<_>>(),
            vec![EndpointPair::ordered("a", "b"), EndpointPair::ordered("b", "c")]
        );
        assert_eq!(view.out_degree("a"), Ok(2));
        assert_eq!(view.successors("z").err(), Some(GraphError::NodeNotFound("z")));
    }

    #[test]
    fn test_network_view_mutation() {
        let mut network: MutableNetwork<&str, u32> = NetworkBuilder::undirected()
            .allows_parallel_edges(true)
            .build();
        network.add_edge(1, "a", "b").unwrap();
        network.add_edge(2, "b", "a").unwrap();
        let mut view = network.as_graph_mut();
        assert!(matches!(
            view.put_edge("a", "c"),
            Err(GraphError::InvalidOperation { .. })
        ));
        assert!(!view.contains_node("c"));
        assert!(view.add_node("c"));
        assert!(view.remove_edge("b", "a"));
        assert!(!view.remove_edge("b", "a"));
        assert_eq!(network.num_edges(), 0);
        assert!(network.contains_node("c"));
    }

    #[test]
    fn test_value_graph_view_reflects_changes() {
        let mut graph: MutableValueGraph<&str, u32> = ValueGraphBuilder::undirected().build();
        graph.put_edge_value("a", "b", 3).unwrap();
        assert!(graph.as_graph().has_edge_connecting("b", "a"));
        graph.as_graph_mut().put_edge("b", "c").unwrap();
        assert_eq!(graph.edge_value("c", "b"), Ok(&0));
        assert!(graph.as_graph_mut().remove_edge("a", "b"));
        assert_eq!(graph.as_graph().num_edges(), 1);
    }

    #[test]
    fn test_transposed() {
        let mut graph: MutableGraph<u32> = GraphBuilder::directed().build();
        graph.put_edge(1, 2).unwrap();
        graph.put_edge(2, 3).unwrap();
        let transposed = transpose(&graph);
        assert!(transposed.has_edge_connecting(2, 1));
        assert!(!transposed.has_edge_connecting(1, 2));
        assert_eq!(transposed.successors(3).unwrap().collect::<Vec<_>>(), vec![2]);
        assert_eq!(transposed.in_degree(1), Ok(1));
        assert_eq!(
            transposed.edges().collect::<Vec<_>>(),
            vec![EndpointPair::ordered(2, 1), EndpointPair::ordered(3, 2)]
        );

        Transposed::new(&mut graph).put_edge(1, 3).unwrap();
        assert!(graph.has_edge_connecting(3, 1));
    }
}
