//! `Graph` and `GraphMut` are the core traits for working with plain graphs in
//! this library.  `Graph` provides read-only access to the topology, while
//! `GraphMut` extends `Graph` with methods for adding and removing nodes and
//! edges.
//!
//! Edges of a `Graph` have no identity or data of their own; an edge is
//! described completely by its [`EndpointPair`].  Graphs whose edges carry a
//! value implement [`ValueGraph`], and graphs whose edges are independently
//! identified entities implement [`Network`].  Both can be viewed as a plain
//! `Graph` through the adapters in [`crate::views`].
//!
//! Node identifiers are passed by value, so iterators returned by query
//! methods borrow only the graph.  Node types are expected to be cheap to
//! clone.
//!
//! This module provides:
//!
//! - [`Graph`] trait: read-only topology queries
//! - [`GraphMut`] trait: topology mutation
//! - [`ValueGraph`] / [`ValueGraphMut`]: graphs with a value on each edge
//! - [`Network`] / [`NetworkMut`]: graphs with identified, possibly parallel
//!   edges
use std::{fmt::Debug, hash::Hash};

use crate::{
    directedness::Directedness,
    element_order::ElementOrder,
    endpoint_pair::EndpointPair,
    error::GraphError,
    search::{BfsIterator, DfsIterator},
};

pub mod network;
pub mod value_graph;

pub use network::{EdgeId, Network, NetworkError, NetworkMut};
pub use value_graph::{ValueGraph, ValueGraphMut};

/// A trait representing a node identifier in a graph.
///
/// Nodes have no structure of their own; a graph only needs to compare, hash,
/// order and clone them.  The `Ord` bound gives undirected edges a canonical
/// orientation.  Every type with the required bounds is a `NodeId`.
pub trait NodeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// A trait representing a directed or undirected graph whose edges are pairs
/// of nodes.  Methods that return iterators over nodes or edges return them
/// in the graph's [`ElementOrder`] where one applies, and in an unspecified
/// order otherwise.
///
/// Every method that takes a node which must be present in the graph reports
/// [`GraphError::NodeNotFound`] when it is absent, rather than returning an
/// empty result.
///
/// For the sake of performance, it is recommended that implementations of this
/// trait override the following methods, whose default implementations scan
/// adjacency:
///
/// - [`Self::num_edges`]
/// - [`Self::degree`]
/// - [`Self::has_edge_connecting`]
pub trait Graph {
    type Node: NodeId;

    fn directedness(&self) -> Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Returns true if edges connecting a node to itself may be added.
    fn allows_self_loops(&self) -> bool;

    /// The order in which [`Self::nodes`] enumerates nodes.
    fn node_order(&self) -> ElementOrder;

    // Nodes

    /// Gets an iterator over all nodes in the graph.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    fn contains_node(&self, node: Self::Node) -> bool;

    /// Gets the nodes connected to `node` by an edge in either direction.
    fn adjacent_nodes(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>>;

    /// Gets the nodes with an edge into `node`.  For undirected graphs this is
    /// the same as [`Self::adjacent_nodes`].
    fn predecessors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>>;

    /// Gets the nodes with an edge from `node`.  For undirected graphs this is
    /// the same as [`Self::adjacent_nodes`].
    fn successors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, GraphError<Self::Node>>;

    /// Gets the number of edges incident to `node`.  For a directed graph this
    /// is `in_degree + out_degree`; for an undirected graph a self-loop counts
    /// twice.  Either way the degrees of all nodes sum to twice the number of
    /// edges.
    fn degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        if self.is_directed() {
            Ok(self.in_degree(node.clone())? + self.out_degree(node)?)
        } else {
            let neighbors = self.adjacent_nodes(node.clone())?.count();
            Ok(neighbors + usize::from(self.has_edge_connecting(node.clone(), node)))
        }
    }

    /// Gets the number of edges into `node`.  Equal to [`Self::degree`] for
    /// undirected graphs.
    fn in_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        if self.is_directed() {
            Ok(self.predecessors(node)?.count())
        } else {
            self.degree(node)
        }
    }

    /// Gets the number of edges from `node`.  Equal to [`Self::degree`] for
    /// undirected graphs.
    fn out_degree(&self, node: Self::Node) -> Result<usize, GraphError<Self::Node>> {
        if self.is_directed() {
            Ok(self.successors(node)?.count())
        } else {
            self.degree(node)
        }
    }

    // Edges

    /// Gets an iterator over all edges in the graph.  Each undirected edge is
    /// reported once, from its lesser endpoint.
    fn edges(&self) -> impl Iterator<Item = EndpointPair<Self::Node>> + '_ {
        let directedness = self.directedness();
        self.nodes().flat_map(move |u| {
            self.successors(u.clone())
                .into_iter()
                .flatten()
                .filter_map(move |v| {
                    (directedness.is_directed() || u <= v)
                        .then(|| EndpointPair::of(directedness, u.clone(), v))
                })
        })
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Gets the edges incident to `node`.  A self-loop is reported once.
    fn incident_edges(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = EndpointPair<Self::Node>> + '_, GraphError<Self::Node>>
    {
        let directedness = self.directedness();
        let directed = directedness.is_directed();
        let target = node.clone();
        let incoming = self
            .predecessors(node.clone())?
            .filter(move |_| directed)
            .map(move |p| EndpointPair::of(directedness, p, target.clone()));
        let source = node.clone();
        let outgoing = self
            .successors(node.clone())?
            .filter(move |s| !directed || *s != node)
            .map(move |s| EndpointPair::of(directedness, source.clone(), s));
        Ok(incoming.chain(outgoing))
    }

    /// Checks whether an edge connects `u` to `v`.  Returns false, rather
    /// than an error, if either node is absent.
    fn has_edge_connecting(&self, u: Self::Node, v: Self::Node) -> bool {
        self.successors(u)
            .map(|mut successors| successors.any(|s| s == v))
            .unwrap_or(false)
    }

    /// Checks whether the graph contains the edge described by `endpoints`.
    /// An unordered pair never matches an edge of a directed graph.
    fn has_edge_connecting_endpoints(&self, endpoints: &EndpointPair<Self::Node>) -> bool {
        if self.is_directed() && !endpoints.is_ordered() {
            return false;
        }
        let (u, v) = endpoints.nodes();
        self.has_edge_connecting(u.clone(), v.clone())
    }

    // Searches

    /// Performs a breadth-first search starting from the given node.
    fn bfs(&self, start: Self::Node) -> BfsIterator<'_, Self>
    where
        Self: Sized,
    {
        BfsIterator::new(self, vec![start])
    }

    /// Performs a depth-first search starting from the given node.
    fn dfs(&self, start: Self::Node) -> DfsIterator<'_, Self>
    where
        Self: Sized,
    {
        DfsIterator::new(self, vec![start])
    }
}

/// A trait for graphs that support mutation operations.
///
/// Adding a node or edge that is already present is not an error; the
/// boolean result reports whether anything changed.
pub trait GraphMut: Graph {
    /// Adds a node, returning true if it was not already present.
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Adds an edge from `u` to `v`, adding either node if it is absent.
    /// Returns `Ok(false)` if the edge was already present.
    ///
    /// Fails with [`GraphError::SelfLoopNotAllowed`] if `u == v` and the
    /// graph does not allow self-loops; the graph is unchanged on failure.
    fn put_edge(&mut self, u: Self::Node, v: Self::Node) -> Result<bool, GraphError<Self::Node>>;

    /// Adds the edge described by `endpoints`.  An unordered pair cannot be
    /// added to a directed graph.
    fn put_edge_endpoints(
        &mut self,
        endpoints: EndpointPair<Self::Node>,
    ) -> Result<bool, GraphError<Self::Node>> {
        if self.is_directed() && !endpoints.is_ordered() {
            return Err(GraphError::InvalidOperation {
                operation: "put_edge_endpoints",
                reason: "an unordered endpoint pair cannot be added to a directed graph",
            });
        }
        let (u, v) = endpoints.into_nodes();
        self.put_edge(u, v)
    }

    /// Removes a node and every edge incident to it, returning true if the
    /// node was present.
    fn remove_node(&mut self, node: Self::Node) -> bool;

    /// Removes the edge from `u` to `v`, returning true if it was present.
    fn remove_edge(&mut self, u: Self::Node, v: Self::Node) -> bool;

    /// Removes the edge described by `endpoints`, returning true if it was
    /// present.
    fn remove_edge_endpoints(&mut self, endpoints: EndpointPair<Self::Node>) -> bool {
        if self.is_directed() && !endpoints.is_ordered() {
            return false;
        }
        let (u, v) = endpoints.into_nodes();
        self.remove_edge(u, v)
    }

    /// Removes all nodes and edges from the graph.
    fn clear(&mut self) {
        for node in self.nodes().collect::<Vec<_>>() {
            self.remove_node(node);
        }
    }
}
