use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::{
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    element_order::ElementOrder,
    endpoint_pair::EndpointPair,
    error::GraphError,
    graph::NodeId,
    views::NetworkAsGraph,
};

/// A trait representing an edge identifier in a network.  Like [`NodeId`],
/// every type with the required bounds qualifies.
pub trait EdgeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> EdgeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// The error type of network operations.
pub type NetworkError<G> = GraphError<<G as Network>::Node, <G as Network>::Edge>;

/// A graph whose edges are unique entities with their own identifiers.
///
/// Two edges may connect the same pair of nodes if the network allows
/// parallel edges.  Every edge has exactly one [`EndpointPair`] for as long
/// as it is in the network.
///
/// Unlike [`crate::Graph`], a network's degree counts edges rather than
/// neighbors, so parallel edges each contribute.
pub trait Network {
    type Node: NodeId;
    type Edge: EdgeId;

    fn directedness(&self) -> Directedness;

    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    fn allows_self_loops(&self) -> bool;

    fn edge_multiplicity(&self) -> EdgeMultiplicity;

    fn allows_parallel_edges(&self) -> bool {
        self.edge_multiplicity().allows_parallel_edges()
    }

    fn node_order(&self) -> ElementOrder;

    fn edge_order(&self) -> ElementOrder;

    // Nodes

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    fn contains_node(&self, node: Self::Node) -> bool;

    /// Gets the nodes connected to `node` by at least one edge, each once.
    fn adjacent_nodes(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, NetworkError<Self>> {
        let mut seen = HashSet::new();
        let center = node.clone();
        Ok(self
            .incident_edges(node)?
            .filter_map(move |edge| {
                let endpoints = self.incident_nodes(edge).ok()?;
                endpoints.adjacent_node(&center).cloned()
            })
            .filter(move |n| seen.insert(n.clone())))
    }

    /// Gets the sources of edges into `node`, each once.
    fn predecessors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, NetworkError<Self>> {
        let mut seen = HashSet::new();
        let center = node.clone();
        Ok(self
            .in_edges(node)?
            .filter_map(move |edge| {
                let endpoints = self.incident_nodes(edge).ok()?;
                endpoints.adjacent_node(&center).cloned()
            })
            .filter(move |n| seen.insert(n.clone())))
    }

    /// Gets the targets of edges from `node`, each once.
    fn successors(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Node> + '_, NetworkError<Self>> {
        let mut seen = HashSet::new();
        let center = node.clone();
        Ok(self
            .out_edges(node)?
            .filter_map(move |edge| {
                let endpoints = self.incident_nodes(edge).ok()?;
                endpoints.adjacent_node(&center).cloned()
            })
            .filter(move |n| seen.insert(n.clone())))
    }

    /// Gets the number of edges incident to `node`.  A self-loop counts
    /// twice, so the degrees of all nodes sum to twice the number of edges.
    fn degree(&self, node: Self::Node) -> Result<usize, NetworkError<Self>> {
        if self.is_directed() {
            Ok(self.in_degree(node.clone())? + self.out_degree(node)?)
        } else {
            let incident = self.incident_edges(node.clone())?.count();
            let self_loops = self.edges_connecting(node.clone(), node)?.count();
            Ok(incident + self_loops)
        }
    }

    fn in_degree(&self, node: Self::Node) -> Result<usize, NetworkError<Self>> {
        if self.is_directed() {
            Ok(self.in_edges(node)?.count())
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: Self::Node) -> Result<usize, NetworkError<Self>> {
        if self.is_directed() {
            Ok(self.out_edges(node)?.count())
        } else {
            self.degree(node)
        }
    }

    // Edges

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    fn contains_edge(&self, edge: Self::Edge) -> bool;

    /// Gets the nodes `edge` connects.
    fn incident_nodes(
        &self,
        edge: Self::Edge,
    ) -> Result<EndpointPair<Self::Node>, NetworkError<Self>>;

    /// Gets every edge with `node` as an endpoint.  A self-loop is reported
    /// once.
    fn incident_edges(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Edge> + '_, NetworkError<Self>>;

    /// Gets the edges into `node`.  For undirected networks this is the same
    /// as [`Self::incident_edges`].
    fn in_edges(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Edge> + '_, NetworkError<Self>>;

    /// Gets the edges from `node`.  For undirected networks this is the same
    /// as [`Self::incident_edges`].
    fn out_edges(
        &self,
        node: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Edge> + '_, NetworkError<Self>>;

    /// Gets the edges other than `edge` that share an endpoint with it.
    fn adjacent_edges(
        &self,
        edge: Self::Edge,
    ) -> Result<impl Iterator<Item = Self::Edge> + '_, NetworkError<Self>> {
        let (u, v) = self.incident_nodes(edge.clone())?.into_nodes();
        let mut seen = HashSet::from([edge]);
        let at_u = self.incident_edges(u.clone())?;
        let at_v = self
            .incident_edges(v.clone())?
            .filter(move |_| u != v);
        Ok(at_u.chain(at_v).filter(move |e| seen.insert(e.clone())))
    }

    /// Gets every edge connecting `u` to `v`.  For undirected networks the
    /// order of `u` and `v` does not matter.
    fn edges_connecting(
        &self,
        u: Self::Node,
        v: Self::Node,
    ) -> Result<impl Iterator<Item = Self::Edge> + '_, NetworkError<Self>> {
        let source = u.clone();
        let out_edges = self.out_edges(u)?;
        if !self.contains_node(v.clone()) {
            return Err(GraphError::NodeNotFound(v));
        }
        Ok(out_edges.filter(move |edge| {
            self.incident_nodes(edge.clone())
                .is_ok_and(|endpoints| endpoints.connects(&source, &v))
        }))
    }

    /// Gets the single edge connecting `u` to `v`, if any.
    ///
    /// Fails with [`GraphError::InvalidOperation`] if more than one edge
    /// connects them.
    fn edge_connecting(
        &self,
        u: Self::Node,
        v: Self::Node,
    ) -> Result<Option<Self::Edge>, NetworkError<Self>> {
        let mut edges = self.edges_connecting(u, v)?;
        let first = edges.next();
        if edges.next().is_some() {
            return Err(GraphError::InvalidOperation {
                operation: "edge_connecting",
                reason: "more than one edge connects the given nodes",
            });
        }
        Ok(first)
    }

    /// Checks whether any edge connects `u` to `v`.  Returns false, rather
    /// than an error, if either node is absent.
    fn has_edge_connecting(&self, u: Self::Node, v: Self::Node) -> bool {
        self.edges_connecting(u, v)
            .map(|mut edges| edges.next().is_some())
            .unwrap_or(false)
    }

    /// Returns a read-only view of this network as a graph.  Parallel edges
    /// collapse into a single graph edge.
    fn as_graph(&self) -> NetworkAsGraph<&Self>
    where
        Self: Sized,
    {
        NetworkAsGraph::new(self)
    }
}

/// A network that supports mutation.
pub trait NetworkMut: Network {
    /// Adds a node, returning true if it was not already present.
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Adds `edge` connecting `u` to `v`, adding either node if it is absent.
    /// Returns `Ok(false)` if the network already contains an edge with this
    /// identifier.
    ///
    /// Fails if `u == v` and self-loops are not allowed, or if `u` and `v` are
    /// already connected and parallel edges are not allowed.  The network is
    /// unchanged on failure.
    fn add_edge(
        &mut self,
        edge: Self::Edge,
        u: Self::Node,
        v: Self::Node,
    ) -> Result<bool, NetworkError<Self>>;

    /// Adds `edge` connecting the nodes of `endpoints`.  An unordered pair
    /// cannot be added to a directed network.
    fn add_edge_endpoints(
        &mut self,
        edge: Self::Edge,
        endpoints: EndpointPair<Self::Node>,
    ) -> Result<bool, NetworkError<Self>> {
        if self.is_directed() && !endpoints.is_ordered() {
            return Err(GraphError::InvalidOperation {
                operation: "add_edge_endpoints",
                reason: "an unordered endpoint pair cannot be added to a directed network",
            });
        }
        let (u, v) = endpoints.into_nodes();
        self.add_edge(edge, u, v)
    }

    /// Removes a node and every edge incident to it, returning true if the
    /// node was present.
    fn remove_node(&mut self, node: Self::Node) -> bool;

    /// Removes an edge, returning true if it was present.  Its endpoints stay
    /// in the network.
    fn remove_edge(&mut self, edge: Self::Edge) -> bool;

    /// Removes all nodes and edges.
    fn clear(&mut self) {
        for node in self.nodes().collect::<Vec<_>>() {
            self.remove_node(node);
        }
    }

    /// Returns a view of this network as a graph that can add nodes and
    /// remove nodes and edges.
    fn as_graph_mut(&mut self) -> NetworkAsGraph<&mut Self>
    where
        Self: Sized,
    {
        NetworkAsGraph::new(self)
    }
}
