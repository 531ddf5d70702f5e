//! A mutable network backed by per-node incidence sets and an edge index.
use std::fmt::{Debug, Formatter};

use crate::{
    builder::NetworkBuilder,
    debug::format_debug_network,
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    element_map::ElementMap,
    element_order::ElementOrder,
    endpoint_pair::EndpointPair,
    error::GraphError,
    graph::{EdgeId, Network, NetworkError, NetworkMut, NodeId},
    tracing_support::{debug, trace},
};

mod connections;

use connections::NetworkConnections;

/// A [`Network`] that records, for every node, its incident edges and, for
/// every edge, its endpoints.
///
/// Looking up an edge's endpoints and a node's incident edges takes constant
/// expected time.  Finding the edges connecting two nodes scans the first
/// node's outgoing edges.
#[derive(Clone)]
pub struct MutableNetwork<N, E> {
    nodes: ElementMap<N, NetworkConnections<E>>,
    edges: ElementMap<E, EndpointPair<N>>,
    directedness: Directedness,
    allows_self_loops: bool,
    edge_multiplicity: EdgeMultiplicity,
}

impl<N: NodeId, E: EdgeId> MutableNetwork<N, E> {
    pub(crate) fn from_builder(builder: &NetworkBuilder<N, E>) -> Self {
        Self {
            nodes: ElementMap::with_capacity(
                builder.node_order,
                builder.expected_node_count.unwrap_or_default(),
            ),
            edges: ElementMap::with_capacity(
                builder.edge_order,
                builder.expected_edge_count.unwrap_or_default(),
            ),
            directedness: builder.directedness,
            allows_self_loops: builder.allows_self_loops,
            edge_multiplicity: builder.edge_multiplicity,
        }
    }

    fn connections(&self, node: N) -> Result<&NetworkConnections<E>, GraphError<N, E>> {
        self.nodes.get(&node).ok_or(GraphError::NodeNotFound(node))
    }

    fn connections_entry(&mut self, node: N) -> &mut NetworkConnections<E> {
        let directedness = self.directedness;
        let order = self.edges.order();
        self.nodes
            .get_or_insert_with(node, || NetworkConnections::new(directedness, order))
    }

    fn is_self_loop(&self, edge: &E) -> bool {
        self.edges.get(edge).is_some_and(EndpointPair::is_self_loop)
    }
}

impl<N: NodeId, E: EdgeId> Network for MutableNetwork<N, E> {
    type Node = N;
    type Edge = E;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn edge_multiplicity(&self) -> EdgeMultiplicity {
        self.edge_multiplicity
    }

    fn node_order(&self) -> ElementOrder {
        self.nodes.order()
    }

    fn edge_order(&self) -> ElementOrder {
        self.edges.order()
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

    fn degree(&self, node: N) -> Result<usize, NetworkError<Self>> {
        Ok(match self.connections(node)? {
            NetworkConnections::Directed {
                in_edges,
                out_edges,
            } => in_edges.len() + out_edges.len(),
            NetworkConnections::Undirected { incident } => {
                incident.len() + incident.iter().filter(|e| self.is_self_loop(e)).count()
            }
        })
    }

    fn in_degree(&self, node: N) -> Result<usize, NetworkError<Self>> {
        if self.is_directed() {
            Ok(self.connections(node)?.in_edges().len())
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: N) -> Result<usize, NetworkError<Self>> {
        if self.is_directed() {
            Ok(self.connections(node)?.out_edges().len())
        } else {
            self.degree(node)
        }
    }

    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.edges.keys().cloned()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn contains_edge(&self, edge: E) -> bool {
        self.edges.contains_key(&edge)
    }

    fn incident_nodes(&self, edge: E) -> Result<EndpointPair<N>, NetworkError<Self>> {
        self.edges
            .get(&edge)
            .cloned()
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    fn incident_edges(&self, node: N) -> Result<impl Iterator<Item = E> + '_, NetworkError<Self>> {
        Ok(self.connections(node)?.incident_edges().cloned())
    }

    fn in_edges(&self, node: N) -> Result<impl Iterator<Item = E> + '_, NetworkError<Self>> {
        Ok(self.connections(node)?.in_edges().iter().cloned())
    }

    fn out_edges(&self, node: N) -> Result<impl Iterator<Item = E> + '_, NetworkError<Self>> {
        Ok(self.connections(node)?.out_edges().iter().cloned())
    }
}

impl<N: NodeId, E: EdgeId> NetworkMut for MutableNetwork<N, E> {
    fn add_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        trace!(?node, "adding node");
        self.connections_entry(node);
        true
    }

    fn add_edge(&mut self, edge: E, u: N, v: N) -> Result<bool, NetworkError<Self>> {
        if let Some(existing) = self.edges.get(&edge) {
            if !existing.connects(&u, &v) {
                debug!(
                    ?edge,
                    ?existing,
                    ?u,
                    ?v,
                    "edge already present with different endpoints"
                );
            }
            return Ok(false);
        }
        if u == v && !self.allows_self_loops {
            debug!(?edge, node = ?u, "rejected self-loop");
            return Err(GraphError::SelfLoopNotAllowed(u));
        }
        if !self.allows_parallel_edges() && self.has_edge_connecting(u.clone(), v.clone()) {
            debug!(?edge, ?u, ?v, "rejected parallel edge");
            return Err(GraphError::ParallelEdgeNotAllowed(u, v));
        }
        let endpoints = EndpointPair::of(self.directedness, u.clone(), v.clone());
        self.connections_entry(u).add_out_edge(edge.clone());
        self.connections_entry(v).add_in_edge(edge.clone());
        trace!(?edge, ?endpoints, "added edge");
        self.edges.insert(edge, endpoints);
        Ok(true)
    }

    fn remove_node(&mut self, node: N) -> bool {
        let Some(connections) = self.nodes.get(&node) else {
            return false;
        };
        let incident: Vec<E> = connections.incident_edges().cloned().collect();
        debug_assert_eq!(incident.len(), connections.num_incident());
        for edge in &incident {
            self.remove_edge(edge.clone());
        }
        self.nodes.remove(&node);
        debug!(?node, edges_removed = incident.len(), "removed node");
        true
    }

    fn remove_edge(&mut self, edge: E) -> bool {
        let Some(endpoints) = self.edges.remove(&edge) else {
            return false;
        };
        let (source, target) = endpoints.nodes();
        if let Some(connections) = self.nodes.get_mut(source) {
            connections.remove_out_edge(&edge);
        }
        if let Some(connections) = self.nodes.get_mut(target) {
            connections.remove_in_edge(&edge);
        }
        trace!(?edge, "removed edge");
        true
    }

    fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "clearing network");
        self.nodes.clear();
        self.edges.clear();
    }
}

impl<N: NodeId, E: EdgeId> Debug for MutableNetwork<N, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug_network(self, f, "MutableNetwork")
    }
}
