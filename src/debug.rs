use std::fmt::{Debug, Formatter};

use crate::{
    endpoint_pair::EndpointPair,
    graph::{Graph, Network, ValueGraph},
};

struct EdgeTag<'a, N>(&'a EndpointPair<N>);

impl<'a, N: Debug> Debug for EdgeTag<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (u, v) = self.0.nodes();
        if self.0.is_ordered() {
            write!(f, "{u:?} -> {v:?}")
        } else {
            write!(f, "{u:?} -- {v:?}")
        }
    }
}

struct NodeDebug<I>(I);

impl<I> Debug for NodeDebug<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

struct GraphEdgeDebug<'a, G>(&'a G);

impl<'a, G: Graph> Debug for GraphEdgeDebug<'a, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<_> = self.0.edges().collect();
        f.debug_list().entries(edges.iter().map(EdgeTag)).finish()
    }
}

struct ValueEdgeDebug<'a, G>(&'a G);

impl<'a, G> Debug for ValueEdgeDebug<'a, G>
where
    G: ValueGraph,
    G::Value: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<_> = self.0.edges().collect();
        f.debug_map()
            .entries(edges.iter().filter_map(|endpoints| {
                let value = self.0.edge_value_endpoints(endpoints).ok()?;
                Some((EdgeTag(endpoints), value))
            }))
            .finish()
    }
}

struct NetworkEdgeDebug<'a, G>(&'a G);

impl<'a, G: Network> Debug for NetworkEdgeDebug<'a, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<_> = self
            .0
            .edges()
            .filter_map(|edge| Some((edge.clone(), self.0.incident_nodes(edge).ok()?)))
            .collect();
        f.debug_map()
            .entries(edges.iter().map(|(edge, endpoints)| (edge, EdgeTag(endpoints))))
            .finish()
    }
}

/// Formats a graph for debug output, listing its nodes and edges in
/// enumeration order.  Directed edges print as `u -> v` and undirected ones
/// as `u -- v`.
pub fn format_debug<G: Graph>(graph: &G, fmt: &mut Formatter<'_>, name: &str) -> std::fmt::Result {
    let nodes: Vec<_> = graph.nodes().collect();
    fmt.debug_struct(name)
        .field("directed", &graph.is_directed())
        .field("nodes", &NodeDebug(nodes.iter()))
        .field("edges", &GraphEdgeDebug(graph))
        .finish()
}

/// Like [`format_debug`], with each edge mapped to its value.
pub fn format_debug_value_graph<G>(
    graph: &G,
    fmt: &mut Formatter<'_>,
    name: &str,
) -> std::fmt::Result
where
    G: ValueGraph,
    G::Value: Debug,
{
    let nodes: Vec<_> = graph.nodes().collect();
    fmt.debug_struct(name)
        .field("directed", &graph.is_directed())
        .field("nodes", &NodeDebug(nodes.iter()))
        .field("edges", &ValueEdgeDebug(graph))
        .finish()
}

/// Like [`format_debug`], with each edge identifier mapped to its endpoints.
pub fn format_debug_network<G: Network>(
    network: &G,
    fmt: &mut Formatter<'_>,
    name: &str,
) -> std::fmt::Result {
    let nodes: Vec<_> = network.nodes().collect();
    fmt.debug_struct(name)
        .field("directed", &network.is_directed())
        .field("nodes", &NodeDebug(nodes.iter()))
        .field("edges", &NetworkEdgeDebug(network))
        .finish()
}
