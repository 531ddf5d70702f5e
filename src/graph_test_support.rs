use std::{collections::HashSet, fmt::Debug, hash::Hash};

use quickcheck::{Arbitrary, Gen};

use crate::{
    builder::{GraphBuilder, NetworkBuilder, ValueGraphBuilder},
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    element_order::ElementOrder,
    error::GraphError,
    graph::{Graph, GraphMut, Network, NetworkMut, ValueGraphMut},
    mutable_graph::MutableGraph,
    mutable_network::MutableNetwork,
    mutable_value_graph::MutableValueGraph,
    tracing_support::{info_span, init_tracing},
};

/// Generated node identifiers fall below this bound so that random edges
/// collide often.  Tests use identifiers at or above it for fresh nodes.
pub const NODE_RANGE: u8 = 16;

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut Gen) -> Self {
        Directedness::from_directed(bool::arbitrary(g))
    }
}

impl Arbitrary for EdgeMultiplicity {
    fn arbitrary(g: &mut Gen) -> Self {
        EdgeMultiplicity::from_allows_parallel_edges(bool::arbitrary(g))
    }
}

impl Arbitrary for ElementOrder {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            ElementOrder::Unordered,
            ElementOrder::Insertion,
            ElementOrder::Sorted,
        ])
        .unwrap_or(&ElementOrder::Insertion)
    }
}

fn arbitrary_node(g: &mut Gen) -> u8 {
    u8::arbitrary(g) % NODE_RANGE
}

/// A randomly built [`MutableGraph`] with random configuration.  Some nodes
/// and edges are removed after being added, so removal paths are part of
/// every generated graph's history.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: MutableGraph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let builder = if Directedness::arbitrary(g).is_directed() {
            GraphBuilder::directed()
        } else {
            GraphBuilder::undirected()
        };
        let mut graph = builder
            .allows_self_loops(bool::arbitrary(g))
            .node_order(ElementOrder::arbitrary(g))
            .build();
        let num_nodes = usize::arbitrary(g) % 8;
        let num_edges = usize::arbitrary(g) % 40;
        for _ in 0..num_nodes {
            graph.add_node(arbitrary_node(g));
        }
        for _ in 0..num_edges {
            let _ = graph.put_edge(arbitrary_node(g), arbitrary_node(g));
        }
        if bool::arbitrary(g) {
            graph.remove_node(arbitrary_node(g));
        }
        if bool::arbitrary(g) {
            graph.remove_edge(arbitrary_node(g), arbitrary_node(g));
        }
        ArbGraph { graph }
    }
}

/// A randomly built [`MutableValueGraph`] whose values are random integers.
#[derive(Clone, Debug)]
pub struct ArbValueGraph {
    pub graph: MutableValueGraph<u8, i32>,
}

impl Arbitrary for ArbValueGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let builder = if Directedness::arbitrary(g).is_directed() {
            ValueGraphBuilder::directed()
        } else {
            ValueGraphBuilder::undirected()
        };
        let mut graph = builder
            .allows_self_loops(bool::arbitrary(g))
            .node_order(ElementOrder::arbitrary(g))
            .build();
        let num_edges = usize::arbitrary(g) % 40;
        for _ in 0..num_edges {
            let _ = graph.put_edge_value(arbitrary_node(g), arbitrary_node(g), i32::arbitrary(g));
        }
        if bool::arbitrary(g) {
            graph.remove_node(arbitrary_node(g));
        }
        if bool::arbitrary(g) {
            graph.remove_edge(arbitrary_node(g), arbitrary_node(g));
        }
        ArbValueGraph { graph }
    }
}

/// A randomly built [`MutableNetwork`] with random configuration.  Edge
/// identifiers are drawn from a small range, so some insertions hit an
/// existing identifier.
#[derive(Clone, Debug)]
pub struct ArbNetwork {
    pub network: MutableNetwork<u8, u16>,
}

impl Arbitrary for ArbNetwork {
    fn arbitrary(g: &mut Gen) -> Self {
        let builder = if Directedness::arbitrary(g).is_directed() {
            NetworkBuilder::directed()
        } else {
            NetworkBuilder::undirected()
        };
        let mut network = builder
            .allows_self_loops(bool::arbitrary(g))
            .allows_parallel_edges(EdgeMultiplicity::arbitrary(g).allows_parallel_edges())
            .node_order(ElementOrder::arbitrary(g))
            .edge_order(ElementOrder::arbitrary(g))
            .build();
        let num_edges = usize::arbitrary(g) % 40;
        for _ in 0..num_edges {
            let edge = u16::arbitrary(g) % 64;
            let _ = network.add_edge(edge, arbitrary_node(g), arbitrary_node(g));
        }
        if bool::arbitrary(g) {
            network.remove_node(arbitrary_node(g));
        }
        if bool::arbitrary(g) {
            network.remove_edge(u16::arbitrary(g) % 64);
        }
        ArbNetwork { network }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

fn node_set<N: Eq + Hash + Debug>(
    nodes: Result<impl Iterator<Item = N>, GraphError<N>>,
) -> HashSet<N> {
    match nodes {
        Ok(nodes) => nodes.collect(),
        Err(error) => panic!("query on a listed node failed: {error}"),
    }
}

/// Checks the internal consistency of a graph, panicking on the first
/// violation.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();
    let nodes: HashSet<_> = graph.nodes().collect();
    assert!(!has_duplicates(graph.nodes()));
    assert_eq!(nodes.len(), graph.num_nodes());
    assert_eq!(graph.is_empty(), graph.num_nodes() == 0);

    for node in &nodes {
        assert!(graph.contains_node(node.clone()));
        let successors = node_set(graph.successors(node.clone()));
        let predecessors = node_set(graph.predecessors(node.clone()));
        let adjacent = node_set(graph.adjacent_nodes(node.clone()));
        assert!(!has_duplicates(graph.successors(node.clone()).into_iter().flatten()));
        assert!(successors.is_subset(&nodes));
        assert!(predecessors.is_subset(&nodes));
        assert_eq!(
            adjacent,
            successors.union(&predecessors).cloned().collect::<HashSet<_>>()
        );

        if graph.is_directed() {
            for successor in &successors {
                assert!(
                    node_set(graph.predecessors(successor.clone())).contains(node),
                    "{node:?} -> {successor:?} has no matching predecessor entry"
                );
            }
            // Networks count parallel edges in degrees, so a view may
            // report more than one per neighbor.
            let in_degree = graph.in_degree(node.clone()).unwrap_or_default();
            let out_degree = graph.out_degree(node.clone()).unwrap_or_default();
            assert!(in_degree >= predecessors.len());
            assert!(out_degree >= successors.len());
            assert_eq!(in_degree == 0, predecessors.is_empty());
            assert_eq!(out_degree == 0, successors.is_empty());
        } else {
            assert_eq!(successors, predecessors);
            for neighbor in &adjacent {
                assert!(graph.has_edge_connecting(neighbor.clone(), node.clone()));
            }
            assert_eq!(graph.in_degree(node.clone()), graph.degree(node.clone()));
        }

        if !graph.allows_self_loops() {
            assert!(!graph.has_edge_connecting(node.clone(), node.clone()));
        }

        for endpoints in graph.incident_edges(node.clone()).into_iter().flatten() {
            assert!(endpoints.adjacent_node(node).is_some());
            assert!(graph.has_edge_connecting_endpoints(&endpoints));
        }
    }

    let edges: Vec<_> = graph.edges().collect();
    assert!(!has_duplicates(edges.iter()));
    assert_eq!(edges.len(), graph.num_edges());
    for endpoints in &edges {
        assert_eq!(endpoints.is_ordered(), graph.is_directed());
        assert!(graph.has_edge_connecting_endpoints(endpoints));
    }
    assert!(graph.num_nodes() > 0 || graph.num_edges() == 0);
}

/// Checks that the degrees of all nodes sum to twice the number of edges.
pub fn check_degree_sum<G: Graph>(graph: &G) {
    let total: usize = graph
        .nodes()
        .map(|node| graph.degree(node).unwrap_or_default())
        .sum();
    assert_eq!(total, 2 * graph.num_edges());
}

/// Checks the internal consistency of a network, panicking on the first
/// violation.
pub fn check_network_consistency<G: Network>(network: &G) {
    init_tracing();
    let _span = info_span!("check_network_consistency").entered();
    let nodes: HashSet<_> = network.nodes().collect();
    assert!(!has_duplicates(network.nodes()));
    assert_eq!(nodes.len(), network.num_nodes());
    assert!(!has_duplicates(network.edges()));
    assert_eq!(network.edges().count(), network.num_edges());

    for edge in network.edges() {
        let endpoints = network
            .incident_nodes(edge.clone())
            .unwrap_or_else(|error| panic!("listed edge has no endpoints: {error}"));
        let (u, v) = endpoints.nodes();
        assert!(nodes.contains(u) && nodes.contains(v));
        assert_eq!(endpoints.is_ordered(), network.is_directed());
        assert!(network.contains_edge(edge.clone()));
        let out_edges: HashSet<_> = network.out_edges(u.clone()).into_iter().flatten().collect();
        let in_edges: HashSet<_> = network.in_edges(v.clone()).into_iter().flatten().collect();
        assert!(out_edges.contains(&edge));
        assert!(in_edges.contains(&edge));
        let connecting: Vec<_> = network
            .edges_connecting(u.clone(), v.clone())
            .into_iter()
            .flatten()
            .collect();
        assert!(connecting.contains(&edge));
        if !network.allows_parallel_edges() {
            assert_eq!(connecting.len(), 1);
        }
        if !network.allows_self_loops() {
            assert!(!endpoints.is_self_loop());
        }
    }

    let view = network.as_graph();
    for node in &nodes {
        for edge in network.incident_edges(node.clone()).into_iter().flatten() {
            let endpoints = network
                .incident_nodes(edge)
                .unwrap_or_else(|error| panic!("incident edge has no endpoints: {error}"));
            assert!(endpoints.adjacent_node(node).is_some());
        }
        let successors: HashSet<_> = network.successors(node.clone()).into_iter().flatten().collect();
        let view_successors: HashSet<_> = view.successors(node.clone()).into_iter().flatten().collect();
        assert_eq!(successors, view_successors);
    }

    let total_degree: usize = nodes
        .iter()
        .map(|node| network.degree(node.clone()).unwrap_or_default())
        .sum();
    assert_eq!(total_degree, 2 * network.num_edges());
    check_graph_consistency(&view);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck_macros::quickcheck]
    fn prop_arbitrary_graphs_are_consistent(arb: ArbGraph) {
        check_graph_consistency(&arb.graph);
        check_degree_sum(&arb.graph);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_arbitrary_value_graphs_are_consistent(arb: ArbValueGraph) {
        check_graph_consistency(&arb.graph);
        check_degree_sum(&arb.graph);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_arbitrary_networks_are_consistent(arb: ArbNetwork) {
        check_network_consistency(&arb.network);
    }

    #[test]
    fn test_has_duplicates() {
        assert!(!has_duplicates([1, 2, 3]));
        assert!(has_duplicates([1, 2, 1]));
    }
}
