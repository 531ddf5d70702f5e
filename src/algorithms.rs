//! Whole-graph algorithms built on the [`Graph`], [`ValueGraph`] and
//! [`Network`] traits.
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

#[cfg(feature = "pathfinding")]
use pathfinding::num_traits::Zero;

use crate::{
    builder::{GraphBuilder, NetworkBuilder, ValueGraphBuilder},
    error::GraphError,
    graph::{Graph, GraphMut, Network, NetworkMut, ValueGraph, ValueGraphMut},
    mutable_graph::MutableGraph,
    mutable_network::MutableNetwork,
    mutable_value_graph::MutableValueGraph,
    tracing_support::info_span,
};

/// Returns every node reachable from `node` by following successor edges,
/// including `node` itself.
pub fn reachable_nodes<G: Graph>(
    graph: &G,
    node: G::Node,
) -> Result<HashSet<G::Node>, GraphError<G::Node>> {
    if !graph.contains_node(node.clone()) {
        return Err(GraphError::NodeNotFound(node));
    }
    Ok(graph.bfs(node).collect())
}

fn successors_of<G: Graph>(graph: &G, node: G::Node) -> Vec<G::Node> {
    graph
        .successors(node)
        .map(|successors| successors.collect())
        .unwrap_or_default()
}

/// Returns true if `graph` has at least one cycle.  For an undirected graph,
/// following an edge and immediately returning along the same edge does not
/// count, but a self-loop does.
pub fn has_cycle<G: Graph>(graph: &G) -> bool {
    let _span = info_span!("has_cycle").entered();
    if graph.is_directed() {
        has_directed_cycle(graph)
    } else {
        has_undirected_cycle(graph)
    }
}

enum Visit {
    InProgress,
    Done,
}

fn has_directed_cycle<G: Graph>(graph: &G) -> bool {
    let mut state: HashMap<G::Node, Visit> = HashMap::new();
    for start in graph.nodes() {
        if state.contains_key(&start) {
            continue;
        }
        state.insert(start.clone(), Visit::InProgress);
        let mut stack = vec![(start.clone(), successors_of(graph, start))];
        while let Some((node, pending)) = stack.last_mut() {
            match pending.pop() {
                Some(next) => match state.get(&next) {
                    Some(Visit::InProgress) => return true,
                    Some(Visit::Done) => {}
                    None => {
                        state.insert(next.clone(), Visit::InProgress);
                        let successors = successors_of(graph, next.clone());
                        stack.push((next, successors));
                    }
                },
                None => {
                    state.insert(node.clone(), Visit::Done);
                    stack.pop();
                }
            }
        }
    }
    false
}

fn has_undirected_cycle<G: Graph>(graph: &G) -> bool {
    let mut visited = HashSet::new();
    for start in graph.nodes() {
        if !visited.insert(start.clone()) {
            continue;
        }
        let mut stack: Vec<(G::Node, Option<G::Node>)> = vec![(start, None)];
        while let Some((node, parent)) = stack.pop() {
            for next in successors_of(graph, node.clone()) {
                if parent.as_ref() == Some(&next) {
                    continue;
                }
                if !visited.insert(next.clone()) {
                    return true;
                }
                stack.push((next, Some(node.clone())));
            }
        }
    }
    false
}

/// Returns true if `network` has at least one cycle.  In an undirected
/// network, two parallel edges form a cycle.
pub fn network_has_cycle<G: Network>(network: &G) -> bool {
    if !network.is_directed() && network.allows_parallel_edges() {
        let parallel = network.edges().any(|edge| {
            network.incident_nodes(edge).is_ok_and(|endpoints| {
                let (u, v) = endpoints.into_nodes();
                network
                    .edges_connecting(u, v)
                    .is_ok_and(|edges| edges.count() > 1)
            })
        });
        if parallel {
            return true;
        }
    }
    has_cycle(&network.as_graph())
}

/// Returns a graph with an edge from `u` to `v` whenever `v` is reachable
/// from `u` in `graph`.  Every node reaches itself, so every node has a
/// self-loop.
pub fn transitive_closure<G: Graph>(graph: &G) -> MutableGraph<G::Node> {
    let _span = info_span!("transitive_closure", nodes = graph.num_nodes()).entered();
    let mut closure = GraphBuilder::from_graph(graph)
        .allows_self_loops(true)
        .expected_node_count(graph.num_nodes())
        .build();
    for node in graph.nodes() {
        closure.add_node(node.clone());
        for reachable in graph.bfs(node.clone()) {
            let added = closure.put_edge(node.clone(), reachable);
            debug_assert!(added.is_ok(), "closure allows self-loops");
        }
    }
    closure
}

/// Returns the subgraph of `graph` made of `nodes` and every edge of `graph`
/// with both endpoints among them.
pub fn induced_subgraph<G: Graph>(
    graph: &G,
    nodes: impl IntoIterator<Item = G::Node>,
) -> Result<MutableGraph<G::Node>, GraphError<G::Node>> {
    let mut subgraph = GraphBuilder::from_graph(graph).build();
    for node in nodes {
        if !graph.contains_node(node.clone()) {
            return Err(GraphError::NodeNotFound(node));
        }
        subgraph.add_node(node);
    }
    let members: Vec<_> = subgraph.nodes().collect();
    for u in members {
        for v in graph.successors(u.clone())? {
            if subgraph.contains_node(v.clone()) {
                subgraph.put_edge(u.clone(), v)?;
            }
        }
    }
    Ok(subgraph)
}

/// Copies the nodes, edges and configuration of `graph`.
pub fn copy_of<G: Graph>(graph: &G) -> MutableGraph<G::Node> {
    let mut copy = GraphBuilder::from_graph(graph)
        .expected_node_count(graph.num_nodes())
        .build();
    for node in graph.nodes() {
        copy.add_node(node);
    }
    for endpoints in graph.edges() {
        let copied = copy.put_edge_endpoints(endpoints);
        debug_assert!(copied.is_ok(), "source graph reports an edge its own policy forbids");
    }
    copy
}

/// Copies the nodes, edges, edge values and configuration of `graph`.
pub fn copy_of_value_graph<G>(graph: &G) -> MutableValueGraph<G::Node, G::Value>
where
    G: ValueGraph,
    G::Value: Clone,
{
    let mut copy = ValueGraphBuilder::from_value_graph(graph)
        .expected_node_count(graph.num_nodes())
        .build();
    for node in graph.nodes() {
        copy.add_node(node);
    }
    for endpoints in graph.edges() {
        let Ok(value) = graph.edge_value_endpoints(&endpoints) else {
            debug_assert!(false, "source graph reports an edge without a value");
            continue;
        };
        let (u, v) = endpoints.into_nodes();
        let copied = copy.put_edge_value(u, v, value.clone());
        debug_assert!(copied.is_ok(), "source graph reports an edge its own policy forbids");
    }
    copy
}

/// Copies the nodes, edges and configuration of `network`, keeping every
/// edge identifier.
pub fn copy_of_network<G: Network>(network: &G) -> MutableNetwork<G::Node, G::Edge> {
    let mut copy = NetworkBuilder::from_network(network)
        .expected_node_count(network.num_nodes())
        .expected_edge_count(network.num_edges())
        .build();
    for node in network.nodes() {
        copy.add_node(node);
    }
    for edge in network.edges() {
        let Ok(endpoints) = network.incident_nodes(edge.clone()) else {
            debug_assert!(false, "source network reports an edge without endpoints");
            continue;
        };
        let copied = copy.add_edge_endpoints(edge, endpoints);
        debug_assert!(copied.is_ok(), "source network reports an edge its own policy forbids");
    }
    copy
}

fn collect_set<T: Eq + Hash>(items: impl Iterator<Item = T>) -> HashSet<T> {
    items.collect()
}

/// Returns true if `a` and `b` have the same directedness, nodes and edges.
/// Element order and self-loop policy are not compared.
pub fn equivalent<A, B>(a: &A, b: &B) -> bool
where
    A: Graph,
    B: Graph<Node = A::Node>,
{
    a.directedness() == b.directedness()
        && a.num_nodes() == b.num_nodes()
        && a.num_edges() == b.num_edges()
        && collect_set(a.nodes()) == collect_set(b.nodes())
        && collect_set(a.edges()) == collect_set(b.edges())
}

/// Groups the nodes of `graph` into connected components, ignoring edge
/// direction.
#[cfg(feature = "pathfinding")]
pub fn connected_components<G: Graph>(graph: &G) -> Vec<HashSet<G::Node>> {
    let _span = info_span!("connected_components").entered();
    pathfinding::prelude::connected_components(&graph.nodes().collect::<Vec<_>>(), |node| {
        graph
            .adjacent_nodes(node.clone())
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
    })
}

/// Groups the nodes of a directed graph into strongly connected components.
#[cfg(feature = "pathfinding")]
pub fn strongly_connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::Node>> {
    let _span = info_span!("strongly_connected_components").entered();
    pathfinding::prelude::strongly_connected_components(
        &graph.nodes().collect::<Vec<_>>(),
        |node| successors_of(graph, node.clone()),
    )
}

/// Finds the cheapest path from `start` to every node reachable from it,
/// using edge values as costs.  Returns a map from each reachable node to the
/// path taken and its total cost.
///
/// Costs must be non-negative; a graph with a negative edge value is rejected
/// with [`GraphError::InvalidOperation`].
#[cfg(feature = "pathfinding")]
pub fn shortest_paths<G>(
    graph: &G,
    start: G::Node,
) -> Result<HashMap<G::Node, (Vec<G::Node>, G::Value)>, GraphError<G::Node>>
where
    G: ValueGraph,
    G::Value: Zero + Ord + Copy,
{
    use pathfinding::prelude::{build_path, dijkstra_all};

    let _span = info_span!("shortest_paths").entered();
    if !graph.contains_node(start.clone()) {
        return Err(GraphError::NodeNotFound(start));
    }
    for endpoints in graph.edges() {
        if *graph.edge_value_endpoints(&endpoints)? < G::Value::zero() {
            return Err(GraphError::InvalidOperation {
                operation: "shortest_paths",
                reason: "edge values must not be negative",
            });
        }
    }
    let parents: HashMap<G::Node, (G::Node, G::Value)> = dijkstra_all(&start, |node| {
        successors_of(graph, node.clone())
            .into_iter()
            .filter_map(|next| {
                let cost = *graph.edge_value(node.clone(), next.clone()).ok()?;
                Some((next, cost))
            })
            .collect::<Vec<_>>()
    });
    let mut result: HashMap<G::Node, (Vec<G::Node>, G::Value)> = parents
        .iter()
        .map(|(node, (_, cost))| (node.clone(), (build_path(node, &parents), *cost)))
        .collect();
    result.insert(start.clone(), (vec![start], G::Value::zero()));
    Ok(result)
}
