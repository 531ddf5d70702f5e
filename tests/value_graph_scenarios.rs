use netgraph::{algorithms, prelude::*};

#[test]
fn test_put_edge_value_replaces() {
    let mut graph: MutableValueGraph<&str, u32> = ValueGraphBuilder::directed().build();
    assert_eq!(graph.put_edge_value("a", "b", 1), Ok(None));
    assert_eq!(graph.put_edge_value("a", "b", 2), Ok(Some(1)));
    assert_eq!(graph.edge_value("a", "b"), Ok(&2));
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(
        graph.edge_value("b", "a"),
        Err(GraphError::EdgeConnectingNotFound("b", "a"))
    );
    assert_eq!(graph.edge_value("a", "z"), Err(GraphError::NodeNotFound("z")));
    assert_eq!(graph.edge_value_or("b", "a", 0), 0);
    assert_eq!(graph.edge_value_or("a", "b", 0), 2);
}

#[test]
fn test_undirected_values_ignore_order() {
    let mut graph: MutableValueGraph<u32, &str> = ValueGraphBuilder::undirected().build();
    graph.put_edge_value(2, 1, "road").unwrap();
    assert_eq!(graph.edge_value(1, 2), Ok(&"road"));
    assert_eq!(graph.put_edge_value(1, 2, "rail"), Ok(Some("road")));
    assert_eq!(graph.edge_value_endpoints(&EndpointPair::unordered(2, 1)), Ok(&"rail"));
    assert_eq!(graph.remove_edge(2, 1), Some("rail"));
    assert_eq!(graph.remove_edge(1, 2), None);
    assert_eq!(graph.num_nodes(), 2);
}

#[test]
fn test_self_loop_rejected_without_change() {
    let mut graph: MutableValueGraph<u32, u32> = ValueGraphBuilder::directed().build();
    assert_eq!(
        graph.put_edge_value(4, 4, 9),
        Err(GraphError::SelfLoopNotAllowed(4))
    );
    assert!(graph.is_empty());

    let mut relaxed: MutableValueGraph<u32, u32> =
        ValueGraphBuilder::directed().allows_self_loops(true).build();
    assert_eq!(relaxed.put_edge_value(4, 4, 9), Ok(None));
    assert_eq!(relaxed.edge_value(4, 4), Ok(&9));
}

#[test]
fn test_put_edge_uses_default_value() {
    let mut graph: MutableValueGraph<u32, u32> = ValueGraphBuilder::directed().build();
    assert_eq!(graph.put_edge(1, 2), Ok(true));
    assert_eq!(graph.edge_value(1, 2), Ok(&0));
    graph.put_edge_value(1, 2, 5).unwrap();
    assert_eq!(graph.put_edge(1, 2), Ok(false));
    assert_eq!(graph.edge_value(1, 2), Ok(&5));
}

#[test]
fn test_remove_node_drops_values() {
    let mut graph: MutableValueGraph<u32, u32> = ValueGraphBuilder::directed().build();
    graph.put_edge_value(1, 2, 12).unwrap();
    graph.put_edge_value(2, 3, 23).unwrap();
    graph.put_edge_value(3, 1, 31).unwrap();
    assert!(graph.remove_node(2));
    assert_eq!(graph.num_edges(), 1);
    let values: Vec<_> = graph.edge_values().map(|(e, v)| (e, *v)).collect();
    assert_eq!(values, [(EndpointPair::ordered(3, 1), 31)]);
    assert_eq!(graph.edge_value(1, 2), Err(GraphError::NodeNotFound(2)));

    // A re-added edge starts with its new value.
    graph.put_edge_value(1, 2, 100).unwrap();
    assert_eq!(graph.edge_value(1, 2), Ok(&100));
}

#[test]
fn test_clear() {
    let mut graph: MutableValueGraph<u32, u32> = ValueGraphBuilder::undirected().build();
    graph.put_edge_value(1, 2, 3).unwrap();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_values().count(), 0);
}

#[test]
fn test_topology_view() {
    let mut graph: MutableValueGraph<u32, u32> = ValueGraphBuilder::directed().build();
    graph.put_edge_value(1, 2, 7).unwrap();
    {
        let mut view = graph.as_graph_mut();
        assert_eq!(view.put_edge(2, 3), Ok(true));
        assert!(view.remove_edge(1, 2));
        assert!(view.add_node(9));
    }
    assert_eq!(graph.edge_value(2, 3), Ok(&0));
    assert_eq!(graph.edge_value(1, 2), Err(GraphError::EdgeConnectingNotFound(1, 2)));
    assert!(graph.contains_node(9));
    assert_eq!(graph.as_graph().num_edges(), 1);
}

#[test]
fn test_copy_preserves_values() {
    let mut graph: MutableValueGraph<&str, f64> = ValueGraphBuilder::undirected()
        .node_order(ElementOrder::Sorted)
        .build();
    graph.put_edge_value("x", "y", 1.5).unwrap();
    graph.add_node("z");
    let copy = algorithms::copy_of_value_graph(&graph);
    assert_eq!(copy.node_order(), ElementOrder::Sorted);
    assert_eq!(copy.nodes().collect::<Vec<_>>(), ["x", "y", "z"]);
    assert_eq!(copy.edge_value("y", "x"), Ok(&1.5));
    assert!(algorithms::equivalent(&graph, &copy));
}

#[cfg(feature = "pathfinding")]
#[test]
fn test_shortest_paths() {
    let mut graph: MutableValueGraph<char, u32> = ValueGraphBuilder::directed().build();
    graph.put_edge_value('a', 'b', 4).unwrap();
    graph.put_edge_value('a', 'c', 1).unwrap();
    graph.put_edge_value('c', 'b', 2).unwrap();
    graph.put_edge_value('b', 'd', 5).unwrap();
    graph.add_node('e');

    let paths = algorithms::shortest_paths(&graph, 'a').unwrap();
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[&'a'], (vec!['a'], 0));
    assert_eq!(paths[&'b'], (vec!['a', 'c', 'b'], 3));
    assert_eq!(paths[&'d'], (vec!['a', 'c', 'b', 'd'], 8));
    assert!(!paths.contains_key(&'e'));
    assert_eq!(
        algorithms::shortest_paths(&graph, 'q').err(),
        Some(GraphError::NodeNotFound('q'))
    );
}

#[cfg(feature = "pathfinding")]
#[test]
fn test_shortest_paths_rejects_negative_costs() {
    let mut graph: MutableValueGraph<char, i32> = ValueGraphBuilder::directed().build();
    graph.put_edge_value('a', 'b', 4).unwrap();
    graph.put_edge_value('b', 'c', 0).unwrap();
    assert_eq!(algorithms::shortest_paths(&graph, 'a').unwrap()[&'c'].1, 4);

    graph.put_edge_value('c', 'a', -1).unwrap();
    assert!(matches!(
        algorithms::shortest_paths(&graph, 'a'),
        Err(GraphError::InvalidOperation {
            operation: "shortest_paths",
            ..
        })
    ));
}
