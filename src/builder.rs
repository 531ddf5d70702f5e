//! Builders for [`MutableGraph`], [`MutableValueGraph`] and
//! [`MutableNetwork`].
//!
//! A builder is a small `Copy` value describing a configuration.  Each setter
//! returns a new builder and leaves the receiver alone, so one builder can
//! serve as the template for many structures:
//!
//! ```
//! use netgraph::prelude::*;
//!
//! let base = NetworkBuilder::directed().allows_parallel_edges(true);
//! let strict: MutableNetwork<u32, &str> = base.allows_parallel_edges(false).build();
//! let relaxed: MutableNetwork<u32, &str> = base.build();
//! assert!(!strict.allows_parallel_edges());
//! assert!(relaxed.allows_parallel_edges());
//! ```
use std::marker::PhantomData;

use derivative::Derivative;

use crate::{
    directedness::Directedness,
    edge_multiplicity::EdgeMultiplicity,
    element_order::ElementOrder,
    graph::{EdgeId, Graph, Network, NodeId, ValueGraph},
    mutable_graph::MutableGraph,
    mutable_network::MutableNetwork,
    mutable_value_graph::MutableValueGraph,
};

/// Configuration for a [`MutableGraph`].  Self-loops are disallowed and
/// nodes are enumerated in insertion order unless configured otherwise.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct GraphBuilder<N> {
    pub(crate) directedness: Directedness,
    pub(crate) allows_self_loops: bool,
    pub(crate) node_order: ElementOrder,
    pub(crate) expected_node_count: Option<usize>,
    #[derivative(Debug = "ignore")]
    node_type: PhantomData<fn() -> N>,
}

impl<N: NodeId> GraphBuilder<N> {
    fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            allows_self_loops: false,
            node_order: ElementOrder::default(),
            expected_node_count: None,
            node_type: PhantomData,
        }
    }

    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Creates a builder with the same directedness, self-loop policy and
    /// node order as `graph`.  Nothing else is copied.
    pub fn from_graph<G: Graph<Node = N>>(graph: &G) -> Self {
        Self::new(graph.directedness())
            .allows_self_loops(graph.allows_self_loops())
            .node_order(graph.node_order())
    }

    #[must_use]
    pub fn allows_self_loops(&self, allows_self_loops: bool) -> Self {
        Self {
            allows_self_loops,
            ..*self
        }
    }

    #[must_use]
    pub fn node_order(&self, node_order: ElementOrder) -> Self {
        Self { node_order, ..*self }
    }

    /// Sets a capacity hint for the node index.
    #[must_use]
    pub fn expected_node_count(&self, count: usize) -> Self {
        Self {
            expected_node_count: Some(count),
            ..*self
        }
    }

    pub fn build(&self) -> MutableGraph<N> {
        MutableGraph::from_builder(self)
    }
}

/// Configuration for a [`MutableValueGraph`].  The defaults match
/// [`GraphBuilder`].
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct ValueGraphBuilder<N, V> {
    pub(crate) graph: GraphBuilder<N>,
    #[derivative(Debug = "ignore")]
    value_type: PhantomData<fn() -> V>,
}

impl<N: NodeId, V> ValueGraphBuilder<N, V> {
    fn new(graph: GraphBuilder<N>) -> Self {
        Self {
            graph,
            value_type: PhantomData,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphBuilder::directed())
    }

    pub fn undirected() -> Self {
        Self::new(GraphBuilder::undirected())
    }

    /// Creates a builder with the same directedness, self-loop policy and
    /// node order as `graph`.
    pub fn from_value_graph<G: ValueGraph<Node = N>>(graph: &G) -> Self {
        Self::new(GraphBuilder::from_graph(graph))
    }

    #[must_use]
    pub fn allows_self_loops(&self, allows_self_loops: bool) -> Self {
        Self::new(self.graph.allows_self_loops(allows_self_loops))
    }

    #[must_use]
    pub fn node_order(&self, node_order: ElementOrder) -> Self {
        Self::new(self.graph.node_order(node_order))
    }

    #[must_use]
    pub fn expected_node_count(&self, count: usize) -> Self {
        Self::new(self.graph.expected_node_count(count))
    }

    pub fn build(&self) -> MutableValueGraph<N, V> {
        MutableValueGraph::from_builder(self)
    }
}

/// Configuration for a [`MutableNetwork`].  Self-loops and parallel edges
/// are disallowed, and nodes and edges are enumerated in insertion order,
/// unless configured otherwise.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct NetworkBuilder<N, E> {
    pub(crate) directedness: Directedness,
    pub(crate) allows_self_loops: bool,
    pub(crate) edge_multiplicity: EdgeMultiplicity,
    pub(crate) node_order: ElementOrder,
    pub(crate) edge_order: ElementOrder,
    pub(crate) expected_node_count: Option<usize>,
    pub(crate) expected_edge_count: Option<usize>,
    #[derivative(Debug = "ignore")]
    element_types: PhantomData<fn() -> (N, E)>,
}

impl<N: NodeId, E: EdgeId> NetworkBuilder<N, E> {
    fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            allows_self_loops: false,
            edge_multiplicity: EdgeMultiplicity::default(),
            node_order: ElementOrder::default(),
            edge_order: ElementOrder::default(),
            expected_node_count: None,
            expected_edge_count: None,
            element_types: PhantomData,
        }
    }

    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Creates a builder with the same directedness, policies and element
    /// orders as `network`.
    pub fn from_network<G: Network<Node = N, Edge = E>>(network: &G) -> Self {
        Self::new(network.directedness())
            .allows_self_loops(network.allows_self_loops())
            .allows_parallel_edges(network.allows_parallel_edges())
            .node_order(network.node_order())
            .edge_order(network.edge_order())
    }

    #[must_use]
    pub fn allows_self_loops(&self, allows_self_loops: bool) -> Self {
        Self {
            allows_self_loops,
            ..*self
        }
    }

    #[must_use]
    pub fn allows_parallel_edges(&self, allows_parallel_edges: bool) -> Self {
        Self {
            edge_multiplicity: EdgeMultiplicity::from_allows_parallel_edges(allows_parallel_edges),
            ..*self
        }
    }

    #[must_use]
    pub fn node_order(&self, node_order: ElementOrder) -> Self {
        Self { node_order, ..*self }
    }

    #[must_use]
    pub fn edge_order(&self, edge_order: ElementOrder) -> Self {
        Self { edge_order, ..*self }
    }

    #[must_use]
    pub fn expected_node_count(&self, count: usize) -> Self {
        Self {
            expected_node_count: Some(count),
            ..*self
        }
    }

    #[must_use]
    pub fn expected_edge_count(&self, count: usize) -> Self {
        Self {
            expected_edge_count: Some(count),
            ..*self
        }
    }

    pub fn build(&self) -> MutableNetwork<N, E> {
        MutableNetwork::from_builder(self)
    }
}
