//! In-memory graph structures with configurable policies.
//!
//! Three kinds of structure are provided:
//!
//! * [`MutableGraph`]: nodes connected by edges that have no identity beyond
//!   their endpoints.
//! * [`MutableValueGraph`]: a graph whose edges each carry a value.
//! * [`MutableNetwork`]: edges are first-class identifiers, so two nodes may
//!   be connected by several edges.
//!
//! Each is created from a builder that fixes its directedness, whether it
//! accepts self-loops and parallel edges, and the order in which it
//! enumerates nodes and edges.  The read-only [`Graph`], [`ValueGraph`] and
//! [`Network`] traits, plus the views in [`views`], let algorithms treat
//! all three uniformly.
//!
//! ```
//! use netgraph::prelude::*;
//!
//! let mut roads: MutableNetwork<&str, u32> =
//!     NetworkBuilder::undirected().allows_parallel_edges(true).build();
//! roads.add_edge(1, "Oslo", "Bergen").unwrap();
//! roads.add_edge(2, "Oslo", "Bergen").unwrap();
//! assert_eq!(roads.edges_connecting("Bergen", "Oslo").unwrap().count(), 2);
//! assert_eq!(roads.as_graph().num_edges(), 1);
//! ```

pub mod algorithms;
pub mod builder;
pub mod directedness;
pub mod edge_multiplicity;
pub mod element_order;
pub mod endpoint_pair;
pub mod error;
pub mod graph;
pub mod mutable_graph;
pub mod mutable_network;
pub mod mutable_value_graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod views;

mod debug;
mod element_map;
mod util;

#[cfg(test)]
mod graph_test_support;

pub use builder::{GraphBuilder, NetworkBuilder, ValueGraphBuilder};
pub use endpoint_pair::EndpointPair;
pub use error::GraphError;
pub use graph::{
    EdgeId, Graph, GraphMut, Network, NetworkError, NetworkMut, NodeId, ValueGraph, ValueGraphMut,
};
pub use mutable_graph::MutableGraph;
pub use mutable_network::MutableNetwork;
pub use mutable_value_graph::MutableValueGraph;
