pub use crate::builder::{GraphBuilder, NetworkBuilder, ValueGraphBuilder};
pub use crate::directedness::Directedness;
pub use crate::edge_multiplicity::EdgeMultiplicity;
pub use crate::element_order::ElementOrder;
pub use crate::endpoint_pair::EndpointPair;
pub use crate::error::GraphError;
pub use crate::graph::{
    EdgeId, Graph, GraphMut, Network, NetworkError, NetworkMut, NodeId, ValueGraph, ValueGraphMut,
};
pub use crate::mutable_graph::MutableGraph;
pub use crate::mutable_network::MutableNetwork;
pub use crate::mutable_value_graph::MutableValueGraph;
pub use crate::views::{NetworkAsGraph, Transposed, ValueGraphAsGraph, transpose};
