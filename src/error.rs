use std::{convert::Infallible, fmt::Debug};

/// Errors reported by graph, value graph and network operations.
///
/// `N` is the node type.  `E` is the edge identifier type of a network; for
/// graphs and value graphs, whose edges have no identity of their own, it
/// defaults to [`Infallible`].
///
/// Every error is a deterministic function of the structure's current state,
/// and an operation that fails leaves the structure unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N: Debug, E: Debug = Infallible> {
    #[error("node {0:?} is not an element of this graph")]
    NodeNotFound(N),

    #[error("edge {0:?} is not an element of this graph")]
    EdgeNotFound(E),

    #[error("no edge connects node {0:?} to node {1:?}")]
    EdgeConnectingNotFound(N, N),

    #[error("cannot add self-loop edge on node {0:?}, as self-loops are not allowed")]
    SelfLoopNotAllowed(N),

    #[error(
        "nodes {0:?} and {1:?} are already connected by a different edge, \
         and parallel edges are not allowed"
    )]
    ParallelEdgeNotAllowed(N, N),

    #[error("{operation} is not supported: {reason}")]
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },
}

impl<N: Debug, E: Debug> GraphError<N, E> {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound(_)
                | GraphError::EdgeNotFound(_)
                | GraphError::EdgeConnectingNotFound(..)
        )
    }
}

/// Converts a network error into a graph error.  Edge identifiers are not
/// visible through a graph, so an error naming one becomes an
/// [`GraphError::InvalidOperation`].
pub(crate) fn narrow<N: Debug, E: Debug>(error: GraphError<N, E>) -> GraphError<N> {
    match error {
        GraphError::NodeNotFound(n) => GraphError::NodeNotFound(n),
        GraphError::EdgeNotFound(_) => GraphError::InvalidOperation {
            operation: "edge lookup",
            reason: "edge identifiers are not visible through a graph view",
        },
        GraphError::EdgeConnectingNotFound(u, v) => GraphError::EdgeConnectingNotFound(u, v),
        GraphError::SelfLoopNotAllowed(n) => GraphError::SelfLoopNotAllowed(n),
        GraphError::ParallelEdgeNotAllowed(u, v) => GraphError::ParallelEdgeNotAllowed(u, v),
        GraphError::InvalidOperation { operation, reason } => {
            GraphError::InvalidOperation { operation, reason }
        }
    }
}
