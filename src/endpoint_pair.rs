use std::fmt::Debug;

use crate::{directedness::Directedness, util::sort_pair};

/// The two nodes an edge connects.
///
/// An ordered pair (from a directed graph) has a distinct source and target.
/// An unordered pair (from an undirected graph) stores its nodes sorted by
/// `Ord`, so `(u, v)` and `(v, u)` compare and hash equal.  An ordered pair is
/// never equal to an unordered one.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EndpointPair<N> {
    nodes: (N, N),
    directedness: Directedness,
}

impl<N: Ord> EndpointPair<N> {
    /// Creates the endpoint pair for an edge between `u` and `v` under the
    /// given directedness.  This is the single place where `(u, v)` and
    /// `(v, u)` are identified for undirected edges.
    pub fn of(directedness: Directedness, u: N, v: N) -> Self {
        let nodes = if directedness.is_directed() {
            (u, v)
        } else {
            sort_pair(u, v)
        };
        Self {
            nodes,
            directedness,
        }
    }

    /// Creates an ordered pair from `source` to `target`.
    pub fn ordered(source: N, target: N) -> Self {
        Self::of(Directedness::Directed, source, target)
    }

    /// Creates an unordered pair of `u` and `v`.
    pub fn unordered(u: N, v: N) -> Self {
        Self::of(Directedness::Undirected, u, v)
    }
}

impl<N> EndpointPair<N> {
    pub fn is_ordered(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// The source node.  For an unordered pair this is the lesser node.
    pub fn source(&self) -> &N {
        &self.nodes.0
    }

    /// The target node.  For an unordered pair this is the greater node.
    pub fn target(&self) -> &N {
        &self.nodes.1
    }

    pub fn nodes(&self) -> (&N, &N) {
        (&self.nodes.0, &self.nodes.1)
    }

    pub fn into_nodes(self) -> (N, N) {
        self.nodes
    }

    pub fn is_self_loop(&self) -> bool
    where
        N: Eq,
    {
        self.nodes.0 == self.nodes.1
    }

    /// Returns true if this pair connects `u` to `v`.  For an unordered pair
    /// the order of `u` and `v` does not matter.
    pub fn connects(&self, u: &N, v: &N) -> bool
    where
        N: Eq,
    {
        (self.nodes.0 == *u && self.nodes.1 == *v)
            || (!self.is_ordered() && self.nodes.0 == *v && self.nodes.1 == *u)
    }

    /// Given one endpoint, returns the other one, or `None` if `node` is not
    /// an endpoint of this pair.  Both ends of a self-loop are `node`.
    pub fn adjacent_node(&self, node: &N) -> Option<&N>
    where
        N: Eq,
    {
        if self.nodes.0 == *node {
            Some(&self.nodes.1)
        } else if self.nodes.1 == *node {
            Some(&self.nodes.0)
        } else {
            None
        }
    }
}
