use crate::{
    directedness::Directedness,
    element_map::ElementSet,
    element_order::ElementOrder,
    graph::NodeId,
};

/// The neighbors of a single node in a [`super::MutableGraph`].
///
/// A directed node keeps its predecessors and successors apart.  An
/// undirected node has a single neighbor set, which serves as both.
#[derive(Clone, Debug)]
pub(crate) enum GraphConnections<N> {
    Directed {
        predecessors: ElementSet<N>,
        successors: ElementSet<N>,
    },
    Undirected {
        adjacent: ElementSet<N>,
    },
}

impl<N: NodeId> GraphConnections<N> {
    pub fn new(directedness: Directedness, order: ElementOrder) -> Self {
        match directedness {
            Directedness::Directed => GraphConnections::Directed {
                predecessors: ElementSet::new(order),
                successors: ElementSet::new(order),
            },
            Directedness::Undirected => GraphConnections::Undirected {
                adjacent: ElementSet::new(order),
            },
        }
    }

    pub fn predecessors(&self) -> &ElementSet<N> {
        match self {
            GraphConnections::Directed { predecessors, .. } => predecessors,
            GraphConnections::Undirected { adjacent } => adjacent,
        }
    }

    pub fn successors(&self) -> &ElementSet<N> {
        match self {
            GraphConnections::Directed { successors, .. } => successors,
            GraphConnections::Undirected { adjacent } => adjacent,
        }
    }

    /// Successors first, then any predecessor that is not also a successor.
    pub fn adjacent_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        let successors = self.successors();
        successors.iter().chain(
            self.predecessors()
                .iter()
                .filter(move |p| !successors.contains(p)),
        )
    }

    pub fn add_predecessor(&mut self, node: N) -> bool {
        match self {
            GraphConnections::Directed { predecessors, .. } => predecessors.insert(node),
            GraphConnections::Undirected { adjacent } => adjacent.insert(node),
        }
    }

    pub fn add_successor(&mut self, node: N) -> bool {
        match self {
            GraphConnections::Directed { successors, .. } => successors.insert(node),
            GraphConnections::Undirected { adjacent } => adjacent.insert(node),
        }
    }

    pub fn remove_predecessor(&mut self, node: &N) -> bool {
        match self {
            GraphConnections::Directed { predecessors, .. } => predecessors.remove(node),
            GraphConnections::Undirected { adjacent } => adjacent.remove(node),
        }
    }

    pub fn remove_successor(&mut self, node: &N) -> bool {
        match self {
            GraphConnections::Directed { successors, .. } => successors.remove(node),
            GraphConnections::Undirected { adjacent } => adjacent.remove(node),
        }
    }
}
