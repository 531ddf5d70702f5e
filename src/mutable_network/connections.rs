use crate::{
    directedness::Directedness,
    element_map::ElementSet,
    element_order::ElementOrder,
    graph::EdgeId,
};

/// The edges incident to a single node in a [`super::MutableNetwork`].
///
/// A directed node tracks incoming and outgoing edges separately; a self-loop
/// is in both sets.  An undirected node has one incidence set.
#[derive(Clone, Debug)]
pub(crate) enum NetworkConnections<E> {
    Directed {
        in_edges: ElementSet<E>,
        out_edges: ElementSet<E>,
    },
    Undirected {
        incident: ElementSet<E>,
    },
}

impl<E: EdgeId> NetworkConnections<E> {
    pub fn new(directedness: Directedness, order: ElementOrder) -> Self {
        match directedness {
            Directedness::Directed => NetworkConnections::Directed {
                in_edges: ElementSet::new(order),
                out_edges: ElementSet::new(order),
            },
            Directedness::Undirected => NetworkConnections::Undirected {
                incident: ElementSet::new(order),
            },
        }
    }

    pub fn in_edges(&self) -> &ElementSet<E> {
        match self {
            NetworkConnections::Directed { in_edges, .. } => in_edges,
            NetworkConnections::Undirected { incident } => incident,
        }
    }

    pub fn out_edges(&self) -> &ElementSet<E> {
        match self {
            NetworkConnections::Directed { out_edges, .. } => out_edges,
            NetworkConnections::Undirected { incident } => incident,
        }
    }

    /// Outgoing edges first, then incoming edges that are not self-loops.
    pub fn incident_edges(&self) -> impl Iterator<Item = &E> + '_ {
        let out_edges = self.out_edges();
        out_edges.iter().chain(
            self.in_edges()
                .iter()
                .filter(move |e| !out_edges.contains(e)),
        )
    }

    pub fn num_incident(&self) -> usize {
        match self {
            NetworkConnections::Directed {
                in_edges,
                out_edges,
            } => out_edges.len() + in_edges.iter().filter(|e| !out_edges.contains(e)).count(),
            NetworkConnections::Undirected { incident } => incident.len(),
        }
    }

    pub fn add_in_edge(&mut self, edge: E) -> bool {
        match self {
            NetworkConnections::Directed { in_edges, .. } => in_edges.insert(edge),
            NetworkConnections::Undirected { incident } => incident.insert(edge),
        }
    }

    pub fn add_out_edge(&mut self, edge: E) -> bool {
        match self {
            NetworkConnections::Directed { out_edges, .. } => out_edges.insert(edge),
            NetworkConnections::Undirected { incident } => incident.insert(edge),
        }
    }

    pub fn remove_in_edge(&mut self, edge: &E) -> bool {
        match self {
            NetworkConnections::Directed { in_edges, .. } => in_edges.remove(edge),
            NetworkConnections::Undirected { incident } => incident.remove(edge),
        }
    }

    pub fn remove_out_edge(&mut self, edge: &E) -> bool {
        match self {
            NetworkConnections::Directed { out_edges, .. } => out_edges.remove(edge),
            NetworkConnections::Undirected { incident } => incident.remove(edge),
        }
    }
}
