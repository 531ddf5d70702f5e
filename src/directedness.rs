/// Whether the edges of a graph have a direction.
///
/// This is runtime configuration chosen by a builder; every structure in this
/// crate stores its `Directedness` and consults it on each operation that
/// depends on edge orientation.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    /// An edge from `u` to `v` is distinct from an edge from `v` to `u`.
    #[default]
    Directed,
    /// `(u, v)` and `(v, u)` denote the same edge.
    Undirected,
}

impl Directedness {
    pub fn is_directed(&self) -> bool {
        matches!(self, Directedness::Directed)
    }

    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}
