/// Enum representing the edge multiplicity of a network: whether two or more
/// distinct edges may connect the same pair of nodes.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeMultiplicity {
    /// At most one edge connects any pair of nodes.
    #[default]
    SingleEdge,
    /// Parallel edges are allowed.
    MultipleEdges,
}

impl EdgeMultiplicity {
    pub fn allows_parallel_edges(&self) -> bool {
        match self {
            EdgeMultiplicity::SingleEdge => false,
            EdgeMultiplicity::MultipleEdges => true,
        }
    }

    pub fn from_allows_parallel_edges(allowed: bool) -> Self {
        if allowed {
            EdgeMultiplicity::MultipleEdges
        } else {
            EdgeMultiplicity::SingleEdge
        }
    }
}
