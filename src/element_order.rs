/// The order in which the elements of a node or edge collection are
/// enumerated.
///
/// This is only a hint about iteration order; it never changes which elements
/// are present or how they compare.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementOrder {
    /// No guaranteed order; may change between calls that mutate the
    /// collection.
    Unordered,
    /// The order in which elements were first inserted.  Re-inserting an
    /// element that is already present does not move it.
    #[default]
    Insertion,
    /// Ascending order according to the element type's `Ord` implementation.
    Sorted,
}
