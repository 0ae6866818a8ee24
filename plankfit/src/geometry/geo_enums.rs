#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// A ∩ B = ∅
    Disjoint,
}
