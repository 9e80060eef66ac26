//! Entity trait: identity + continuity across state changes.

/// Something with an identity that outlives changes to its other fields.
///
/// An inventory item is identified by its name: selling units or changing its
/// price leaves `id()` untouched, while renaming it makes it a different key
/// in the inventory. Collections store entities under `id()`, so renaming has
/// to move the entry in the same step that changes the name.
pub trait Entity {
    /// Identifier type (`String` for items).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
