//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. They are defined
//! entirely by their attribute values, so two with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a price of 2.50 is a price of 2.50)
/// - **Entity**: has identity (an item named "Widget" stays that item while its
///   quantity changes)
///
/// Value objects are immutable: to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(2.5), Price(2.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
