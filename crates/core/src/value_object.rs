//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects compared by their attribute
/// values; identity doesn't matter. To "modify" one, build a new value with
/// the new fields (the inventory store's partial update works exactly this
/// way: merge into a fresh value, validate it, then swap it in).
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (compared by value) and `Debug` (loggable/testable).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
