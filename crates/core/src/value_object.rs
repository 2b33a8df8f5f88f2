//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity. Two value objects with the same attribute
//! values are interchangeable, e.g. two `Money` amounts of `12.50`.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one,
/// construct a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
