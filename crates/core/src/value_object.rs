//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute values:
/// two `Pricing` values with the same amounts are the same price, while two
/// products with the same name are still different products. To "modify" a
/// value object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
