//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is immutable and compared purely by its attribute values:
/// two ticket requests for 2 ADULT tickets are the same request wherever they
/// came from. "Modifying" one means constructing a new one. Because instances
/// are validated at construction and carry no identity, an instance that
/// exists is always valid in isolation and safe to copy around freely.
///
/// The supertraits are the minimum a value needs to behave like one: cheap
/// duplication (`Clone`), structural comparison (`PartialEq`), and a useful
/// rendering in test failures and logs (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
