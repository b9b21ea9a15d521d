//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — identity does
/// not exist for them. To "modify" one, construct a new value. The bounds
/// keep them cheap to copy, comparable and debuggable:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Sorting { field: SortField, direction: SortDirection }
///
/// impl ValueObject for Sorting {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
