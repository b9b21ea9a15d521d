//! `pantryplan-planning` — shopping-planning domain model.
//!
//! Entities (`ShoppingList`, `ListItem`), the quantity guard, and the item
//! ordering specification. Storage backends live in `pantryplan-infra`.

pub mod list;
pub mod quantity;
pub mod sort;

pub use list::{ItemStatus, ListItem, ListItemPatch, NewListItem, ShoppingList};
pub use quantity::validate_quantity;
pub use sort::{SortDirection, SortField, Sorting};
