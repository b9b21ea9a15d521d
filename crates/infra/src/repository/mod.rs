//! Shopping-list repository boundary.
//!
//! Defines the storage contract the domain depends on, without making any
//! backend assumptions, plus the in-memory reference implementation.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryShoppingListRepository;
pub use r#trait::ShoppingListRepository;
