//! `pantryplan-infra` — storage backends for the planning domain.
//!
//! The repository port lives here next to its implementations; an
//! alternative backend (e.g. remote) plugs in by implementing the same
//! trait and translating its failures into the same error taxonomy.

pub mod repository;

pub use repository::{InMemoryShoppingListRepository, ShoppingListRepository};
