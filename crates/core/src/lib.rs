//! `pantryplan-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or transport
//! concerns): the error taxonomy, typed identifiers, and the entity/value
//! object marker traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ErrorCode};
pub use id::{ItemId, ListId};
pub use value_object::ValueObject;
