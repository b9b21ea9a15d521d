//! `pantryplan-app` — application layer for shopping planning.
//!
//! Thin orchestrators over the repository port: normalize free-text input,
//! apply fail-fast validation that needs no store access, delegate, and
//! return the repository's result verbatim.

pub mod dto;
pub mod usecases;

pub use usecases::PlanningUseCases;
