//! Core types and trait definitions for the shopkeep record service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entity;
pub mod error;
pub mod payload;
pub mod store;

pub use entity::EntityKind;
pub use error::ValidationError;
