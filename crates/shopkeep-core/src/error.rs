//! Error types for `shopkeep-core`.

use thiserror::Error;

use crate::entity::EntityKind;

/// A request payload that could not be mapped onto its entity schema.
///
/// Raised for wrong JSON types, missing required fields and unknown fields.
/// No business rule ever produces this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {entity} payload: {message}")]
pub struct ValidationError {
  pub entity:  EntityKind,
  pub message: String,
}
