//! The [`Payload`] extractor for entity request bodies.

use axum::{
  Json,
  extract::{FromRequest, Request},
};
use shopkeep_core::{
  ValidationError,
  payload::{self, Schema},
};

use crate::error::ApiError;

/// A request body validated against the entity schema `T`.
///
/// The body is read as untyped JSON and then mapped with
/// [`payload::parse`], so malformed JSON and shape mismatches both surface
/// as [`ApiError::Validation`].
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
  S: Send + Sync,
  T: Schema + Send,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
    let Json(doc) = Json::<serde_json::Value>::from_request(req, state)
      .await
      .map_err(|rejection| ValidationError {
        entity:  T::KIND,
        message: rejection.body_text(),
      })?;
    Ok(Payload(payload::parse(doc)?))
  }
}
