//! Mapping untyped request documents onto entity payloads.
//!
//! Handlers never deserialise straight into a payload type. The body is first
//! read as a [`serde_json::Value`] and then passed through [`parse`], which is
//! the single place a shape mismatch becomes a [`ValidationError`].

use serde::de::DeserializeOwned;

use crate::{
  entity::{EntityKind, NewAccount, NewItem, NewPurchase},
  error::ValidationError,
};

/// A payload type bound to the entity it describes.
pub trait Schema: DeserializeOwned {
  const KIND: EntityKind;
}

impl Schema for NewAccount {
  const KIND: EntityKind = EntityKind::Account;
}

impl Schema for NewItem {
  const KIND: EntityKind = EntityKind::Item;
}

impl Schema for NewPurchase {
  const KIND: EntityKind = EntityKind::Purchase;
}

/// Coerce `doc` into the payload `T`, rejecting missing, unknown and
/// mistyped fields.
pub fn parse<T: Schema>(doc: serde_json::Value) -> Result<T, ValidationError> {
  if !doc.is_object() {
    return Err(ValidationError {
      entity:  T::KIND,
      message: format!("expected a JSON object, found {}", json_type(&doc)),
    });
  }
  serde_json::from_value(doc).map_err(|e| ValidationError {
    entity:  T::KIND,
    message: e.to_string(),
  })
}

fn json_type(v: &serde_json::Value) -> &'static str {
  match v {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "a boolean",
    serde_json::Value::Number(_) => "a number",
    serde_json::Value::String(_) => "a string",
    serde_json::Value::Array(_) => "an array",
    serde_json::Value::Object(_) => "an object",
  }
}
