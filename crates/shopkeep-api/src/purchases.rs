//! Handlers for `/purchases` endpoints.
//!
//! | Method   | Path              | Notes |
//! |----------|-------------------|-------|
//! | `POST`   | `/purchases/new`  | Body: [`NewPurchase`]; references are not checked |
//! | `GET`    | `/purchases`      | Every purchase |
//! | `GET`    | `/purchases/{id}` | 404 if not found |
//! | `DELETE` | `/purchases/{id}` | Returns `{"status": "Purchase removed"}` |
//!
//! There is no update route for purchases.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use shopkeep_core::{
  EntityKind,
  entity::{Deleted, NewPurchase, Purchase},
  store::InventoryStore,
};

use crate::{error::ApiError, extract::Payload};

/// `POST /purchases/new`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<NewPurchase>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InventoryStore,
{
  let purchase = store
    .create_purchase(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(purchase)))
}

/// `GET /purchases`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Purchase>>, ApiError>
where
  S: InventoryStore,
{
  let purchases = store
    .list_purchases()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(purchases))
}

/// `GET /purchases/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Purchase>, ApiError>
where
  S: InventoryStore,
{
  let purchase = store
    .get_purchase(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(EntityKind::Purchase))?;
  Ok(Json(purchase))
}

/// `DELETE /purchases/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Deleted>, ApiError>
where
  S: InventoryStore,
{
  let removed = store
    .delete_purchase(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound(EntityKind::Purchase));
  }
  Ok(Json(Deleted::of(EntityKind::Purchase)))
}
