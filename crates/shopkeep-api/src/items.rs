//! Handlers for `/items` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `POST`   | `/items/add`  | Body: [`NewItem`]; returns 201 + stored item |
//! | `GET`    | `/items`      | Every item |
//! | `GET`    | `/items/{id}` | 404 if not found |
//! | `PUT`    | `/items/{id}` | Body: [`NewItem`]; overwrites every non-key field |
//! | `DELETE` | `/items/{id}` | Returns `{"status": "Item deleted"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use shopkeep_core::{
  EntityKind,
  entity::{Deleted, Item, NewItem},
  store::InventoryStore,
};

use crate::{error::ApiError, extract::Payload};

/// `POST /items/add`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<NewItem>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InventoryStore,
{
  let item = store
    .create_item(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Item>>, ApiError>
where
  S: InventoryStore,
{
  let items = store
    .list_items()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(items))
}

/// `GET /items/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError>
where
  S: InventoryStore,
{
  let item = store
    .get_item(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(EntityKind::Item))?;
  Ok(Json(item))
}

/// `PUT /items/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Payload(body): Payload<NewItem>,
) -> Result<Json<Item>, ApiError>
where
  S: InventoryStore,
{
  let item = store
    .update_item(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(EntityKind::Item))?;
  Ok(Json(item))
}

/// `DELETE /items/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Deleted>, ApiError>
where
  S: InventoryStore,
{
  let removed = store
    .delete_item(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound(EntityKind::Item));
  }
  Ok(Json(Deleted::of(EntityKind::Item)))
}
