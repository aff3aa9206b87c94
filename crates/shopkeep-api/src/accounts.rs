//! Handlers for `/accounts` endpoints.
//!
//! | Method   | Path               | Notes |
//! |----------|--------------------|-------|
//! | `POST`   | `/accounts/create` | Body: [`NewAccount`]; returns 201 + stored account |
//! | `GET`    | `/accounts/all`    | Every account |
//! | `GET`    | `/accounts/{id}`   | 404 if not found |
//! | `PUT`    | `/accounts/{id}`   | Body: [`NewAccount`]; overwrites `fullname`, `contact_email` |
//! | `DELETE` | `/accounts/{id}`   | Returns `{"status": ...}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use shopkeep_core::{
  EntityKind,
  entity::{Account, Deleted, NewAccount},
  store::InventoryStore,
};

use crate::{error::ApiError, extract::Payload};

/// `POST /accounts/create`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<NewAccount>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InventoryStore,
{
  let account = store
    .create_account(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(account)))
}

/// `GET /accounts/all`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Account>>, ApiError>
where
  S: InventoryStore,
{
  let accounts = store
    .list_accounts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(accounts))
}

/// `GET /accounts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Account>, ApiError>
where
  S: InventoryStore,
{
  let account = store
    .get_account(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(EntityKind::Account))?;
  Ok(Json(account))
}

/// `PUT /accounts/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Payload(body): Payload<NewAccount>,
) -> Result<Json<Account>, ApiError>
where
  S: InventoryStore,
{
  let account = store
    .update_account(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound(EntityKind::Account))?;
  Ok(Json(account))
}

/// `DELETE /accounts/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Deleted>, ApiError>
where
  S: InventoryStore,
{
  let removed = store
    .delete_account(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound(EntityKind::Account));
  }
  Ok(Json(Deleted::of(EntityKind::Account)))
}
