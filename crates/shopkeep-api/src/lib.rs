//! JSON REST API for shopkeep.
//!
//! Exposes an axum [`Router`] backed by any [`shopkeep_core::store::InventoryStore`].
//! Every route maps to exactly one store operation; there is no
//! authentication and no middleware. Transport concerns such as request
//! tracing are layered on by the caller.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = shopkeep_api::api_router(Arc::new(store));
//! ```

pub mod accounts;
pub mod error;
pub mod extract;
pub mod items;
pub mod purchases;
pub mod settings;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use shopkeep_core::store::InventoryStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: InventoryStore + Send + Sync + 'static,
{
  Router::new()
    // Accounts
    .route("/accounts/create", post(accounts::create::<S>))
    .route("/accounts/all", get(accounts::list::<S>))
    .route(
      "/accounts/{id}",
      get(accounts::get_one::<S>)
        .put(accounts::update::<S>)
        .delete(accounts::delete::<S>),
    )
    // Items
    .route("/items/add", post(items::create::<S>))
    .route("/items", get(items::list::<S>))
    .route(
      "/items/{id}",
      get(items::get_one::<S>)
        .put(items::update::<S>)
        .delete(items::delete::<S>),
    )
    // Purchases
    .route("/purchases/new", post(purchases::create::<S>))
    .route("/purchases", get(purchases::list::<S>))
    .route(
      "/purchases/{id}",
      get(purchases::get_one::<S>).delete(purchases::delete::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
