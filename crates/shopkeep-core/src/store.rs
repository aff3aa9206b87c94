//! The `InventoryStore` trait, covering the repository operations for every entity.
//!
//! The trait is implemented by storage backends (e.g. `shopkeep-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::entity::{
  Account, Item, NewAccount, NewItem, NewPurchase, Purchase,
};

/// Abstraction over a shopkeep storage backend.
///
/// Lookups by primary key signal a miss with `None` (reads, updates) or
/// `false` (deletes); callers translate that into the entity's not-found
/// error. Updates overwrite every non-key field, last writer wins. Deletes
/// never cascade, so purchases may keep references to removed rows.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait InventoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Accounts ──────────────────────────────────────────────────────────

  /// Persist a new account and return it with its assigned id.
  fn create_account(
    &self,
    input: NewAccount,
  ) -> impl Future<Output = Result<Account, Self::Error>> + Send + '_;

  fn list_accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<Account>, Self::Error>> + Send + '_;

  fn get_account(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + '_;

  /// Overwrite `fullname` and `contact_email`. `input.id` is ignored.
  fn update_account(
    &self,
    id: i64,
    input: NewAccount,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + '_;

  fn delete_account(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Items ─────────────────────────────────────────────────────────────

  fn create_item(
    &self,
    input: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  fn list_items(
    &self,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  fn get_item(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Overwrite `item_name`, `unit_price` and `available_stock`.
  fn update_item(
    &self,
    id: i64,
    input: NewItem,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  fn delete_item(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Purchases ─────────────────────────────────────────────────────────
  // Purchases are never updated in place.

  /// Persist a purchase. `item_ref` and `account_ref` are stored as given,
  /// without checking that the referenced rows exist.
  fn create_purchase(
    &self,
    input: NewPurchase,
  ) -> impl Future<Output = Result<Purchase, Self::Error>> + Send + '_;

  fn list_purchases(
    &self,
  ) -> impl Future<Output = Result<Vec<Purchase>, Self::Error>> + Send + '_;

  fn get_purchase(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Purchase>, Self::Error>> + Send + '_;

  fn delete_purchase(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
