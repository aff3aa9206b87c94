//! [`SqliteStore`] — the SQLite implementation of [`InventoryStore`].

use std::path::Path;

use rusqlite::{Connection, OptionalExtension as _, Row, Transaction};
use shopkeep_core::{
  EntityKind,
  entity::{Account, Item, NewAccount, NewItem, NewPurchase, Purchase},
  store::InventoryStore,
};

use crate::{
  Result,
  row::{self, ACCOUNT_COLUMNS, ITEM_COLUMNS, PURCHASE_COLUMNS},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A shopkeep store backed by a single SQLite file.
///
/// Cloning shares the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and ensure the tables exist.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened sqlite store");
    Ok(store)
  }

  /// Open a private in-memory store, used by the test suites.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `f` inside a transaction on the connection thread.
  ///
  /// Commits when `f` returns `Ok`. On any error, from `f` or from the
  /// commit itself, the transaction is dropped and therefore rolled back.
  pub async fn with_transaction<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&Transaction<'_>) -> rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let out = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
      })
      .await?;
    Ok(out)
  }
}

// ─── Generic row helpers ─────────────────────────────────────────────────────

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

fn select_by_id<T>(
  conn:    &Connection,
  kind:    EntityKind,
  columns: &str,
  id:      i64,
  map:     RowMapper<T>,
) -> rusqlite::Result<Option<T>> {
  let sql = format!("SELECT {columns} FROM {} WHERE id = ?1", kind.name());
  conn.query_row(&sql, rusqlite::params![id], map).optional()
}

fn select_all<T>(
  conn:    &Connection,
  kind:    EntityKind,
  columns: &str,
  map:     RowMapper<T>,
) -> rusqlite::Result<Vec<T>> {
  let sql = format!("SELECT {columns} FROM {} ORDER BY id", kind.name());
  let mut stmt = conn.prepare(&sql)?;
  let rows = stmt.query_map([], map)?.collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

/// Re-read a row that was just written in the same transaction.
fn refresh<T>(
  conn:    &Connection,
  kind:    EntityKind,
  columns: &str,
  id:      i64,
  map:     RowMapper<T>,
) -> rusqlite::Result<T> {
  select_by_id(conn, kind, columns, id, map)?
    .ok_or(rusqlite::Error::QueryReturnedNoRows)
}

fn delete_by_id(
  conn: &Connection,
  kind: EntityKind,
  id:   i64,
) -> rusqlite::Result<bool> {
  let sql = format!("DELETE FROM {} WHERE id = ?1", kind.name());
  let removed = conn.execute(&sql, rusqlite::params![id])?;
  Ok(removed > 0)
}

// ─── InventoryStore impl ─────────────────────────────────────────────────────

impl InventoryStore for SqliteStore {
  type Error = crate::Error;

  // ── Accounts ──────────────────────────────────────────────────────────────

  async fn create_account(&self, input: NewAccount) -> Result<Account> {
    self
      .with_transaction(move |tx| {
        tx.execute(
          "INSERT INTO account (id, fullname, contact_email) VALUES (?1, ?2, ?3)",
          rusqlite::params![input.id, input.fullname, input.contact_email],
        )?;
        let id = tx.last_insert_rowid();
        refresh(tx, EntityKind::Account, ACCOUNT_COLUMNS, id, row::account)
      })
      .await
  }

  async fn list_accounts(&self) -> Result<Vec<Account>> {
    self
      .with_transaction(|tx| {
        select_all(tx, EntityKind::Account, ACCOUNT_COLUMNS, row::account)
      })
      .await
  }

  async fn get_account(&self, id: i64) -> Result<Option<Account>> {
    self
      .with_transaction(move |tx| {
        select_by_id(tx, EntityKind::Account, ACCOUNT_COLUMNS, id, row::account)
      })
      .await
  }

  async fn update_account(
    &self,
    id:    i64,
    input: NewAccount,
  ) -> Result<Option<Account>> {
    self
      .with_transaction(move |tx| {
        let changed = tx.execute(
          "UPDATE account SET fullname = ?2, contact_email = ?3 WHERE id = ?1",
          rusqlite::params![id, input.fullname, input.contact_email],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        refresh(tx, EntityKind::Account, ACCOUNT_COLUMNS, id, row::account)
          .map(Some)
      })
      .await
  }

  async fn delete_account(&self, id: i64) -> Result<bool> {
    self
      .with_transaction(move |tx| delete_by_id(tx, EntityKind::Account, id))
      .await
  }

  // ── Items ─────────────────────────────────────────────────────────────────

  async fn create_item(&self, input: NewItem) -> Result<Item> {
    self
      .with_transaction(move |tx| {
        tx.execute(
          "INSERT INTO item (id, item_name, unit_price, available_stock)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            input.id,
            input.item_name,
            input.unit_price,
            input.available_stock,
          ],
        )?;
        let id = tx.last_insert_rowid();
        refresh(tx, EntityKind::Item, ITEM_COLUMNS, id, row::item)
      })
      .await
  }

  async fn list_items(&self) -> Result<Vec<Item>> {
    self
      .with_transaction(|tx| {
        select_all(tx, EntityKind::Item, ITEM_COLUMNS, row::item)
      })
      .await
  }

  async fn get_item(&self, id: i64) -> Result<Option<Item>> {
    self
      .with_transaction(move |tx| {
        select_by_id(tx, EntityKind::Item, ITEM_COLUMNS, id, row::item)
      })
      .await
  }

  async fn update_item(&self, id: i64, input: NewItem) -> Result<Option<Item>> {
    self
      .with_transaction(move |tx| {
        let changed = tx.execute(
          "UPDATE item
           SET item_name = ?2, unit_price = ?3, available_stock = ?4
           WHERE id = ?1",
          rusqlite::params![
            id,
            input.item_name,
            input.unit_price,
            input.available_stock,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        refresh(tx, EntityKind::Item, ITEM_COLUMNS, id, row::item).map(Some)
      })
      .await
  }

  async fn delete_item(&self, id: i64) -> Result<bool> {
    self
      .with_transaction(move |tx| delete_by_id(tx, EntityKind::Item, id))
      .await
  }

  // ── Purchases ─────────────────────────────────────────────────────────────

  async fn create_purchase(&self, input: NewPurchase) -> Result<Purchase> {
    self
      .with_transaction(move |tx| {
        tx.execute(
          "INSERT INTO purchase (id, qty, amount, item_ref, account_ref)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            input.id,
            input.qty,
            input.amount,
            input.item_ref,
            input.account_ref,
          ],
        )?;
        let id = tx.last_insert_rowid();
        refresh(tx, EntityKind::Purchase, PURCHASE_COLUMNS, id, row::purchase)
      })
      .await
  }

  async fn list_purchases(&self) -> Result<Vec<Purchase>> {
    self
      .with_transaction(|tx| {
        select_all(tx, EntityKind::Purchase, PURCHASE_COLUMNS, row::purchase)
      })
      .await
  }

  async fn get_purchase(&self, id: i64) -> Result<Option<Purchase>> {
    self
      .with_transaction(move |tx| {
        select_by_id(tx, EntityKind::Purchase, PURCHASE_COLUMNS, id, row::purchase)
      })
      .await
  }

  async fn delete_purchase(&self, id: i64) -> Result<bool> {
    self
      .with_transaction(move |tx| delete_by_id(tx, EntityKind::Purchase, id))
      .await
  }
}
