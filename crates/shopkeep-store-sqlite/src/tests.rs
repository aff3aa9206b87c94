//! Integration tests for `SqliteStore` against in-memory and on-disk databases.

use shopkeep_core::{
  entity::{NewAccount, NewItem, NewPurchase},
  store::InventoryStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn ada() -> NewAccount {
  NewAccount {
    id:            None,
    fullname:      "Ada Lovelace".into(),
    contact_email: "ada@example.com".into(),
  }
}

fn widget() -> NewItem {
  NewItem {
    id:              None,
    item_name:       "Widget".into(),
    unit_price:      9.99,
    available_stock: 100,
  }
}

fn purchase(item_ref: Option<i64>, account_ref: Option<i64>) -> NewPurchase {
  NewPurchase { id: None, qty: 3, amount: 29.97, item_ref, account_ref }
}

// ─── Accounts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_account() {
  let s = store().await;

  let created = s.create_account(ada()).await.unwrap();
  assert_eq!(created.fullname, "Ada Lovelace");
  assert_eq!(created.contact_email, "ada@example.com");

  let fetched = s.get_account(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create_account(ada()).await.unwrap();
  let b = s.create_account(ada()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_honours_caller_supplied_id() {
  let s = store().await;
  let mut input = ada();
  input.id = Some(42);

  let created = s.create_account(input.clone()).await.unwrap();
  assert_eq!(created.id, 42);

  // A second insert with the same key violates the primary key.
  assert!(s.create_account(input).await.is_err());
  assert_eq!(s.list_accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_account_missing_returns_none() {
  let s = store().await;
  assert!(s.get_account(1).await.unwrap().is_none());
}

#[tokio::test]
async fn update_account_overwrites_fields() {
  let s = store().await;
  let created = s.create_account(ada()).await.unwrap();

  let updated = s
    .update_account(created.id, NewAccount {
      id:            Some(999),
      fullname:      "Augusta Ada King".into(),
      contact_email: "countess@example.com".into(),
    })
    .await
    .unwrap()
    .unwrap();

  // The key in the body is ignored.
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.fullname, "Augusta Ada King");
  assert_eq!(updated.contact_email, "countess@example.com");
  assert_eq!(s.get_account(created.id).await.unwrap(), Some(updated));
  assert!(s.get_account(999).await.unwrap().is_none());
}

#[tokio::test]
async fn update_account_missing_returns_none_and_writes_nothing() {
  let s = store().await;
  assert!(s.update_account(7, ada()).await.unwrap().is_none());
  assert!(s.list_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_account_twice() {
  let s = store().await;
  let created = s.create_account(ada()).await.unwrap();

  assert!(s.delete_account(created.id).await.unwrap());
  assert!(s.get_account(created.id).await.unwrap().is_none());
  assert!(!s.delete_account(created.id).await.unwrap());
}

// ─── Items ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_item() {
  let s = store().await;

  let created = s.create_item(widget()).await.unwrap();
  assert_eq!(created.item_name, "Widget");
  assert_eq!(created.unit_price, 9.99);
  assert_eq!(created.available_stock, 100);

  assert_eq!(s.get_item(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn update_item_overwrites_fields() {
  let s = store().await;
  let created = s.create_item(widget()).await.unwrap();

  let updated = s
    .update_item(created.id, NewItem {
      id:              None,
      item_name:       "Gadget".into(),
      unit_price:      12.5,
      available_stock: 0,
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.item_name, "Gadget");
  assert_eq!(updated.unit_price, 12.5);
  assert_eq!(updated.available_stock, 0);
}

#[tokio::test]
async fn update_item_missing_returns_none() {
  let s = store().await;
  assert!(s.update_item(1, widget()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_items_returns_every_row_once() {
  let s = store().await;
  let mut ids = Vec::new();
  for n in 0..5 {
    let mut input = widget();
    input.item_name = format!("Widget {n}");
    ids.push(s.create_item(input).await.unwrap().id);
  }

  let mut listed: Vec<i64> =
    s.list_items().await.unwrap().into_iter().map(|i| i.id).collect();
  listed.sort_unstable();
  ids.sort_unstable();
  assert_eq!(listed, ids);
}

#[tokio::test]
async fn delete_item_leaves_other_rows() {
  let s = store().await;
  let a = s.create_item(widget()).await.unwrap();
  let b = s.create_item(widget()).await.unwrap();

  assert!(s.delete_item(a.id).await.unwrap());
  let remaining = s.list_items().await.unwrap();
  assert_eq!(remaining, vec![b]);
}

// ─── Purchases ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_purchase_with_references() {
  let s = store().await;
  let account = s.create_account(ada()).await.unwrap();
  let item = s.create_item(widget()).await.unwrap();

  let created = s
    .create_purchase(purchase(Some(item.id), Some(account.id)))
    .await
    .unwrap();
  assert_eq!(created.qty, 3);
  assert_eq!(created.amount, 29.97);
  assert_eq!(created.item_ref, Some(item.id));
  assert_eq!(created.account_ref, Some(account.id));

  assert_eq!(s.get_purchase(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn purchase_with_dangling_reference_is_accepted() {
  let s = store().await;
  let created = s.create_purchase(purchase(Some(404), Some(405))).await.unwrap();

  let fetched = s.get_purchase(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.item_ref, Some(404));
  assert_eq!(fetched.account_ref, Some(405));
}

#[tokio::test]
async fn purchase_without_references() {
  let s = store().await;
  let created = s.create_purchase(purchase(None, None)).await.unwrap();
  assert_eq!(created.item_ref, None);
  assert_eq!(created.account_ref, None);
}

#[tokio::test]
async fn deleting_item_does_not_cascade_to_purchases() {
  let s = store().await;
  let item = s.create_item(widget()).await.unwrap();
  let p = s.create_purchase(purchase(Some(item.id), None)).await.unwrap();

  assert!(s.delete_item(item.id).await.unwrap());

  let kept = s.get_purchase(p.id).await.unwrap().unwrap();
  assert_eq!(kept.item_ref, Some(item.id));
}

#[tokio::test]
async fn delete_purchase() {
  let s = store().await;
  let p = s.create_purchase(purchase(None, None)).await.unwrap();

  assert!(s.delete_purchase(p.id).await.unwrap());
  assert!(s.get_purchase(p.id).await.unwrap().is_none());
  assert!(s.list_purchases().await.unwrap().is_empty());
  assert!(!s.delete_purchase(p.id).await.unwrap());
}

// ─── Storage handle ──────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_transaction_rolls_back() {
  let s = store().await;

  let result = s
    .with_transaction(|tx| {
      tx.execute(
        "INSERT INTO account (fullname, contact_email) VALUES ('a', 'b')",
        [],
      )?;
      // Second statement fails; the first must not survive.
      tx.execute("INSERT INTO no_such_table VALUES (1)", [])?;
      Ok(())
    })
    .await;

  assert!(result.is_err());
  assert!(s.list_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn data_survives_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("backend_activity.db");

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create_item(widget()).await.unwrap().id
  };

  // Reopening re-runs the schema, which must not touch existing rows.
  let s = SqliteStore::open(&path).await.unwrap();
  let item = s.get_item(id).await.unwrap().unwrap();
  assert_eq!(item.item_name, "Widget");
}
