//! Row mappers between SQLite result rows and entity records.
//!
//! Each `*_COLUMNS` list fixes the column order its mapper reads by index.

use rusqlite::Row;
use shopkeep_core::entity::{Account, Item, Purchase};

pub const ACCOUNT_COLUMNS: &str = "id, fullname, contact_email";

pub fn account(row: &Row<'_>) -> rusqlite::Result<Account> {
  Ok(Account {
    id:            row.get(0)?,
    fullname:      row.get(1)?,
    contact_email: row.get(2)?,
  })
}

pub const ITEM_COLUMNS: &str = "id, item_name, unit_price, available_stock";

pub fn item(row: &Row<'_>) -> rusqlite::Result<Item> {
  Ok(Item {
    id:              row.get(0)?,
    item_name:       row.get(1)?,
    unit_price:      row.get(2)?,
    available_stock: row.get(3)?,
  })
}

pub const PURCHASE_COLUMNS: &str = "id, qty, amount, item_ref, account_ref";

pub fn purchase(row: &Row<'_>) -> rusqlite::Result<Purchase> {
  Ok(Purchase {
    id:          row.get(0)?,
    qty:         row.get(1)?,
    amount:      row.get(2)?,
    item_ref:    row.get(3)?,
    account_ref: row.get(4)?,
  })
}
