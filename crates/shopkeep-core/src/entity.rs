//! Entity schemas: the three persisted record types and their payloads.
//!
//! Stored records always carry their primary key. Payloads (`New*`) are what
//! callers send: every non-key field is required, the key is optional.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Which of the three record types an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  Account,
  Item,
  Purchase,
}

impl EntityKind {
  /// Lowercase name; doubles as the SQL table name.
  pub fn name(self) -> &'static str {
    match self {
      Self::Account => "account",
      Self::Item => "item",
      Self::Purchase => "purchase",
    }
  }

  /// The fixed message returned to clients when a lookup by id misses.
  pub fn not_found_message(self) -> &'static str {
    match self {
      Self::Account => "Account does not exist.",
      Self::Item => "Item not found.",
      Self::Purchase => "Purchase not found.",
    }
  }

  /// The fixed status string returned after a successful delete.
  pub fn deleted_message(self) -> &'static str {
    match self {
      Self::Account => "Account removed successfully",
      Self::Item => "Item deleted",
      Self::Purchase => "Purchase removed",
    }
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─── Account ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
  pub id:            i64,
  pub fullname:      String,
  pub contact_email: String,
}

/// Body of `POST /accounts/create` and `PUT /accounts/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAccount {
  #[serde(default)]
  pub id:            Option<i64>,
  pub fullname:      String,
  pub contact_email: String,
}

// ─── Item ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id:              i64,
  pub item_name:       String,
  pub unit_price:      f64,
  pub available_stock: i64,
}

/// Body of `POST /items/add` and `PUT /items/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewItem {
  #[serde(default)]
  pub id:              Option<i64>,
  pub item_name:       String,
  pub unit_price:      f64,
  pub available_stock: i64,
}

// ─── Purchase ────────────────────────────────────────────────────────────────

/// A purchase of some quantity of an item by an account.
///
/// Both references are optional and never checked against their target
/// tables; they may dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
  pub id:          i64,
  pub qty:         i64,
  pub amount:      f64,
  pub item_ref:    Option<i64>,
  pub account_ref: Option<i64>,
}

/// Body of `POST /purchases/new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPurchase {
  #[serde(default)]
  pub id:          Option<i64>,
  pub qty:         i64,
  pub amount:      f64,
  #[serde(default)]
  pub item_ref:    Option<i64>,
  #[serde(default)]
  pub account_ref: Option<i64>,
}

// ─── Deleted ─────────────────────────────────────────────────────────────────

/// Confirmation object returned by every delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
  pub status: String,
}

impl Deleted {
  pub fn of(kind: EntityKind) -> Self {
    Self { status: kind.deleted_message().to_owned() }
  }
}
