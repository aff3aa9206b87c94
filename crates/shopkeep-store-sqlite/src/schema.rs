//! SQL schema for the shopkeep SQLite store.
//!
//! Executed once at connection startup. There are no migrations: the
//! version is recorded in `PRAGMA user_version` and any schema change needs
//! manual intervention.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
-- References are declared for documentation only and never enforced.
PRAGMA foreign_keys = OFF;

CREATE TABLE IF NOT EXISTS account (
    id            INTEGER PRIMARY KEY,   -- rowid alias; assigned on insert
    fullname      TEXT    NOT NULL,
    contact_email TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS item (
    id              INTEGER PRIMARY KEY,
    item_name       TEXT    NOT NULL,
    unit_price      REAL    NOT NULL,
    available_stock INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS purchase (
    id          INTEGER PRIMARY KEY,
    qty         INTEGER NOT NULL,
    amount      REAL    NOT NULL,
    item_ref    INTEGER REFERENCES item(id),
    account_ref INTEGER REFERENCES account(id)
);

PRAGMA user_version = 1;
";
