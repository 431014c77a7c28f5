//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout so later migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per record; the name is the book key.
CREATE TABLE IF NOT EXISTS contacts (
    name      TEXT PRIMARY KEY,
    birthday  TEXT,               -- DD.MM.YYYY as entered
    email     TEXT,
    address   TEXT,
    phones    TEXT NOT NULL DEFAULT '[]'   -- JSON array of strings, in order
);

CREATE TABLE IF NOT EXISTS notes (
    contact   TEXT    NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
    position  INTEGER NOT NULL,   -- order within the record
    title     TEXT    NOT NULL,
    text      TEXT    NOT NULL,
    tag       TEXT    NOT NULL,
    PRIMARY KEY (contact, position)
);

PRAGMA user_version = 1;
";
