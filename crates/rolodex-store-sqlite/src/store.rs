//! [`SqliteStore`] — the SQLite implementation of [`BookStore`].

use std::path::Path;

use rolodex_core::{AddressBook, store::BookStore};

use crate::{
  Error, Result,
  encode::{RawContact, RawNote, decode_book, encode_book},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book persisted in a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening address book");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
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
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for SqliteStore {
  type Error = Error;

  async fn load(&self) -> Result<AddressBook> {
    let (contacts, notes): (Vec<RawContact>, Vec<RawNote>) = self
      .conn
      .call(|conn| {
        let contacts = conn
          .prepare("SELECT name, birthday, email, address, phones FROM contacts ORDER BY name")?
          .query_map([], |row| {
            Ok(RawContact {
              name:     row.get(0)?,
              birthday: row.get(1)?,
              email:    row.get(2)?,
              address:  row.get(3)?,
              phones:   row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let notes = conn
          .prepare(
            "SELECT contact, position, title, text, tag FROM notes
             ORDER BY contact, position",
          )?
          .query_map([], |row| {
            Ok(RawNote {
              contact:  row.get(0)?,
              position: row.get(1)?,
              title:    row.get(2)?,
              text:     row.get(3)?,
              tag:      row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((contacts, notes))
      })
      .await?;

    let book = decode_book(contacts, notes)?;
    tracing::info!(contacts = book.len(), "address book loaded");
    Ok(book)
  }

  async fn save(&self, book: &AddressBook) -> Result<()> {
    let (contacts, notes) = encode_book(book)?;
    let count = contacts.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM notes", [])?;
        tx.execute("DELETE FROM contacts", [])?;
        {
          let mut insert = tx.prepare(
            "INSERT INTO contacts (name, birthday, email, address, phones)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for c in &contacts {
            insert.execute(rusqlite::params![c.name, c.birthday, c.email, c.address, c.phones])?;
          }

          let mut insert = tx.prepare(
            "INSERT INTO notes (contact, position, title, text, tag)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for n in &notes {
            insert.execute(rusqlite::params![n.contact, n.position, n.title, n.text, n.tag])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(contacts = count, "address book saved");
    Ok(())
  }
}
