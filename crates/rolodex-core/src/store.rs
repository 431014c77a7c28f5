//! The `BookStore` trait — persistence of a whole [`AddressBook`].
//!
//! Implemented by storage backends (e.g. `rolodex-store-sqlite`). The CLI
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::book::AddressBook;

/// Loads and saves complete address-book snapshots.
///
/// The on-disk encoding is the backend's business; it only has to round-trip
/// every record, phone and note.
pub trait BookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the persisted book; an empty book if nothing was saved yet.
  fn load(&self) -> impl Future<Output = Result<AddressBook, Self::Error>> + Send + '_;

  /// Replace the persisted state with `book`.
  fn save<'a>(
    &'a self,
    book: &'a AddressBook,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
