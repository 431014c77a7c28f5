//! Core types for the Rolodex contact manager.
//!
//! Validated fields, records and the address book, the command suggester and
//! the line dispatcher all live here. Storage backends implement
//! [`store::BookStore`]; the terminal front-end implements
//! [`dispatch::Prompt`]. Neither is a dependency of this crate.

// Native `async fn` in traits; the dispatcher is generic over the prompt, so
// no `Send` bound is needed on its futures.
#![allow(async_fn_in_trait)]

pub mod book;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod note;
pub mod record;
pub mod store;
pub mod suggest;

pub use book::AddressBook;
pub use error::{Error, Result};
pub use note::Note;
pub use record::Record;
