//! Conversion between [`AddressBook`] and the plain column values stored in
//! SQLite.
//!
//! Phones are stored as a compact JSON array in their record order. Every
//! value read back goes through the same validators as user input, so a
//! hand-edited database cannot smuggle in an invalid field.

use rolodex_core::{
  AddressBook, Note, Record,
  field::{Field, Phone},
};

use crate::Result;

// ─── Rows ────────────────────────────────────────────────────────────────────

/// Raw values read from or written to a `contacts` row.
#[derive(Debug, Clone)]
pub struct RawContact {
  pub name:     String,
  pub birthday: Option<String>,
  pub email:    Option<String>,
  pub address:  Option<String>,
  pub phones:   String,
}

/// Raw values read from or written to a `notes` row.
#[derive(Debug, Clone)]
pub struct RawNote {
  pub contact:  String,
  pub position: i64,
  pub title:    String,
  pub text:     String,
  pub tag:      String,
}

// ─── Encode ──────────────────────────────────────────────────────────────────

pub fn encode_phones(phones: &[Phone]) -> Result<String> {
  let values: Vec<&str> = phones.iter().map(Phone::value).collect();
  Ok(serde_json::to_string(&values)?)
}

pub fn decode_phones(s: &str) -> Result<Vec<String>> { Ok(serde_json::from_str(s)?) }

/// Flatten the book into contact rows and note rows.
pub fn encode_book(book: &AddressBook) -> Result<(Vec<RawContact>, Vec<RawNote>)> {
  let mut contacts = Vec::with_capacity(book.len());
  let mut notes = Vec::new();

  for record in book.iter() {
    let name = record.name().value().to_owned();
    contacts.push(RawContact {
      name:     name.clone(),
      birthday: record.birthday().map(|b| b.value().to_owned()),
      email:    record.email().map(|e| e.value().to_owned()),
      address:  record.address().map(|a| a.value().to_owned()),
      phones:   encode_phones(record.phones())?,
    });
    for (position, note) in (0_i64..).zip(record.notes()) {
      notes.push(RawNote {
        contact: name.clone(),
        position,
        title: note.title.clone(),
        text: note.text.clone(),
        tag: note.tag.clone(),
      });
    }
  }

  Ok((contacts, notes))
}

// ─── Decode ──────────────────────────────────────────────────────────────────

impl RawContact {
  /// Rebuild a record without its notes.
  pub fn into_record(self) -> Result<Record> {
    let mut record = Record::named(&self.name)?;
    for phone in decode_phones(&self.phones)? {
      record.add_phone(&phone)?;
    }
    if let Some(birthday) = self.birthday {
      record.set_birthday(&birthday)?;
    }
    if let Some(email) = self.email {
      record.set_email(&email)?;
    }
    if let Some(address) = self.address {
      record.set_address(&address)?;
    }
    Ok(record)
  }
}

/// Reassemble a book from rows. `notes` must be ordered by `position` within
/// each contact; notes for unknown contacts are dropped.
pub fn decode_book(contacts: Vec<RawContact>, notes: Vec<RawNote>) -> Result<AddressBook> {
  let mut book = AddressBook::new();
  for raw in contacts {
    book.add(raw.into_record()?)?;
  }
  for raw in notes {
    match book.find_mut(&raw.contact) {
      Some(record) => record.add_note(Note::new(raw.title, raw.text, raw.tag)),
      None => tracing::warn!(contact = %raw.contact, "dropping note for unknown contact"),
    }
  }
  Ok(book)
}
