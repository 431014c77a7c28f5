//! [`Record`] — everything known about one contact.

use std::fmt;

use crate::{
  Error, Result,
  field::{Address, Birthday, Email, Field, Name, Phone},
  note::Note,
};

/// One contact: a name, its phones, optional single-valued details, and notes.
///
/// The name is only changed through
/// [`AddressBook::rename`](crate::book::AddressBook::rename) so that it always
/// matches the record's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  name:     Name,
  phones:   Vec<Phone>,
  birthday: Option<Birthday>,
  email:    Option<Email>,
  address:  Option<Address>,
  notes:    Vec<Note>,
}

impl Record {
  pub fn new(name: Name) -> Self {
    Self {
      name,
      phones: Vec::new(),
      birthday: None,
      email: None,
      address: None,
      notes: Vec::new(),
    }
  }

  /// Validate `raw` as a [`Name`] and build an empty record.
  pub fn named(raw: &str) -> Result<Self> { Ok(Self::new(Name::parse(raw)?)) }

  pub fn name(&self) -> &Name { &self.name }

  pub(crate) fn set_name(&mut self, name: Name) { self.name = name; }

  pub fn phones(&self) -> &[Phone] { &self.phones }

  pub fn birthday(&self) -> Option<&Birthday> { self.birthday.as_ref() }

  pub fn email(&self) -> Option<&Email> { self.email.as_ref() }

  pub fn address(&self) -> Option<&Address> { self.address.as_ref() }

  pub fn notes(&self) -> &[Note] { &self.notes }

  // ── Phones ────────────────────────────────────────────────────────────────

  /// Validate and append. Duplicates are the caller's concern.
  pub fn add_phone(&mut self, raw: &str) -> Result<()> {
    self.phones.push(Phone::parse(raw)?);
    Ok(())
  }

  /// Remove every phone equal to `value`. Returns whether any was removed.
  pub fn remove_phone(&mut self, value: &str) -> bool {
    let before = self.phones.len();
    self.phones.retain(|p| p.value() != value);
    self.phones.len() != before
  }

  /// Replace every phone equal to `old` with `new`.
  ///
  /// `new` is validated first; nothing changes if it is invalid or if `old`
  /// is not present ([`Error::PhoneNotFound`]).
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
    let replacement = Phone::parse(new)?;
    let mut found = false;
    for phone in self.phones.iter_mut().filter(|p| p.value() == old) {
      *phone = replacement.clone();
      found = true;
    }
    if !found {
      return Err(Error::PhoneNotFound {
        name:  self.name.value().to_owned(),
        phone: old.to_owned(),
      });
    }
    Ok(())
  }

  pub fn find_phone(&self, value: &str) -> Option<&Phone> {
    self.phones.iter().find(|p| p.value() == value)
  }

  // ── Single-valued details ─────────────────────────────────────────────────

  pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
    self.birthday = Some(Birthday::parse(raw)?);
    Ok(())
  }

  /// Replace the email. The `-` sentinel clears it.
  pub fn set_email(&mut self, raw: &str) -> Result<()> {
    self.email = Email::parse_optional(raw)?;
    Ok(())
  }

  pub fn clear_email(&mut self) { self.email = None; }

  pub fn set_address(&mut self, raw: &str) -> Result<()> {
    self.address = Some(Address::parse(raw)?);
    Ok(())
  }

  pub fn clear_address(&mut self) { self.address = None; }

  // ── Notes ─────────────────────────────────────────────────────────────────

  /// Append unconditionally; title uniqueness is the caller's concern.
  pub fn add_note(&mut self, note: Note) { self.notes.push(note); }

  pub fn find_note(&self, title: &str) -> Option<&Note> {
    self.notes.iter().find(|n| n.title == title)
  }

  pub fn find_note_mut(&mut self, title: &str) -> Option<&mut Note> {
    self.notes.iter_mut().find(|n| n.title == title)
  }

  /// Remove the first note titled exactly `title`.
  pub fn remove_note(&mut self, title: &str) -> Option<Note> {
    let idx = self.notes.iter().position(|n| n.title == title)?;
    Some(self.notes.remove(idx))
  }

  /// Phones joined with `", "`, as shown in tables.
  pub fn phone_list(&self) -> String {
    self
      .phones
      .iter()
      .map(Phone::value)
      .collect::<Vec<_>>()
      .join(", ")
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Name: {}, Phones: {}", self.name, self.phone_list())?;
    if let Some(birthday) = &self.birthday {
      write!(f, ", Birthday: {birthday}")?;
    }
    if let Some(email) = &self.email {
      write!(f, ", Email: {email}")?;
    }
    if let Some(address) = &self.address {
      write!(f, ", Address: {address}")?;
    }
    if !self.notes.is_empty() {
      let notes = self
        .notes
        .iter()
        .map(Note::to_string)
        .collect::<Vec<_>>()
        .join(", ");
      write!(f, ", Notes: {notes}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn alice() -> Record { Record::named("Alice").unwrap() }

  #[test]
  fn add_and_find_phone() {
    let mut r = alice();
    r.add_phone("1112223333").unwrap();
    assert!(r.find_phone("1112223333").is_some());
    assert!(r.find_phone("9999999999").is_none());
    assert!(r.add_phone("12").is_err());
    assert_eq!(r.phones().len(), 1);
  }

  #[test]
  fn remove_phone_removes_all_copies_and_tolerates_absence() {
    let mut r = alice();
    r.add_phone("1112223333").unwrap();
    r.add_phone("1112223333").unwrap();
    r.add_phone("4445556666").unwrap();

    assert!(r.remove_phone("1112223333"));
    assert_eq!(r.phone_list(), "4445556666");
    assert!(!r.remove_phone("1112223333"));
    assert_eq!(r.phones().len(), 1);
  }

  #[test]
  fn edit_phone_replaces_in_place() {
    let mut r = alice();
    r.add_phone("1112223333").unwrap();
    r.add_phone("7778889999").unwrap();
    r.edit_phone("1112223333", "4445556666").unwrap();

    assert_eq!(r.phone_list(), "4445556666, 7778889999");
    assert!(r.find_phone("1112223333").is_none());
    assert_eq!(
      r.phones().iter().filter(|p| p.value() == "4445556666").count(),
      1
    );
  }

  #[test]
  fn edit_phone_reports_missing_and_invalid() {
    let mut r = alice();
    r.add_phone("1112223333").unwrap();

    assert!(matches!(
      r.edit_phone("0000000000", "4445556666"),
      Err(Error::PhoneNotFound { .. })
    ));
    assert!(matches!(
      r.edit_phone("1112223333", "bad"),
      Err(Error::InvalidPhone(_))
    ));
    assert_eq!(r.phone_list(), "1112223333");
  }

  #[test]
  fn email_is_replaced_and_cleared() {
    let mut r = alice();
    r.set_email("a@b.co").unwrap();
    r.set_email("c@d.org").unwrap();
    assert_eq!(r.email().map(Email::value), Some("c@d.org"));

    assert!(r.set_email("x@y.ru").is_err());
    assert_eq!(r.email().map(Email::value), Some("c@d.org"));

    r.set_email("-").unwrap();
    assert!(r.email().is_none());
  }

  #[test]
  fn notes_by_title() {
    let mut r = alice();
    r.add_note(Note::new("Gift", "books", "birthday"));
    r.add_note(Note::new("Work", "team lead", "job"));

    r.find_note_mut("Gift").unwrap().rewrite("vinyl", "Birthday");
    assert_eq!(r.find_note("Gift").unwrap().text, "vinyl");

    assert!(r.remove_note("Gift").is_some());
    assert!(r.remove_note("Gift").is_none());
    assert_eq!(r.notes().len(), 1);
  }

  #[test]
  fn display_includes_only_present_sections() {
    let mut r = alice();
    r.add_phone("1112223333").unwrap();
    assert_eq!(r.to_string(), "Name: Alice, Phones: 1112223333");

    r.set_birthday("03.06.1990").unwrap();
    r.set_address("Kyiv").unwrap();
    r.add_note(Note::new("Gift", "books", "bday"));
    assert_eq!(
      r.to_string(),
      "Name: Alice, Phones: 1112223333, Birthday: 03.06.1990, Address: Kyiv, \
       Notes: Title: Gift, Text: books, Tag: bday"
    );
  }
}
