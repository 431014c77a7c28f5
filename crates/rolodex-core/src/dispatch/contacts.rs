//! Contact-level commands: add, change, rename, show, delete.

use super::{ABSENT, Reply, Table, capitalize, exactly};
use crate::{
  Error, Result,
  book::AddressBook,
  field::{Field, Name},
  record::Record,
};

const CONTACT_HEADERS: &[&str] = &["Name", "Phones", "Birthday", "Email", "Address"];

fn contact_row(record: &Record) -> Vec<String> {
  vec![
    record.name().to_string(),
    record.phone_list(),
    record.birthday().map_or(ABSENT.into(), ToString::to_string),
    record.email().map_or(ABSENT.into(), ToString::to_string),
    record.address().map_or(ABSENT.into(), ToString::to_string),
  ]
}

/// Borrow the record for a typed name, capitalising it first.
pub(super) fn lookup<'b>(book: &'b AddressBook, raw_name: &str) -> Result<&'b Record> {
  let name = capitalize(raw_name);
  book.find(&name).ok_or(Error::ContactNotFound(name))
}

/// `add <name> <phone> [birthday]`
pub(super) fn add(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let (raw_name, phone, birthday) = match *args {
    [name, phone] => (name, phone, None),
    [name, phone, birthday] => (name, phone, Some(birthday)),
    _ => return Err(Error::Usage("Give me name, phone and optional birthday please")),
  };
  let name = capitalize(raw_name);

  if let Some(existing) = book.find_mut(&name) {
    if existing.find_phone(phone).is_some() {
      return Err(Error::PhoneExists { name, phone: phone.to_owned() });
    }
    existing.add_phone(phone)?;
    return Ok(Reply::success(format!("Contact {name} updated.")));
  }

  let mut record = Record::named(&name)?;
  record.add_phone(phone)?;
  if let Some(birthday) = birthday {
    record.set_birthday(birthday)?;
  }
  book.add(record)?;
  Ok(Reply::success(format!("Contact {name} added.")))
}

/// `change <name> <old> <new>` edits a phone; `change <name> <phone>` removes it.
pub(super) fn change(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  match *args {
    [raw_name, old, new] => {
      book.get_mut(&capitalize(raw_name))?.edit_phone(old, new)?;
      Ok(Reply::success("Phone number updated."))
    }
    [raw_name, phone] => {
      let name = capitalize(raw_name);
      if !book.get_mut(&name)?.remove_phone(phone) {
        return Err(Error::PhoneNotFound { name, phone: phone.to_owned() });
      }
      Ok(Reply::success("Phone number removed."))
    }
    _ => Err(Error::Usage(
      "Give me name, old phone and new phone please or name and phone to remove",
    )),
  }
}

/// `change-name <old> <new>`
pub(super) fn rename(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let [old, new] = exactly(args, "Provide the current name and the new name")?;
  let (old, new) = (capitalize(old), Name::parse(&capitalize(new))?);
  let reply = format!("Contact name changed from '{old}' to '{new}'.");
  book.rename(&old, new)?;
  Ok(Reply::success(reply))
}

/// `phone <name>`
pub(super) fn show_phones(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let record = lookup(book, name)?;
  let mut table = Table::new(&["Name", "Phones"]);
  table.push(vec![record.name().to_string(), record.phone_list()]);
  Ok(table.into())
}

/// `contact <name>`
pub(super) fn show(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me contact name, please")?;
  let record = lookup(book, name)?;
  let mut table = Table::new(CONTACT_HEADERS);
  table.push(contact_row(record));
  Ok(table.into())
}

/// `all`
pub(super) fn show_all(book: &AddressBook) -> Result<Reply> {
  if book.is_empty() {
    return Ok(Reply::warning("The address book is empty."));
  }
  let mut table = Table::new(CONTACT_HEADERS);
  for record in book.iter() {
    table.push(contact_row(record));
  }
  Ok(table.into())
}

/// `delete <name>`
pub(super) fn delete(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let [name] = exactly(args, "Give me name, please")?;
  let removed = book.delete(&capitalize(name))?;
  Ok(Reply::success(format!("Contact {} deleted.", removed.name())))
}
