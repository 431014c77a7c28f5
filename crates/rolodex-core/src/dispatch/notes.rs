//! Note commands. Titles are capitalised on input and unique per record;
//! text and tag are collected through the [`Prompt`].

use super::{Prompt, Reply, Table, capitalize, contacts::lookup};
use crate::{Error, Result, book::AddressBook, note::Note};

const NOTE_HEADERS: &[&str] = &["Title", "Text", "Tag"];
const BOOK_NOTE_HEADERS: &[&str] = &["Name", "Title", "Text", "Tag"];

/// Split `<name> <title words...>` into a capitalised name and title.
fn name_and_title(args: &[&str], usage: &'static str) -> Result<(String, String)> {
  match args {
    [name, title @ ..] if !title.is_empty() => {
      Ok((capitalize(name), capitalize(&title.join(" "))))
    }
    _ => Err(Error::Usage(usage)),
  }
}

/// `add-note <name> <title>`
pub(super) async fn add<P: Prompt>(
  args: &[&str],
  book: &mut AddressBook,
  prompt: &mut P,
) -> Result<Reply> {
  let (name, title) = name_and_title(args, "Give me name and note title please")?;
  if lookup(book, &name)?.find_note(&title).is_some() {
    return Err(Error::NoteExists { name, title });
  }

  let text = prompt.ask("Enter the text of the note: ").await?;
  let tag = prompt.ask("Enter the tag for the note: ").await?;
  book
    .get_mut(&name)?
    .add_note(Note::new(title.clone(), text.trim(), tag.trim()));
  Ok(Reply::success(format!("Note '{title}' added to {name}'s record.")))
}

/// `change-note <name> <title>`
pub(super) async fn change<P: Prompt>(
  args: &[&str],
  book: &mut AddressBook,
  prompt: &mut P,
) -> Result<Reply> {
  let (name, title) = name_and_title(args, "Give me name and note title please")?;
  if lookup(book, &name)?.find_note(&title).is_none() {
    return Err(Error::NoteNotFound { name, title });
  }

  let text = prompt.ask("Enter the new text for the note: ").await?;
  let tag = prompt.ask("Enter the new tag for the note: ").await?;
  let Some(note) = book.get_mut(&name)?.find_note_mut(&title) else {
    return Err(Error::NoteNotFound { name, title });
  };
  note.rewrite(text.trim(), tag.trim());
  Ok(Reply::success(format!("Note '{title}' has been updated for {name}.")))
}

/// `delete-note <name> <title>`
pub(super) fn delete(args: &[&str], book: &mut AddressBook) -> Result<Reply> {
  let (name, title) = name_and_title(args, "Give me name and note title please")?;
  if book.get_mut(&name)?.remove_note(&title).is_none() {
    return Err(Error::NoteNotFound { name, title });
  }
  Ok(Reply::success(format!("Note '{title}' has been deleted from {name}'s record.")))
}

/// `show-notes <name>`
pub(super) fn show(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [name] = args else {
    return Err(Error::Usage("Give me name, please"));
  };
  let record = lookup(book, name)?;
  if record.notes().is_empty() {
    return Ok(Reply::warning(format!("Contact {} has no notes.", record.name())));
  }
  let mut table = Table::new(NOTE_HEADERS).titled(format!("Notes for contact {}:", record.name()));
  for note in record.notes() {
    table.push(vec![note.title.clone(), note.text.clone(), note.tag.clone()]);
  }
  Ok(table.into())
}

/// `show-all-notes` and `show-all-notes-sorted-by-tag`
pub(super) fn show_all(book: &AddressBook, by_tag: bool) -> Result<Reply> {
  let mut notes: Vec<_> = book.notes().collect();
  if notes.is_empty() {
    return Ok(Reply::warning("No contacts with notes found."));
  }
  let caption = if by_tag {
    notes.sort_by_cached_key(|(_, note)| note.tag.to_lowercase());
    "All contacts with notes (sorted by tag):"
  } else {
    "All contacts with notes:"
  };
  let mut table = Table::new(BOOK_NOTE_HEADERS).titled(caption);
  for (record, note) in notes {
    table.push(vec![
      record.name().to_string(),
      note.title.clone(),
      note.text.clone(),
      note.tag.clone(),
    ]);
  }
  Ok(table.into())
}

/// `find-note-by-title <title>`
pub(super) fn find_by_title(args: &[&str], book: &AddressBook) -> Result<Reply> {
  if args.is_empty() {
    return Err(Error::Usage("Give me the note title please"));
  }
  let title = capitalize(&args.join(" "));
  let hits = matching(book, |note| note.title == title);
  if hits.rows.is_empty() {
    return Ok(Reply::warning(format!("No notes found with Title '{title}'.")));
  }
  Ok(hits.titled(format!("Notes with Title '{title}':")).into())
}

/// `find-note-by-tag <tag>`
pub(super) fn find_by_tag(args: &[&str], book: &AddressBook) -> Result<Reply> {
  let [tag] = args else {
    return Err(Error::Usage("Give me the tag please"));
  };
  let tag = tag.to_lowercase();
  let hits = matching(book, |note| note.has_tag(&tag));
  if hits.rows.is_empty() {
    return Ok(Reply::warning(format!("No notes found with Tag '{tag}'.")));
  }
  Ok(hits.titled(format!("Notes with Tag '{tag}':")).into())
}

fn matching(book: &AddressBook, keep: impl Fn(&Note) -> bool) -> Table {
  let mut table = Table::new(BOOK_NOTE_HEADERS);
  for (record, note) in book.notes().filter(|(_, n)| keep(*n)) {
    table.push(vec![
      record.name().to_string(),
      note.title.clone(),
      note.text.clone(),
      note.tag.clone(),
    ]);
  }
  table
}
