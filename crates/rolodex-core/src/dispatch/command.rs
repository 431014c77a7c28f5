//! The command vocabulary understood by the dispatcher.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One REPL verb. Declaration order is the suggester's candidate order.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
  Hello,
  Add,
  ChangeName,
  Change,
  Phone,
  Contact,
  Delete,
  AddBirthday,
  ChangeBirthday,
  ShowBirthday,
  Birthdays,
  AddEmail,
  ChangeEmail,
  ShowEmail,
  DeleteEmail,
  ShowAddress,
  AddAddress,
  ChangeAddress,
  DeleteAddress,
  AddNote,
  ChangeNote,
  ShowNotes,
  DeleteNote,
  ShowAllNotes,
  ShowAllNotesSortedByTag,
  FindNoteByTitle,
  FindNoteByTag,
  All,
  Help,
  Close,
  Exit,
  Bye,
}

impl Command {
  /// Every verb as typed, in declaration order.
  pub fn names() -> impl Iterator<Item = &'static str> { Self::iter().map(<&'static str>::from) }

  pub fn is_exit(self) -> bool { matches!(self, Self::Close | Self::Exit | Self::Bye) }

  /// Argument synopsis and one-line description for the help screen.
  pub fn synopsis(self) -> (&'static str, &'static str) {
    match self {
      Self::Hello => ("", "Displays a greeting message."),
      Self::Help => ("", "Shows this help message."),
      Self::Add => (
        "<name> <phone> [birthday]",
        "Adds a contact, or another phone to an existing contact.",
      ),
      Self::Change => (
        "<name> <old_phone> [new_phone]",
        "Replaces a phone number; with no new number, removes it.",
      ),
      Self::ChangeName => ("<old_name> <new_name>", "Renames a contact."),
      Self::Phone => ("<name>", "Shows the phone numbers of a contact."),
      Self::Contact => ("<name>", "Shows a contact."),
      Self::All => ("", "Shows all contacts."),
      Self::Delete => ("<name>", "Deletes a contact."),
      Self::AddBirthday => ("<name> <DD.MM.YYYY>", "Adds a birthday to a contact."),
      Self::ChangeBirthday => ("<name> <DD.MM.YYYY>", "Changes the birthday of a contact."),
      Self::ShowBirthday => ("<name>", "Shows the birthday of a contact."),
      Self::Birthdays => ("[days]", "Shows birthdays coming up in the next days (default 7)."),
      Self::AddEmail => ("<name> <email>", "Adds an email to a contact."),
      Self::ChangeEmail => ("<name> <email>", "Changes the email of a contact."),
      Self::ShowEmail => ("<name>", "Shows the email of a contact."),
      Self::DeleteEmail => ("<name>", "Deletes the email of a contact."),
      Self::AddAddress => ("<name> <address...>", "Adds an address to a contact."),
      Self::ChangeAddress => ("<name> <address...>", "Changes the address of a contact."),
      Self::ShowAddress => ("<name>", "Shows the address of a contact."),
      Self::DeleteAddress => ("<name>", "Deletes the address of a contact."),
      Self::AddNote => ("<name> <title>", "Adds a note; text and tag are asked for."),
      Self::ChangeNote => ("<name> <title>", "Rewrites the text and tag of a note."),
      Self::DeleteNote => ("<name> <title>", "Deletes a note."),
      Self::ShowNotes => ("<name>", "Shows the notes of a contact."),
      Self::ShowAllNotes => ("", "Shows every note."),
      Self::ShowAllNotesSortedByTag => ("", "Shows every note, sorted by tag."),
      Self::FindNoteByTitle => ("<title>", "Finds notes by title."),
      Self::FindNoteByTag => ("<tag>", "Finds notes by tag."),
      Self::Close | Self::Exit | Self::Bye => ("", "Saves and exits."),
    }
  }

  /// The full help screen.
  pub fn help() -> String {
    let mut out = String::from("Available commands:\n");
    for command in Self::iter() {
      let (args, description) = command.synopsis();
      let usage = if args.is_empty() {
        command.to_string()
      } else {
        format!("{command} {args}")
      };
      out.push_str(&format!("  - {usage:<42} {description}\n"));
    }
    out
  }
}
