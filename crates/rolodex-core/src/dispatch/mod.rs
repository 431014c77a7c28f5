//! Command dispatch — from a raw input line to a [`Reply`].
//!
//! Pipeline:
//!   raw line
//!     └─ parse_input()         → verb + args
//!          └─ resolve()         → Command (exact, or a confirmed suggestion)
//!               └─ run()        → handler → Reply
//!
//! Validation failures, missing contacts/notes and wrong argument counts are
//! all turned into warning replies here. Only a failing [`Prompt`] escapes as
//! an error.

mod command;
mod contacts;
mod details;
mod notes;
mod reply;

pub use command::Command;
pub use reply::{Reply, Table, Tone};

use chrono::{Local, NaiveDate};

use crate::{
  Error, Result,
  book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW},
  suggest::{DEFAULT_CUTOFF, Suggester},
};

/// Shown for verbs that are neither known nor confirmed suggestions.
pub const INVALID_COMMAND: &str =
  "Invalid command. The available commands are described in the help: command - help";

/// Placeholder for an unset detail in tables.
pub(crate) const ABSENT: &str = "–";

// ─── Collaborators ───────────────────────────────────────────────────────────

/// Interactive input: note text/tag entry and suggestion confirmation.
pub trait Prompt {
  /// Show `question` and return the user's answer line.
  async fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Settings {
  /// Default look-ahead for `birthdays`, in days.
  pub birthday_window:   u32,
  /// Minimum similarity for a command suggestion.
  pub suggestion_cutoff: f64,
  /// Fixed reference date for `birthdays`; the local date when `None`.
  pub today:             Option<NaiveDate>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      birthday_window:   DEFAULT_BIRTHDAY_WINDOW,
      suggestion_cutoff: DEFAULT_CUTOFF,
      today:             None,
    }
  }
}

// ─── Dispatcher ──────────────────────────────────────────────────────────────

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  Continue(Reply),
  /// Show the reply, persist, and stop.
  Quit(Reply),
}

impl Step {
  pub fn reply(&self) -> &Reply {
    match self {
      Self::Continue(r) | Self::Quit(r) => r,
    }
  }
}

pub struct Dispatcher {
  settings:  Settings,
  suggester: Suggester<'static>,
}

impl Dispatcher {
  pub fn new(settings: Settings) -> Self {
    let suggester = Suggester::new(Command::names()).with_cutoff(settings.suggestion_cutoff);
    Self { settings, suggester }
  }

  fn today(&self) -> NaiveDate {
    self
      .settings
      .today
      .unwrap_or_else(|| Local::now().date_naive())
  }

  /// Parse, resolve and run one input line. Blank lines yield `None`.
  pub async fn handle_line<P: Prompt>(
    &self,
    book: &mut AddressBook,
    line: &str,
    prompt: &mut P,
  ) -> Result<Option<Step>> {
    let Some((verb, args)) = parse_input(line) else {
      return Ok(None);
    };
    let Some(command) = self.resolve(&verb, prompt).await? else {
      tracing::debug!(%verb, "unrecognised command");
      return Ok(Some(Step::Continue(Reply::warning(INVALID_COMMAND))));
    };
    self.run(command, &args, book, prompt).await.map(Some)
  }

  /// Map a verb to a command. Exact verbs are taken as-is; otherwise the
  /// nearest suggestion is offered and used only if the user answers `y`.
  pub async fn resolve<P: Prompt>(
    &self,
    verb: &str,
    prompt: &mut P,
  ) -> Result<Option<Command>> {
    if let Ok(command) = verb.parse::<Command>() {
      return Ok(Some(command));
    }
    let Some(suggestion) = self.suggester.suggest(verb) else {
      return Ok(None);
    };
    let answer = prompt
      .ask(&format!("Do you mean '{suggestion}'? (y/n): "))
      .await?;
    if answer.trim().eq_ignore_ascii_case("y") {
      Ok(suggestion.parse().ok())
    } else {
      Ok(None)
    }
  }

  /// Run `command` against `book`, converting recoverable errors into
  /// warning replies.
  pub async fn run<P: Prompt>(
    &self,
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    prompt: &mut P,
  ) -> Result<Step> {
    tracing::debug!(%command, args = args.len(), "dispatch");

    let outcome = match command {
      Command::Hello => Ok(Reply::info("How can I help you?")),
      Command::Help => Ok(Reply::info(Command::help())),
      Command::Close | Command::Exit | Command::Bye => Ok(Reply::info("Good bye!")),

      Command::Add => contacts::add(args, book),
      Command::Change => contacts::change(args, book),
      Command::ChangeName => contacts::rename(args, book),
      Command::Phone => contacts::show_phones(args, book),
      Command::Contact => contacts::show(args, book),
      Command::All => contacts::show_all(book),
      Command::Delete => contacts::delete(args, book),

      Command::AddBirthday | Command::ChangeBirthday => details::set_birthday(command, args, book),
      Command::ShowBirthday => details::show_birthday(args, book),
      Command::Birthdays => {
        details::birthdays(args, book, self.settings.birthday_window, self.today())
      }
      Command::AddEmail | Command::ChangeEmail => details::set_email(command, args, book),
      Command::ShowEmail => details::show_email(args, book),
      Command::DeleteEmail => details::delete_email(args, book),
      Command::AddAddress | Command::ChangeAddress => details::set_address(command, args, book),
      Command::ShowAddress => details::show_address(args, book),
      Command::DeleteAddress => details::delete_address(args, book),

      Command::AddNote => notes::add(args, book, prompt).await,
      Command::ChangeNote => notes::change(args, book, prompt).await,
      Command::DeleteNote => notes::delete(args, book),
      Command::ShowNotes => notes::show(args, book),
      Command::ShowAllNotes => notes::show_all(book, false),
      Command::ShowAllNotesSortedByTag => notes::show_all(book, true),
      Command::FindNoteByTitle => notes::find_by_title(args, book),
      Command::FindNoteByTag => notes::find_by_tag(args, book),
    };

    let reply = match outcome {
      Ok(reply) => reply,
      Err(e) if e.is_fatal() => return Err(e),
      Err(e) => {
        tracing::debug!(%command, error = %e, "command rejected");
        error_reply(&e)
      }
    };

    Ok(if command.is_exit() {
      Step::Quit(reply)
    } else {
      Step::Continue(reply)
    })
  }
}

impl Default for Dispatcher {
  fn default() -> Self { Self::new(Settings::default()) }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Split a line into a lowercased verb and its whitespace-separated arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
  let mut tokens = line.split_whitespace();
  let verb = tokens.next()?.to_lowercase();
  Some((verb, tokens.collect()))
}

fn error_reply(e: &Error) -> Reply {
  let text = capitalize_first(&e.to_string());
  if e.is_validation() || matches!(e, Error::Usage(_)) {
    Reply::warning(format!("Error: {text}."))
  } else {
    Reply::warning(format!("{text}."))
  }
}

fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// First character upper-cased, the rest lower-cased ("aLICE" → "Alice").
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    None => String::new(),
  }
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
pub fn title_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut in_word = false;
  for c in s.chars() {
    if c.is_alphabetic() {
      if in_word {
        out.extend(c.to_lowercase());
      } else {
        out.extend(c.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(c);
      in_word = false;
    }
  }
  out
}

/// Require exactly `n` arguments.
fn exactly<'a, const N: usize>(args: &[&'a str], usage: &'static str) -> Result<[&'a str; N]> {
  <[&str; N]>::try_from(args).map_err(|_| Error::Usage(usage))
}

#[cfg(test)]
pub(crate) mod testing {
  use std::{collections::VecDeque, io};

  use super::*;

  /// Answers questions from a fixed script and records what was asked.
  #[derive(Default)]
  pub struct Script {
    pub answers:   VecDeque<String>,
    pub questions: Vec<String>,
  }

  impl Script {
    pub fn new(answers: &[&str]) -> Self {
      Self { answers: answers.iter().map(|a| a.to_string()).collect(), questions: Vec::new() }
    }
  }

  impl Prompt for Script {
    async fn ask(&mut self, question: &str) -> io::Result<String> {
      self.questions.push(question.to_owned());
      self
        .answers
        .pop_front()
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
  }

  pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(Settings {
      today: NaiveDate::from_ymd_opt(2024, 6, 1),
      ..Settings::default()
    })
  }

  /// Run a line with no scripted answers and return the reply.
  pub async fn exec(book: &mut AddressBook, line: &str) -> Reply {
    exec_with(book, line, &mut Script::default()).await
  }

  pub async fn exec_with(book: &mut AddressBook, line: &str, script: &mut Script) -> Reply {
    dispatcher()
      .handle_line(book, line, script)
      .await
      .expect("dispatch")
      .expect("non-blank line")
      .reply()
      .clone()
  }
}
