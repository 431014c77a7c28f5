//! Error types for `rolodex-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  // ── Validation ──────────────────────────────────────────────────────────
  #[error("contact name must not be empty")]
  EmptyName,

  #[error("phone number should contain exactly 10 digits: {0:?}")]
  InvalidPhone(String),

  #[error("invalid date {0:?}, use DD.MM.YYYY")]
  InvalidBirthday(String),

  #[error("email must be between 3 and 150 characters long")]
  InvalidEmailLength,

  #[error("invalid email format or forbidden domain: {0:?}")]
  InvalidEmail(String),

  // ── Lookups ─────────────────────────────────────────────────────────────
  #[error("contact {0} not found")]
  ContactNotFound(String),

  #[error("phone number {phone} not found for {name}")]
  PhoneNotFound { name: String, phone: String },

  #[error("note with title '{title}' not found for {name}")]
  NoteNotFound { name: String, title: String },

  // ── Conflicts ───────────────────────────────────────────────────────────
  #[error("contact {0} already exists")]
  ContactExists(String),

  #[error("contact with name {name} and phone {phone} already exists")]
  PhoneExists { name: String, phone: String },

  #[error("note with title '{title}' already exists for {name}")]
  NoteExists { name: String, title: String },

  // ── Dispatch ────────────────────────────────────────────────────────────
  /// Wrong number of arguments; carries the usage hint shown to the user.
  #[error("{0}")]
  Usage(&'static str),

  /// The interactive input collaborator failed or was interrupted.
  #[error("input error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// Whether the error should end the session rather than be reported.
  pub fn is_fatal(&self) -> bool { matches!(self, Self::Io(_)) }

  /// Whether the error comes from a field validator.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::EmptyName
        | Self::InvalidPhone(_)
        | Self::InvalidBirthday(_)
        | Self::InvalidEmailLength
        | Self::InvalidEmail(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
