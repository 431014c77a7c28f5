//! Notes — titled, tagged free-text annotations attached to a record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A free-form note. None of its parts are validated; title uniqueness within
/// a record is enforced by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub title: String,
  pub text:  String,
  pub tag:   String,
}

impl Note {
  pub fn new(
    title: impl Into<String>,
    text: impl Into<String>,
    tag: impl Into<String>,
  ) -> Self {
    Self { title: title.into(), text: text.into(), tag: tag.into() }
  }

  /// Replace the body and tag, keeping the title.
  pub fn rewrite(&mut self, text: impl Into<String>, tag: impl Into<String>) {
    self.text = text.into();
    self.tag = tag.into();
  }

  /// Case-insensitive tag comparison.
  pub fn has_tag(&self, tag: &str) -> bool { self.tag.to_lowercase() == tag.to_lowercase() }
}

impl fmt::Display for Note {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Title: {}, Text: {}, Tag: {}", self.title, self.text, self.tag)
  }
}
