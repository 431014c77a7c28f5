//! Dispatch results, as plain text for the presentation layer to style.

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
  Success,
  Warning,
  Info,
}

/// Rows with a fixed header, optionally preceded by a caption line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
  pub title:   Option<String>,
  pub headers: Vec<&'static str>,
  pub rows:    Vec<Vec<String>>,
}

impl Table {
  pub fn new(headers: &[&'static str]) -> Self {
    Self { title: None, headers: headers.to_vec(), rows: Vec::new() }
  }

  pub fn titled(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn push(&mut self, row: Vec<String>) { self.rows.push(row); }
}

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
  Message { tone: Tone, text: String },
  Table(Table),
}

impl Reply {
  pub fn success(text: impl Into<String>) -> Self {
    Self::Message { tone: Tone::Success, text: text.into() }
  }

  pub fn warning(text: impl Into<String>) -> Self {
    Self::Message { tone: Tone::Warning, text: text.into() }
  }

  pub fn info(text: impl Into<String>) -> Self {
    Self::Message { tone: Tone::Info, text: text.into() }
  }

  pub fn tone(&self) -> Tone {
    match self {
      Self::Message { tone, .. } => *tone,
      Self::Table(_) => Tone::Success,
    }
  }

  /// Message text, or `None` for tables.
  pub fn text(&self) -> Option<&str> {
    match self {
      Self::Message { text, .. } => Some(text),
      Self::Table(_) => None,
    }
  }

  pub fn table(&self) -> Option<&Table> {
    match self {
      Self::Table(t) => Some(t),
      Self::Message { .. } => None,
    }
  }
}

impl From<Table> for Reply {
  fn from(table: Table) -> Self { Self::Table(table) }
}
