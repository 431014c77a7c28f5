//! Plain-text rendering of dispatcher replies: ASCII tables, messages colored
//! by tone.

use crossterm::style::{Color, Stylize};
use rolodex_core::dispatch::{Reply, Table, Tone};

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
  color: bool,
}

impl Renderer {
  pub fn new(color: bool) -> Self { Self { color } }

  pub fn render(&self, reply: &Reply) -> String {
    match reply {
      Reply::Message { tone, text } => self.paint(*tone, text),
      Reply::Table(table) => self.table(table),
    }
  }

  /// `text` in the color for `tone`, or unchanged when color is off.
  pub fn paint(&self, tone: Tone, text: &str) -> String {
    if !self.color {
      return text.to_owned();
    }
    let color = match tone {
      Tone::Success => Color::Green,
      Tone::Warning => Color::Yellow,
      Tone::Info => Color::Cyan,
    };
    text.with(color).to_string()
  }

  fn table(&self, table: &Table) -> String {
    let mut out = String::new();
    if let Some(title) = &table.title {
      out.push_str(&self.paint(Tone::Info, title));
      out.push('\n');
    }
    out.push_str(&grid(table));
    out
  }
}

// ─── Grid ────────────────────────────────────────────────────────────────────

fn width(s: &str) -> usize { s.chars().count() }

/// Column widths: the widest of the header and every cell in the column.
fn column_widths(table: &Table) -> Vec<usize> {
  let mut widths: Vec<usize> = table.headers.iter().map(|h| width(h)).collect();
  for row in &table.rows {
    for (w, cell) in widths.iter_mut().zip(row) {
      *w = (*w).max(width(cell));
    }
  }
  widths
}

fn rule(widths: &[usize]) -> String {
  let mut line = String::from("+");
  for w in widths {
    line.push_str(&"-".repeat(w + 2));
    line.push('+');
  }
  line
}

fn row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
  let mut line = String::from("|");
  for (cell, w) in cells.zip(widths) {
    let pad = w - width(cell);
    line.push(' ');
    line.push_str(cell);
    line.push_str(&" ".repeat(pad + 1));
    line.push('|');
  }
  line
}

fn grid(table: &Table) -> String {
  let widths = column_widths(table);
  let rule = rule(&widths);
  let mut lines = vec![
    rule.clone(),
    row(table.headers.iter().copied(), &widths),
    rule.clone(),
  ];
  for cells in &table.rows {
    lines.push(row(cells.iter().map(String::as_str), &widths));
  }
  lines.push(rule);
  lines.join("\n")
}
