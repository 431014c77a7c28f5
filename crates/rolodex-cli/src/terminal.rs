//! Line-based terminal I/O shared by the REPL loop and interactive prompts.

use std::io::{self, Write as _};

use rolodex_core::dispatch::Prompt;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Terminal {
  lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
  pub fn new() -> Self { Self { lines: BufReader::new(tokio::io::stdin()).lines() } }

  /// Print `text` without a newline and flush it.
  pub fn show(&self, text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
  }

  pub fn say(&self, text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
  }

  /// Next input line, or `None` at end of input. Cancel-safe.
  pub async fn read_line(&mut self) -> io::Result<Option<String>> {
    self.lines.next_line().await
  }
}

impl Prompt for Terminal {
  async fn ask(&mut self, question: &str) -> io::Result<String> {
    self.show(question)?;
    self.read_line().await?.ok_or_else(|| {
      io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while waiting for an answer")
    })
  }
}
