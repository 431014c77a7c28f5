//! `rolodex` — interactive command-line address book.
//!
//! # Usage
//!
//! ```
//! rolodex
//! rolodex --store ~/contacts.sqlite3 --no-color
//! rolodex --config ~/.config/rolodex.toml
//! ```
//!
//! The book is loaded at startup and saved on `close`/`exit`/`bye`, at end of
//! input, and on Ctrl-C.

mod render;
mod settings;
mod terminal;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use render::Renderer;
use rolodex_core::{
  AddressBook,
  dispatch::{Command, Dispatcher, Reply, Step},
  store::BookStore,
};
use rolodex_store_sqlite::SqliteStore;
use terminal::Terminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Command-line address book")]
struct Args {
  /// Path to a TOML config file; missing files are ignored.
  #[arg(short, long, value_name = "FILE", default_value = "rolodex.toml")]
  config: PathBuf,

  /// Address book file (overrides `store_path` from the config).
  #[arg(long, env = "ROLODEX_STORE", value_name = "FILE")]
  store: Option<PathBuf>,

  /// Disable colored output.
  #[arg(long)]
  no_color: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let mut cfg = settings::Config::load(&args.config)?;
  if let Some(store) = args.store {
    cfg.store_path = settings::expand_tilde(&store);
  }
  if args.no_color {
    cfg.color = false;
  }
  tracing::debug!(?cfg, "configuration loaded");

  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open address book at {}", cfg.store_path.display()))?;
  let mut book = store.load().await.context("failed to load address book")?;

  let dispatcher = Dispatcher::new(cfg.dispatch_settings());
  let renderer = Renderer::new(cfg.color);
  let mut terminal = Terminal::new();

  terminal.say(&renderer.render(&Reply::info("Welcome to the assistant bot!")))?;
  terminal.say(&renderer.render(&Reply::info(Command::help())))?;

  let outcome = run_repl(&dispatcher, &renderer, &mut terminal, &mut book).await;

  store
    .save(&book)
    .await
    .context("failed to save address book")?;
  outcome
}

// ─── REPL ─────────────────────────────────────────────────────────────────────

/// Read and dispatch lines until a quit command, end of input, or Ctrl-C.
async fn run_repl(
  dispatcher: &Dispatcher,
  renderer: &Renderer,
  terminal: &mut Terminal,
  book: &mut AddressBook,
) -> Result<()> {
  loop {
    terminal.show("Enter a command: ")?;

    let line = tokio::select! {
      line = terminal.read_line() => line.context("reading input")?,
      _ = tokio::signal::ctrl_c() => return interrupted(renderer, terminal),
    };
    let Some(line) = line else {
      tracing::debug!("end of input");
      terminal.say("")?;
      return Ok(());
    };

    let step = tokio::select! {
      step = dispatcher.handle_line(book, &line, terminal) => step,
      _ = tokio::signal::ctrl_c() => return interrupted(renderer, terminal),
    };

    match step {
      Ok(None) => {}
      Ok(Some(Step::Continue(reply))) => terminal.say(&renderer.render(&reply))?,
      Ok(Some(Step::Quit(reply))) => {
        terminal.say(&renderer.render(&reply))?;
        return Ok(());
      }
      Err(e) => {
        tracing::warn!(error = %e, "input closed during a prompt");
        terminal.say("")?;
        return Ok(());
      }
    }
  }
}

fn interrupted(renderer: &Renderer, terminal: &Terminal) -> Result<()> {
  terminal.say("")?;
  terminal.say(&renderer.render(&Reply::warning("Program stopped. Exiting...")))?;
  Ok(())
}
