//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `ROLODEX_*` environment variables. Command-line flags are applied on top by
//! `main`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rolodex_core::{book::DEFAULT_BIRTHDAY_WINDOW, dispatch, suggest::DEFAULT_CUTOFF};
use serde::Deserialize;

/// Where the address book lives unless configured otherwise.
pub const DEFAULT_STORE_PATH: &str = "addressbook.sqlite3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub store_path:           PathBuf,
  pub birthday_window_days: u32,
  pub suggestion_cutoff:    f64,
  pub color:                bool,
}

impl Config {
  /// Read `file` (if it exists) and the environment over the defaults.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .set_default("birthday_window_days", i64::from(DEFAULT_BIRTHDAY_WINDOW))?
      .set_default("suggestion_cutoff", DEFAULT_CUTOFF)?
      .set_default("color", true)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX"))
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut config: Self = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    config.store_path = expand_tilde(&config.store_path);
    Ok(config)
  }

  pub fn dispatch_settings(&self) -> dispatch::Settings {
    dispatch::Settings {
      birthday_window:   self.birthday_window_days,
      suggestion_cutoff: self.suggestion_cutoff,
      today:             None,
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
