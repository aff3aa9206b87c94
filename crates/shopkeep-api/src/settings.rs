//! Runtime server configuration.
//!
//! Sources are layered, later ones winning: built-in defaults, then an
//! optional TOML file, then `SHOPKEEP_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Filename the store is created under when nothing else is configured.
pub const DEFAULT_DATABASE_PATH: &str = "backend_activity.db";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Load configuration, reading `file` if it exists.
  pub fn load(file: &Path) -> Result<Self, ConfigError> {
    Self::builder(file)?
      .add_source(Environment::with_prefix("SHOPKEEP"))
      .build()?
      .try_deserialize()
  }

  fn builder(
    file: &Path,
  ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(
      Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 8000_i64)?
        .set_default("database_path", DEFAULT_DATABASE_PATH)?
        .add_source(File::from(file.to_path_buf()).required(false)),
    )
  }

  /// `host:port`, ready for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The database path with a leading `~/` expanded to `$HOME`.
  pub fn resolved_database_path(&self) -> PathBuf {
    expand_tilde(&self.database_path)
  }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
