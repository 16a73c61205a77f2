mod config;
pub mod database;
pub mod kv;

pub use config::{Config, DisplayConfig};
pub use database::Database;
pub use kv::{KvStore, MemoryStore, PersistedState, StateStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding `energize.db` and `config.toml`.
///
/// `ENERGIZE_DATA_DIR` wins when set. Otherwise `~/.config/energize[-dev]/`,
/// with the `-dev` suffix when `ENERGIZE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ENERGIZE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ENERGIZE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("energize-dev")
            } else {
                base_dir.join("energize")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
