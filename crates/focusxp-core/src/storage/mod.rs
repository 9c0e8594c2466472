//! Persistence.
//!
//! The engine only needs read-all / write-all access per logical table, so
//! any backend implementing [`TableStore`] will do. [`Tables`] layers typed
//! JSON decoding on top and degrades unreadable tables to empty ones.

mod config;
pub mod database;
mod memory;
mod tables;

pub use config::{Config, LoggingConfig, ObjectiveConfig, SessionConfig};
pub use database::SqliteStore;
pub use memory::MemoryStore;
pub use tables::{Table, Tables};

use std::path::PathBuf;

use crate::error::StoreError;

/// Raw table access: one JSON document per table name.
pub trait TableStore {
    /// Returns `None` when the table has never been written.
    fn load(&self, table: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, table: &str, contents: &str) -> Result<(), StoreError>;
}

/// Returns the data directory, creating it if needed.
///
/// `FOCUSXP_DATA_DIR` overrides the location. Otherwise it is
/// `~/.config/focusxp/`, or `~/.config/focusxp-dev/` when `FOCUSXP_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("FOCUSXP_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FOCUSXP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focusxp-dev")
            } else {
                base_dir.join("focusxp")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
