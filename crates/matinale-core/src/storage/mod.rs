mod config;
pub mod database;

pub use config::Config;
pub use database::{DataResetOptions, DataResetSummary, Database};

use std::path::PathBuf;

/// Returns `~/.config/matinale[-dev]/` based on MATINALE_ENV.
///
/// Set MATINALE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MATINALE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("matinale-dev")
    } else {
        base_dir.join("matinale")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
