//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes a short list of paths for config files
//! 4. Supports TOML and JSON formats (detected by extension)
//!
//! ## Environment Variables
//! - `PETCLINIC_DB_PATH`: database file path (required)
//! - `PETCLINIC_DB_POOL_SIZE`: connection pool size (optional, default 4)
//! - `PETCLINIC_LOG_LEVEL`: log level filter (optional, default "info")
//!
//! ## File Locations
//! The loader probes `./config.toml`, `./petclinic.toml`, `./config.json`
//! and `./petclinic.json` in the current working directory.

use std::path::{Path, PathBuf};

use petclinic_domain::{ClinicError, Config, DatabaseConfig, LoggingConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ClinicError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or required fields are
/// missing.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment configuration incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ClinicError::Config` if `PETCLINIC_DB_PATH` is missing or the
/// optional variables have invalid values.
pub fn load_from_env() -> Result<Config> {
    let path = env_var("PETCLINIC_DB_PATH")?;
    let pool_size = match std::env::var("PETCLINIC_DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| ClinicError::Config(format!("Invalid pool size: {e}")))?,
        Err(_) => 4,
    };
    let level = std::env::var("PETCLINIC_LOG_LEVEL").unwrap_or_else(|_| "info".into());

    Ok(Config {
        database: DatabaseConfig { path, pool_size },
        logging: LoggingConfig { level },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the default locations.
///
/// # Errors
/// Returns `ClinicError::Config` if no file is found, the file cannot be
/// read, or its contents do not parse.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => probe_config_paths()
            .ok_or_else(|| ClinicError::Config("no config file found".into()))?,
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| ClinicError::Config(format!("Failed to read {}: {e}", path.display())))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&raw)
            .map_err(|e| ClinicError::Config(format!("Invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(&raw)
            .map_err(|e| ClinicError::Config(format!("Invalid JSON config: {e}"))),
        _ => Err(ClinicError::Config(format!(
            "Unsupported config format: {}",
            path.display()
        ))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 4] =
        ["config.toml", "petclinic.toml", "config.json", "petclinic.json"];
    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| ClinicError::Config(format!("Missing environment variable: {name}")))
}
