//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `SHIFTCAL_STORE_BACKEND` is set, the configuration comes from the
//!    environment (unset variables keep their defaults); an invalid value is
//!    an error, never a silent fallback
//! 2. Otherwise a config file is probed for, falling back to the defaults
//!    (SQLite file `shiftcal.db`)
//! 3. In both cases the optional variables below override what was loaded
//!
//! ## Environment Variables
//! - `SHIFTCAL_STORE_BACKEND`: `sqlite` or `memory`
//! - `SHIFTCAL_STORE_PATH`: SQLite file path
//! - `SHIFTCAL_STORE_POOL_SIZE`: Connection pool size
//! - `SHIFTCAL_LOG_LEVEL`: Default tracing filter directive
//! - `SHIFTCAL_LOG_JSON`: JSON log output (true/false)
//! - `SHIFTCAL_USER`: Signed-in user id
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./shiftcal.json` or `./shiftcal.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names beside the executable

use std::path::{Path, PathBuf};

use shiftcal_domain::{Config, Result, ShiftCalError, StoreBackend};

const BACKEND_VAR: &str = "SHIFTCAL_STORE_BACKEND";

const CONFIG_FILE_NAMES: [&str; 4] = ["shiftcal.json", "shiftcal.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ShiftCalError::Config` if an environment value or the probed
/// file is invalid.
pub fn load() -> Result<Config> {
    if std::env::var_os(BACKEND_VAR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `SHIFTCAL_STORE_BACKEND` is required; every other variable is optional
/// and falls back to its default.
///
/// # Errors
/// Returns `ShiftCalError::Config` if the backend variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = env_var(BACKEND_VAR)?
        .parse::<StoreBackend>()
        .map_err(|e| ShiftCalError::Config(format!("Invalid store backend: {e}")))?;

    let mut config = Config::default();
    config.store.backend = backend;
    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Apply the optional `SHIFTCAL_*` variables on top of `config`.
///
/// Unset or blank variables leave the loaded value alone.
///
/// # Errors
/// Returns `ShiftCalError::Config` if `SHIFTCAL_STORE_POOL_SIZE` is not a
/// number.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(path) = env_opt("SHIFTCAL_STORE_PATH") {
        config.store.path = path;
    }
    if let Some(pool_size) = env_opt("SHIFTCAL_STORE_POOL_SIZE") {
        config.store.pool_size = pool_size
            .parse::<u32>()
            .map_err(|e| ShiftCalError::Config(format!("Invalid pool size: {e}")))?;
    }
    if let Some(level) = env_opt("SHIFTCAL_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("SHIFTCAL_LOG_JSON", config.logging.json);
    if let Some(user) = env_opt("SHIFTCAL_USER") {
        config.identity.user_id = Some(user);
    }

    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ShiftCalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShiftCalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShiftCalError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShiftCalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShiftCalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShiftCalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShiftCalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    candidates_in(&dirs).into_iter().find(|path| path.exists())
}

fn candidates_in(dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter().flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))).collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShiftCalError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional, non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
