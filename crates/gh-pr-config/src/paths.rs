//! Configuration and credential file paths
//!
//! Uses the home directory via `dirs` crate with fallbacks.
//!
//! Locations:
//! - Settings: `./.gh-pr-dashboard.toml`, then `~/.gh-pr-dashboard.toml`
//! - Credentials: `~/.config/hub` (the file written by `hub`)

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const CONFIG_FILE: &str = ".gh-pr-dashboard.toml";
const HUB_CREDENTIALS_FILE: &str = ".config/hub";

/// Get the user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Get path to the settings file in the current working directory
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(CONFIG_FILE))
}

/// Get path to the settings file in the home directory
pub fn home_config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONFIG_FILE))
}

/// Get the default path of the hub credentials file
/// Returns ~/.config/hub on every platform, like `hub` itself
pub fn default_credentials_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(HUB_CREDENTIALS_FILE))
}
