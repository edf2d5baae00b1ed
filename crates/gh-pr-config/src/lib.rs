//! Configuration and credentials for gh-pr-dashboard
//!
//! This crate provides:
//! - File path utilities for settings and credentials files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - GitHub credentials from the hub YAML file

pub mod app_config;
pub mod config_file;
pub mod credentials;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use credentials::{Credentials, CredentialsError};
