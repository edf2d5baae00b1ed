//! Application configuration
//!
//! Configuration loaded from .gh-pr-dashboard.toml file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from .gh-pr-dashboard.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Organization whose public repositories are polled
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Address the dashboard listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Seconds between two pull request refreshes
    #[serde(default = "default_pr_refresh_interval_secs")]
    pub pr_refresh_interval_secs: u64,

    /// Seconds between two analytics refreshes
    #[serde(default = "default_analytics_refresh_interval_secs")]
    pub analytics_refresh_interval_secs: u64,

    /// Status contexts containing any of these substrings are not counted
    #[serde(default = "default_ignored_contexts")]
    pub ignored_contexts: Vec<String>,

    /// Path of the hub credentials file (defaults to ~/.config/hub)
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,

    /// Trend report endpoint of the analytics API
    #[serde(default = "default_analytics_url")]
    pub analytics_url: String,

    /// Request timeout for the analytics API, in seconds
    #[serde(default = "default_analytics_timeout_secs")]
    pub analytics_timeout_secs: u64,
}

fn default_organization() -> String {
    "code-ready".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_pr_refresh_interval_secs() -> u64 {
    60
}

fn default_analytics_refresh_interval_secs() -> u64 {
    24 * 60 * 60
}

fn default_ignored_contexts() -> Vec<String> {
    vec!["centos".to_string(), "build_docs".to_string()]
}

fn default_analytics_url() -> String {
    "https://www.woopra.com/rest/3.7/trends?project=prod.crc&report_id=tl3u3m7uoz".to_string()
}

fn default_analytics_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            listen_addr: default_listen_addr(),
            pr_refresh_interval_secs: default_pr_refresh_interval_secs(),
            analytics_refresh_interval_secs: default_analytics_refresh_interval_secs(),
            ignored_contexts: default_ignored_contexts(),
            credentials_path: None,
            analytics_url: default_analytics_url(),
            analytics_timeout_secs: default_analytics_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn pr_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.pr_refresh_interval_secs)
    }

    pub fn analytics_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.analytics_refresh_interval_secs)
    }

    pub fn analytics_timeout(&self) -> Duration {
        Duration::from_secs(self.analytics_timeout_secs)
    }

    /// Path of the credentials file, falling back to ~/.config/hub
    pub fn credentials_path(&self) -> Result<PathBuf> {
        match &self.credentials_path {
            Some(path) => Ok(path.clone()),
            None => crate::paths::default_credentials_path(),
        }
    }
}
