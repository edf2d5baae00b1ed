//! GitHub credentials
//!
//! Reads the access token from the YAML file `hub` keeps its logins in:
//!
//! ```yaml
//! github.com:
//! - user: someone
//!   oauth_token: abc123
//!   protocol: https
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const GITHUB_HOST: &str = "github.com";

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Failed to read credentials file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credentials file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("No {0} login found in credentials file")]
    MissingHost(String),
}

/// One login entry of the credentials file
#[derive(Debug, Clone, Deserialize)]
struct HostLogin {
    #[serde(default)]
    user: Option<String>,
    oauth_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    protocol: Option<String>,
}

/// GitHub credentials used by the pull request refresher
#[derive(Clone)]
pub struct Credentials {
    /// Login name, if the file records one
    pub user: Option<String>,
    /// Personal access token
    pub oauth_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("oauth_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read the credentials file at `path`
    pub fn load(path: &Path) -> Result<Self, CredentialsError> {
        let content = std::fs::read_to_string(path).map_err(|source| CredentialsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse credentials file content, using the first github.com login
    pub fn from_yaml(content: &str) -> Result<Self, CredentialsError> {
        let mut hosts: HashMap<String, Vec<HostLogin>> = serde_yaml::from_str(content)?;

        let login = hosts
            .remove(GITHUB_HOST)
            .and_then(|logins| logins.into_iter().next())
            .ok_or_else(|| CredentialsError::MissingHost(GITHUB_HOST.to_string()))?;

        Ok(Self {
            user: login.user,
            oauth_token: login.oauth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_uses_first_login() {
        let yaml = r#"
github.com:
- user: first
  oauth_token: token-one
  protocol: https
- user: second
  oauth_token: token-two
  protocol: https
"#;
        let credentials = Credentials::from_yaml(yaml).unwrap();
        assert_eq!(credentials.user.as_deref(), Some("first"));
        assert_eq!(credentials.oauth_token, "token-one");
    }

    #[test]
    fn test_from_yaml_missing_host() {
        let yaml = r#"
ghe.example.com:
- user: someone
  oauth_token: abc
"#;
        let err = Credentials::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CredentialsError::MissingHost(_)));
    }

    #[test]
    fn test_from_yaml_empty_login_list() {
        let err = Credentials::from_yaml("github.com: []\n").unwrap_err();
        assert!(matches!(err, CredentialsError::MissingHost(_)));
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = Credentials::from_yaml("github.com: [unclosed").unwrap_err();
        assert!(matches!(err, CredentialsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Credentials::load(Path::new("/nonexistent/gh-pr-dashboard/hub")).unwrap_err();
        assert!(matches!(err, CredentialsError::Read { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials {
            user: Some("someone".to_string()),
            oauth_token: "secret".to_string(),
        };
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("secret"));
    }
}
