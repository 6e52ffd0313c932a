//! Relational store connection settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// URL schemes accepted for a remote libSQL server.
const REMOTE_SCHEMES: [&str; 5] = ["libsql://", "http://", "https://", "ws://", "wss://"];

fn default_path() -> String {
    ".projects/projects.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. Used when `url` is empty.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote server URL (host, port and database name), e.g. `libsql://projects.example.com:8080`.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote server.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

/// Where the store lives, resolved from [`DatabaseConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    Local(PathBuf),
    Remote { url: String, auth_token: String },
}

impl DatabaseConfig {
    /// Check if a remote server is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// Resolve and validate the connection target.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported URL scheme or an
    /// empty local path, and `ConfigError::NotConfigured` when a remote URL has
    /// no auth token.
    pub fn target(&self) -> Result<ConnectionTarget, ConfigError> {
        if self.is_remote() {
            if !REMOTE_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme)) {
                return Err(ConfigError::InvalidValue {
                    field: "database.url".into(),
                    reason: format!(
                        "'{}' must start with one of {}",
                        self.url,
                        REMOTE_SCHEMES.join(", ")
                    ),
                });
            }
            if self.auth_token.is_empty() {
                return Err(ConfigError::NotConfigured {
                    section: "database.auth_token".into(),
                });
            }
            return Ok(ConnectionTarget::Remote {
                url: self.url.clone(),
                auth_token: self.auth_token.clone(),
            });
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "path cannot be empty".into(),
            });
        }
        Ok(ConnectionTarget::Local(PathBuf::from(&self.path)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert!(!config.is_remote());
        assert_eq!(
            config.target().unwrap(),
            ConnectionTarget::Local(PathBuf::from(".projects/projects.db"))
        );
    }

    #[rstest]
    #[case("libsql://projects.example.com")]
    #[case("https://projects.example.com:8443")]
    #[case("ws://localhost:8080")]
    fn remote_with_token_is_accepted(#[case] url: &str) {
        let config = DatabaseConfig {
            url: url.into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert_eq!(
            config.target().unwrap(),
            ConnectionTarget::Remote {
                url: url.into(),
                auth_token: "token123".into(),
            }
        );
    }

    #[test]
    fn remote_without_token_is_not_configured() {
        let config = DatabaseConfig {
            url: "libsql://projects.example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.target(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[rstest]
    #[case("mysql://localhost:3306/projects")]
    #[case("localhost:8080")]
    fn unsupported_scheme_is_rejected(#[case] url: &str) {
        let config = DatabaseConfig {
            url: url.into(),
            auth_token: "token".into(),
            ..Default::default()
        };
        let err = config.target().unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn empty_local_path_is_rejected() {
        let config = DatabaseConfig {
            path: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.target(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
