//! Application configuration
//!
//! Loaded from a YAML file; every field has a default so an empty file (or
//! no file at all) gives a working setup.
//!
//! ```yaml
//! list:
//!   page_len: 20
//! server:
//!   host: 127.0.0.1
//!   port: 8080
//! records: data/records.json
//! log_level: INFO
//! ```

use crate::error::{Error, Result};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// List view settings
    #[serde(default)]
    pub list: ListConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// JSON file with the records to serve
    #[serde(default)]
    pub records: Option<PathBuf>,

    /// Default log level (overridden by `RUST_LOG`)
    #[serde(default)]
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Parse configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|e| {
            Error::invalid_config("server.host", format!("{}: {e}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

// ============================================================================
// List View
// ============================================================================

/// List view settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per page; zero or negative falls back to one row per page
    #[serde(default = "default_page_len")]
    pub page_len: i64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_len: default_page_len(),
        }
    }
}

fn default_page_len() -> i64 {
    20
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.list.page_len, 20);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.records.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml_str("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let config = AppConfig::from_yaml_str(
            r"
list:
  page_len: 5
server:
  host: 0.0.0.0
  port: 9000
records: data/records.json
log_level: DEBUG
",
        )
        .unwrap();

        assert_eq!(config.list.page_len, 5);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.records, Some(PathBuf::from("data/records.json")));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 3000\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.list.page_len, 20);
    }

    #[test]
    fn test_non_positive_page_len_accepted() {
        let config = AppConfig::from_yaml_str("list:\n  page_len: -5\n").unwrap();
        assert_eq!(config.list.page_len, -5);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = AppConfig::from_yaml_str("list: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));

        let err = AppConfig::from_yaml_str("server:\n  port: not-a-port\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig::default();
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );

        let mut config = AppConfig::default();
        config.server.host = "localhost:1".to_string();
        let err = config.socket_addr().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "server.host"));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "list:\n  page_len: 7").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.list.page_len, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/recon-view.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
