//! Configuration loading and validation for feddocs.
//!
//! Loads configuration from an optional `feddocs.toml` with environment
//! variable overrides (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`,
//! `DB_NAME`, `OLLAMA_HOST`, `FEDDOCS_MODEL`). Environment variables take
//! priority over the file; the file takes priority over built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `feddocs.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Model-serving configuration
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Redact a secret string for Debug output.
fn redact(s: &str) -> &'static str {
    if s.is_empty() { "<empty>" } else { "[REDACTED]" }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database", &self.database)
            .field("ollama", &self.ollama)
            .field("gateway", &self.gateway)
            .finish()
    }
}

/// Document store connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub name: String,
}

fn default_db_host() -> String {
    "localhost".into()
}
fn default_db_port() -> u16 {
    3306
}
fn default_db_user() -> String {
    "root".into()
}
fn default_db_name() -> String {
    "federal_documents".into()
}

impl DatabaseConfig {
    /// Render the connection URL for the store's pool.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: String::new(),
            name: default_db_name(),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .field("name", &self.name)
            .finish()
    }
}

/// Model-serving settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model identifier passed on every chat call
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "qwen2:0.5b".into()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_model(),
        }
    }
}

/// HTTP gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_host")]
    pub host: String,

    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}
fn default_gateway_port() -> u16 {
    8000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            ollama: OllamaConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path with environment overrides.
    ///
    /// The path is `$FEDDOCS_CONFIG` when set, `feddocs.toml` in the
    /// working directory otherwise. A missing file is not an error — the
    /// defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("FEDDOCS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("feddocs.toml"));

        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Apply environment variable overrides (highest priority).
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("DB_HOST") {
            self.database.host = host;
        }
        if let Ok(port) = std::env::var("DB_PORT") {
            if let Ok(port) = port.parse() {
                self.database.port = port;
            } else {
                tracing::warn!(value = %port, "Ignoring unparseable DB_PORT");
            }
        }
        if let Ok(user) = std::env::var("DB_USER") {
            self.database.user = user;
        }
        if let Ok(password) = std::env::var("DB_PASSWORD") {
            self.database.password = password;
        }
        if let Ok(name) = std::env::var("DB_NAME") {
            self.database.name = name;
        }
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            self.ollama.host = host;
        }
        if let Ok(model) = std::env::var("FEDDOCS_MODEL") {
            self.ollama.model = model;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ollama.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "ollama.model must not be empty".into(),
            ));
        }

        if self.gateway.port == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.port must not be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.ollama.model, "qwen2:0.5b");
        assert_eq!(config.gateway.port, 8000);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.database.name, config.database.name);
        assert_eq!(parsed.gateway.port, config.gateway.port);
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/feddocs.toml")).unwrap();
        assert_eq!(config.ollama.model, "qwen2:0.5b");
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nhost = \"db.internal\"\npassword = \"s3cret\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.ollama.model, "qwen2:0.5b");
    }

    #[test]
    fn invalid_toml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database = \"not a table\"").unwrap();

        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn empty_model_rejected() {
        let mut config = AppConfig::default();
        config.ollama.model = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_gateway_port_rejected() {
        let mut config = AppConfig::default();
        config.gateway.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn database_url_rendering() {
        let config = DatabaseConfig {
            host: "db.internal".into(),
            port: 3307,
            user: "fed".into(),
            password: "pw".into(),
            name: "docs".into(),
        };
        assert_eq!(config.url(), "mysql://fed:pw@db.internal:3307/docs");
    }

    #[test]
    fn debug_redacts_password() {
        let mut config = AppConfig::default();
        config.database.password = "hunter2".into();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
