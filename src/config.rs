//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//! The configuration is loaded once at startup, validated, and shared
//! read-only with every handler.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Origin of the backend API (e.g., "http://localhost:8000")
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    /// Create config pointing at the given backend origin
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Default::default()
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie the backend sets on login
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_cookie_name() -> String {
    "access".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development
    #[default]
    Pretty,
    /// One JSON object per line for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format: {}", other))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Logs nothing; call [`ConfigSource::log`] once the subscriber is up.
    pub fn load_default() -> (Self, ConfigSource) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("creator-insights").join("config.toml")),
            Some(PathBuf::from("/etc/creator-insights/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first of `paths` that exists and parses, else env only
    ///
    /// Files that exist but fail to load are skipped and reported in the
    /// returned [`ConfigSource`].
    pub fn load_first(paths: &[PathBuf]) -> (Self, ConfigSource) {
        let mut source = ConfigSource::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    source.loaded = Some(path.clone());
                    return (config, source);
                }
                Err(e) => source.skipped.push((path.clone(), e)),
            }
        }

        (Self::from_env(), source)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// `INSIGHTS_API_BASE` takes precedence over the legacy
    /// `NEXT_PUBLIC_API_BASE`. Unparseable numeric values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("INSIGHTS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INSIGHTS_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }

        if let Some(base) = lookup("INSIGHTS_API_BASE").or_else(|| lookup("NEXT_PUBLIC_API_BASE")) {
            if !base.trim().is_empty() {
                self.backend.api_base = base;
            }
        }
        if let Some(secs) = lookup("INSIGHTS_REQUEST_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            self.backend.request_timeout_secs = secs;
        }

        if let Some(name) = lookup("INSIGHTS_COOKIE_NAME") {
            self.session.cookie_name = name;
        }

        if let Some(level) = lookup("INSIGHTS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("INSIGHTS_LOG_FORMAT").and_then(|f| f.parse::<LogFormat>().ok()) {
            self.logging.format = format;
        }
    }

    /// Check the configuration is usable before starting the server
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.backend.api_base).map_err(|e| {
            ConfigError::Invalid(format!("backend.api_base {:?}: {}", self.backend.api_base, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "backend.api_base must use http or https, got {:?}",
                url.scheme()
            )));
        }

        if self.backend.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "backend.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "session.cookie_name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where [`Config::load_default`] found its configuration
#[derive(Debug, Default)]
pub struct ConfigSource {
    /// File the config was read from; `None` means defaults plus env
    pub loaded: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl ConfigSource {
    /// A config file named explicitly on the command line
    pub fn explicit(path: &Path) -> Self {
        Self {
            loaded: Some(path.to_path_buf()),
            skipped: Vec::new(),
        }
    }

    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.loaded {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Creator Insights Configuration
#
# Environment variables override these settings:
# - INSIGHTS_HOST
# - INSIGHTS_PORT
# - INSIGHTS_API_BASE (or NEXT_PUBLIC_API_BASE)
# - INSIGHTS_REQUEST_TIMEOUT_SECS
# - INSIGHTS_COOKIE_NAME
# - INSIGHTS_LOG_LEVEL
# - INSIGHTS_LOG_FORMAT

[server]
# Web server host
host = "0.0.0.0"

# Web server port
port = 3000

[backend]
# Origin of the backend API
api_base = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Cookie set by the backend on login and cleared on logout
cookie_name = "access"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.backend.api_base, "http://localhost:8000");
        assert_eq!(config.session.cookie_name, "access");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\napi_base = \"https://api.example.com\"").unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.api_base, "https://api.example.com");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/creator-insights.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_skips_broken_file() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[server\nport = ").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[server]\nport = 4100").unwrap();

        let paths = vec![
            PathBuf::from("/nonexistent/creator-insights.toml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let (config, source) = Config::load_first(&paths);

        assert_eq!(source.loaded.as_deref(), Some(good.path()));
        assert_eq!(source.skipped.len(), 1);
        assert_eq!(source.skipped[0].0, broken.path());
        assert!(matches!(source.skipped[0].1, ConfigError::Parse { .. }));
        assert_eq!(config.server.port, 4100);
    }

    #[test]
    fn test_load_first_falls_back_to_env() {
        let paths = vec![PathBuf::from("/nonexistent/creator-insights.toml")];
        let (_, source) = Config::load_first(&paths);

        assert!(source.loaded.is_none());
        assert!(source.skipped.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("INSIGHTS_PORT", "8080"),
            ("INSIGHTS_API_BASE", "http://backend:9000"),
            ("INSIGHTS_LOG_FORMAT", "JSON"),
            ("INSIGHTS_COOKIE_NAME", "sid"),
        ]));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.api_base, "http://backend:9000");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.session.cookie_name, "sid");
    }

    #[test]
    fn test_legacy_api_base_variable() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("NEXT_PUBLIC_API_BASE", "http://legacy:8000")]));
        assert_eq!(config.backend.api_base, "http://legacy:8000");

        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("NEXT_PUBLIC_API_BASE", "http://legacy:8000"),
            ("INSIGHTS_API_BASE", "http://current:8000"),
        ]));
        assert_eq!(config.backend.api_base, "http://current:8000");
    }

    #[test]
    fn test_empty_api_base_keeps_default() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("NEXT_PUBLIC_API_BASE", "")]));
        assert_eq!(config.backend.api_base, "http://localhost:8000");
    }

    #[test]
    fn test_bad_port_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("INSIGHTS_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_api_base() {
        let mut config = Config::default();
        config.backend.api_base = "not a url".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.backend.api_base = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_cookie_name() {
        let mut config = Config::default();
        config.session.cookie_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.backend.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
