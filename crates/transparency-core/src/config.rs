//! Configuration management for the transparency admin console

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Name of the optional configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "transparency-admin";

/// Prefix for environment overrides, e.g. `TRANSPARENCY__API__BASE_URL`
pub const ENV_PREFIX: &str = "TRANSPARENCY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    #[validate(nested)]
    pub api: ApiConfig,

    /// Console presentation configuration
    #[serde(default)]
    #[validate(nested)]
    pub console: ConsoleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL of the REST backend, including any version prefix
    #[serde(default = "default_base_url")]
    #[validate(url(message = "must be an absolute URL"))]
    pub base_url: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 300, message = "must be between 1 and 300"))]
    pub timeout_secs: u64,

    /// User agent reported to the backend
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Console presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsoleConfig {
    /// Rows per page requested from list endpoints
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 200, message = "must be between 1 and 200"))]
    pub per_page: u32,

    /// Output format for list and detail commands
    #[serde(default)]
    pub output: OutputFormat,

    /// Colorize badges
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Output format for console commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// Raw JSON records
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("transparency-admin/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_per_page() -> u32 {
    20
}

const fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            output: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an optional file and the environment
    ///
    /// When `path` is `None`, `transparency-admin.{toml,yaml,json}` in the
    /// working directory is used if present. Environment variables take
    /// precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a value cannot be parsed,
    /// or the resulting configuration fails validation.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path).required(true)
            }
            None => {
                debug!(name = DEFAULT_CONFIG_FILE, "Looking for optional configuration file");
                config::File::with_name(DEFAULT_CONFIG_FILE).required(false)
            }
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(
            base_url = %config.api.base_url,
            per_page = config.console.per_page,
            "Configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert!(config.api.token.is_none());
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.user_agent.starts_with("transparency-admin/"));

        assert_eq!(config.console.per_page, 20);
        assert_eq!(config.console.output, OutputFormat::Table);
        assert!(config.console.color);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://admin.example.com/api/v1"
token = "secret"

[console]
per_page = 50
output = "json"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.api.base_url, "https://admin.example.com/api/v1");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.console.per_page, 50);
        assert_eq!(config.console.output, OutputFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_out_of_range_per_page() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[console]\nper_page = 0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        match err {
            crate::Error::Validation { field, .. } => assert_eq!(field, "console"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_relative_base_url() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"admin/api\"").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(matches!(
            Config::load(Some(&missing)),
            Err(crate::Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_load_logs_the_file_in_use() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[console]\nper_page = 25").unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load(Some(file.path()))
        })
        .unwrap();

        assert_eq!(config.console.per_page, 25);
        let output = logs.contents();
        assert!(output.contains("Loading configuration file"));
        assert!(output.contains(&file.path().display().to_string()));
        assert!(output.contains("Configuration loaded"));
    }

    #[test]
    fn test_output_format_serde() {
        let json: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(json, OutputFormat::Json);
        assert_eq!(serde_json::to_string(&OutputFormat::Table).unwrap(), "\"table\"");
    }
}
