//! Configuration module for sample-app.

use rand::{distr::Alphanumeric, Rng};
use serde::Deserialize;
use std::path::Path;

use crate::{AppError, Result};

/// Environment variable that overrides the session secret key.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Length of a generated secret key.
const GENERATED_SECRET_LENGTH: usize = 64;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Debug mode (forces debug-level logging).
    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional path to a log file. Console only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// SameSite attribute for session cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    Strict,
    #[default]
    Lax,
    None,
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret key. Empty means "take it from the environment or generate one".
    #[serde(default)]
    pub secret_key: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Only send the cookie over HTTPS.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// Hide the cookie from scripts.
    #[serde(default = "default_true")]
    pub http_only: bool,
    /// SameSite attribute.
    #[serde(default)]
    pub same_site: SameSitePolicy,
    /// Cookie lifetime in seconds.
    #[serde(default = "default_session_lifetime")]
    pub lifetime_secs: u64,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_true() -> bool {
    true
}

fn default_session_lifetime() -> u64 {
    3600 // 1 hour
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            cookie_name: default_cookie_name(),
            secure: true,
            http_only: true,
            same_site: SameSitePolicy::default(),
            lifetime_secs: default_session_lifetime(),
        }
    }
}

/// Redirect allow-list configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectConfig {
    /// Network locations (`host` or `host:port`) that `/redirect` may target.
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,
}

fn default_allowed_hosts() -> Vec<String> {
    vec![
        "localhost".to_string(),
        "127.0.0.1".to_string(),
        "trusted-domain.com".to_string(),
    ]
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: default_allowed_hosts(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Redirect allow-list.
    #[serde(default)]
    pub redirect: RedirectConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(AppError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration, using the defaults only when the file does not exist.
    ///
    /// The flag is `false` when the defaults were used. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        match Self::load(path) {
            Ok(config) => Ok((config, true)),
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), false))
            }
            Err(e) => Err(e),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AppError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SECRET_KEY`: Override the session secret key
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var(SECRET_KEY_ENV) {
            if !secret.is_empty() {
                self.session.secret_key = secret;
            }
        }
    }

    /// Fill in a random secret key if none was configured.
    ///
    /// Returns `true` when a key was generated. A generated key lives only as
    /// long as the process, so sessions do not survive a restart.
    pub fn ensure_secret_key(&mut self) -> bool {
        if !self.session.secret_key.is_empty() {
            return false;
        }
        self.session.secret_key = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_SECRET_LENGTH)
            .map(char::from)
            .collect();
        true
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the session lifetime is zero
    /// - `same_site = "none"` is used without `secure`
    /// - an allowed redirect host is blank
    pub fn validate(&self) -> Result<()> {
        if self.session.lifetime_secs == 0 {
            return Err(AppError::Validation(
                "session.lifetime_secs must be greater than zero".to_string(),
            ));
        }
        if self.session.same_site == SameSitePolicy::None && !self.session.secure {
            return Err(AppError::Validation(
                "session.same_site = \"none\" requires session.secure = true".to_string(),
            ));
        }
        if self
            .redirect
            .allowed_hosts
            .iter()
            .any(|h| h.trim().is_empty())
        {
            return Err(AppError::Validation(
                "redirect.allowed_hosts must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.debug);

        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());

        assert!(config.session.secret_key.is_empty());
        assert_eq!(config.session.cookie_name, "session");
        assert!(config.session.secure);
        assert!(config.session.http_only);
        assert_eq!(config.session.same_site, SameSitePolicy::Lax);
        assert_eq!(config.session.lifetime_secs, 3600);

        assert_eq!(
            config.redirect.allowed_hosts,
            vec!["localhost", "127.0.0.1", "trusted-domain.com"]
        );
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
debug = true

[logging]
level = "debug"
file = "logs/app.log"

[session]
secret_key = "configured"
cookie_name = "sid"
secure = false
http_only = true
same_site = "strict"
lifetime_secs = 600

[redirect]
allowed_hosts = ["example.org", "example.org:8443"]
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(config.server.debug);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some("logs/app.log"));
        assert_eq!(config.session.secret_key, "configured");
        assert_eq!(config.session.cookie_name, "sid");
        assert!(!config.session.secure);
        assert_eq!(config.session.same_site, SameSitePolicy::Strict);
        assert_eq!(config.session.lifetime_secs, 600);
        assert_eq!(
            config.redirect.allowed_hosts,
            vec!["example.org", "example.org:8443"]
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 3000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.session.lifetime_secs, 3600);
        assert_eq!(config.redirect.allowed_hosts.len(), 3);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_unknown_same_site() {
        let toml = r#"
[session]
same_site = "sometimes"
"#;
        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4321").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 4321);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, found) = Config::load_or_default(dir.path().join("config.toml")).unwrap();
        assert!(!found);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9090").unwrap();

        let (config, found) = Config::load_or_default(file.path()).unwrap();
        assert!(found);
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_load_or_default_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let result = Config::load_or_default(file.path());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_apply_env_overrides_secret_key() {
        let original = std::env::var(SECRET_KEY_ENV).ok();

        // Empty values are ignored
        std::env::set_var(SECRET_KEY_ENV, "");
        let mut config = Config::default();
        config.session.secret_key = "from-file".to_string();
        config.apply_env_overrides();
        assert_eq!(config.session.secret_key, "from-file");

        std::env::set_var(SECRET_KEY_ENV, "from-env");
        config.apply_env_overrides();
        assert_eq!(config.session.secret_key, "from-env");

        if let Some(val) = original {
            std::env::set_var(SECRET_KEY_ENV, val);
        } else {
            std::env::remove_var(SECRET_KEY_ENV);
        }
    }

    #[test]
    fn test_ensure_secret_key_generates() {
        let mut config = Config::default();
        assert!(config.ensure_secret_key());
        assert_eq!(config.session.secret_key.len(), GENERATED_SECRET_LENGTH);
        assert!(config
            .session
            .secret_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));

        // Already set: left alone
        let key = config.session.secret_key.clone();
        assert!(!config.ensure_secret_key());
        assert_eq!(config.session.secret_key, key);
    }

    #[test]
    fn test_ensure_secret_key_differs_per_config() {
        let mut a = Config::default();
        let mut b = Config::default();
        a.ensure_secret_key();
        b.ensure_secret_key();
        assert_ne!(a.session.secret_key, b.session.secret_key);
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_lifetime() {
        let mut config = Config::default();
        config.session.lifetime_secs = 0;

        let result = config.validate();
        assert!(result.is_err());
        if let Err(AppError::Validation(msg)) = result {
            assert!(msg.contains("lifetime_secs"));
        }
    }

    #[test]
    fn test_validate_same_site_none_requires_secure() {
        let mut config = Config::default();
        config.session.same_site = SameSitePolicy::None;
        config.session.secure = false;
        assert!(config.validate().is_err());

        config.session.secure = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_blank_redirect_host() {
        let mut config = Config::default();
        config.redirect.allowed_hosts.push("  ".to_string());
        assert!(config.validate().is_err());
    }
}
