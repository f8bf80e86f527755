//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the YAML file passed
//! with `--config`, `ADDRESS_BOOK__*` environment variables, CLI flags.

use std::net::SocketAddr;
use std::path::Path;

use address_book::config::AddressBookConfig;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use url::Url;

pub const ENV_PREFIX: &str = "ADDRESS_BOOK__";
pub const REDACTED: &str = "***REDACTED***";
pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub address_book: AddressBookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Requests running longer than this are answered with 504.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            request_timeout_secs: default_request_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerConfig {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Fails when `bind_addr` is not a `host:port` socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_dsn")]
    pub dsn: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Command-line values that override the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

fn default_dsn() -> String {
    "sqlite://address_book.db?mode=rwc".to_owned()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be parsed or a value has the wrong shape.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to parse configuration (yaml file or ADDRESS_BOOK__ environment)")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that parse but cannot produce a working server.
    ///
    /// # Errors
    ///
    /// Names the first offending key.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        let geocoder = &self.address_book.geocoder;
        Url::parse(&geocoder.base_url)
            .with_context(|| format!("invalid geocoder base_url '{}'", geocoder.base_url))?;
        if geocoder.timeout_secs == 0 {
            anyhow::bail!("address_book.geocoder.timeout_secs must be greater than zero");
        }
        if self.address_book.default_page_size == 0 {
            anyhow::bail!("address_book.default_page_size must be greater than zero");
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr = with_port(&self.server.bind_addr, port);
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if cli.mock {
            MOCK_DSN.clone_into(&mut self.database.dsn);
            self.database.max_connections = 1;
        }
    }

    /// Effective configuration as YAML, with secrets redacted.
    ///
    /// # Errors
    ///
    /// Fails when YAML serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        let redacted = self.redacted();
        serde_saphyr::to_string(&redacted).context("failed to serialize configuration to YAML")
    }

    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.address_book.geocoder.api_key.is_empty() {
            REDACTED.clone_into(&mut copy.address_book.geocoder.api_key);
        }
        copy.database.dsn = redact_dsn_password(&copy.database.dsn);
        copy
    }
}

fn with_port(bind_addr: &str, port: u16) -> String {
    match bind_addr.rsplit_once(':') {
        Some((host, _)) => format!("{host}:{port}"),
        None => format!("{bind_addr}:{port}"),
    }
}

/// Replace the password portion of a DSN with [`REDACTED`].
///
/// DSNs without credentials, or that fail to parse as URLs, are returned as is.
#[must_use]
pub fn redact_dsn_password(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_owned();
    }
    match Url::parse(dsn) {
        Ok(mut url) if url.password().is_some() => {
            if url.set_password(Some(REDACTED)).is_ok() {
                url.to_string()
            } else {
                dsn.to_owned()
            }
        }
        _ => dsn.to_owned(),
    }
}
