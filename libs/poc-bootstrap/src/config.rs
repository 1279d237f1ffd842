//! Layered application configuration.
//!
//! Precedence, lowest first:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `APP__` (`__` separates sections,
//!    e.g. `APP__SERVER__BIND_ADDR=0.0.0.0:8080`)
//! 4. CLI overrides (`--port`, `-v`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

pub const ENV_PREFIX: &str = "APP__";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub app: AppInfo,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// `host:port` to listen on.
    pub bind_addr: String,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Requests running longer than this are answered with 408.
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level (`error` .. `trace`, or `off`); `RUST_LOG` takes
    /// precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Identity reported by the service (e.g. in `/health`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "jenkins-poc".to_owned(),
            version: "1.0.0".to_owned(),
        }
    }
}

/// Command-line values that feed into the configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` environment
    /// variables, and validate the result.
    ///
    /// # Errors
    /// Returns an error when the file is missing, a layer cannot be parsed, or
    /// the merged configuration is invalid.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file_exact(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.bind_addr = with_port(&self.server.bind_addr, port);
        }

        let level = match args.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.server.bind_addr.trim().is_empty(),
            "server.bind_addr must not be empty"
        );
        ensure!(
            self.server.body_limit_bytes > 0,
            "server.body_limit_bytes must be greater than zero"
        );
        ensure!(
            self.server.request_timeout_ms > 0,
            "server.request_timeout_ms must be greater than zero"
        );
        self.logging
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid logging.level '{}'", self.logging.level))?;
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize configuration")
    }
}

/// Replace (or append) the port of a `host:port` address.
fn with_port(bind_addr: &str, port: u16) -> String {
    // Bracketed IPv6 hosts contain colons of their own.
    let host = match bind_addr.rsplit_once(':') {
        Some((host, tail)) if !tail.contains(']') => host,
        _ => bind_addr,
    };
    format!("{host}:{port}")
}
