//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, YAML file, `APP__*`
//! environment variables (`__` separates nesting levels), CLI overrides.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Requests running longer than this are answered with 504.
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Cross-origin policy. The default is fully permissive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: vec!["GET".to_owned(), "POST".to_owned(), "OPTIONS".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: false,
            max_age_seconds: 0,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset, e.g. `info` or `sentiment=debug`.
    pub console_level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Per-module section: `modules.<name>.config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleEntry {
    #[serde(default)]
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub modules: BTreeMap<String, ModuleEntry>,
}

/// Command-line values that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

impl AppConfig {
    /// Resolve defaults, the optional YAML file and `APP__*` environment variables.
    ///
    /// # Errors
    /// Fails if an explicitly given file does not exist, cannot be parsed, or the
    /// merged result does not validate.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let cfg: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| match path {
                Some(p) => format!("failed to parse config file {}", p.display()),
                None => "failed to parse configuration".to_owned(),
            })?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `--port` and `-v` on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.bind_addr = replace_port(&self.server.bind_addr, port);
        }

        match args.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.console_level),
            2 => "debug".clone_into(&mut self.logging.console_level),
            _ => "trace".clone_into(&mut self.logging.console_level),
        }
    }

    /// # Errors
    /// Fails on settings that cannot produce a working server.
    pub fn validate(&self) -> Result<()> {
        let cors = &self.cors;
        if cors.enabled && cors.allow_credentials && cors.allowed_origins.iter().any(|o| o == "*")
        {
            bail!(
                "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
                 allow_credentials=true"
            );
        }
        if self.server.request_timeout_secs == 0 {
            bail!("server.request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a valid socket address.
    pub fn bind_socket_addr(&self) -> Result<SocketAddr> {
        let bind_addr = &self.server.bind_addr;
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Raw `modules.<name>.config` value, if the module is configured.
    #[must_use]
    pub fn module_config(&self, name: &str) -> Option<&serde_json::Value> {
        self.modules.get(name).map(|m| &m.config)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to serialize config to YAML")
    }
}

/// Swap the port of `host:port`; IPv6 literals keep their brackets.
fn replace_port(bind_addr: &str, port: u16) -> String {
    match bind_addr.rsplit_once(':') {
        Some((host, _)) if !host.is_empty() => format!("{host}:{port}"),
        _ => format!("0.0.0.0:{port}"),
    }
}
