// src/config.rs

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::crtsh::DEFAULT_ENDPOINT;
use crate::retry::RetryPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct CrtShConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,  // None = HTTP client default
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for CrtShConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl CrtShConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
    #[serde(default = "default_pace_delay")]
    pub pace_delay_secs: u64,
}

fn default_retries() -> u32 { 1 }
fn default_retry_delay() -> u64 { 20 }
fn default_pace_delay() -> u64 { 1 }

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_secs: default_retry_delay(),
            pace_delay_secs: default_pace_delay(),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retries,
            Duration::from_secs(self.retry_delay_secs),
            Duration::from_secs(self.pace_delay_secs),
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub crtsh: CrtShConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    }

    /// Reject settings that would make every lookup fail, checked after CLI overrides
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.crtsh.timeout_secs == Some(0) {
            anyhow::bail!("crt.sh timeout must be greater than 0");
        }

        url::Url::parse(&self.crtsh.endpoint)
            .with_context(|| format!("Invalid crt.sh endpoint: {}", self.crtsh.endpoint))?;

        self.log_filter()?;

        Ok(())
    }

    /// Log filter for the configured level; unparseable levels are an error
    pub fn log_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid log level: {:?}", self.logging.level))
    }

    /// Load `path` if given, otherwise use built-in defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
