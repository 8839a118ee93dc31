//! Configuration loading
//!
//! Settings are layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file: explicit path, else `STACKLESS_CONFIG_PATH`, else `stackless.toml`
//!    in the working directory if it exists
//! 3. Environment variables such as `STACKLESS__TRAMPOLINE__MAX_DEPTH`
//! 4. Builder overrides (CLI flags)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::trampoline::TrampolineConfig;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "STACKLESS_CONFIG_PATH";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "stackless.toml";

const ENV_PREFIX: &str = "STACKLESS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trampoline: TrampolineConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(source, ::config::FileFormat::Toml))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Render the configuration as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }
}

/// Builder for loading `Config` with explicit overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    max_depth: Option<usize>,
    strict: Option<bool>,
    read_env: Option<bool>,
}

impl ConfigBuilder {
    /// Set the config file path (overrides default search)
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Override the call stack depth limit
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        if max_depth.is_some() {
            self.max_depth = max_depth;
        }
        self
    }

    /// Override protocol strictness
    pub fn strict(mut self, strict: Option<bool>) -> Self {
        if strict.is_some() {
            self.strict = strict;
        }
        self
    }

    /// Whether to read the config path and settings from the environment
    /// (default: true)
    pub fn read_env(mut self, read_env: bool) -> Self {
        self.read_env = Some(read_env);
        self
    }

    pub fn build(self) -> Result<Config> {
        let read_env = self.read_env.unwrap_or(true);
        let mut builder = ::config::Config::builder();

        if let Some((path, required)) = self.resolve_path(read_env) {
            builder = builder.add_source(::config::File::from(path).required(required));
        }

        if read_env {
            builder = builder.add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let mut config: Config = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        if let Some(max_depth) = self.max_depth {
            config.trampoline.max_depth = Some(max_depth);
        }
        if let Some(strict) = self.strict {
            config.trampoline.strict = strict;
        }

        Ok(config)
    }

    /// Config file to read and whether it must exist
    fn resolve_path(&self, read_env: bool) -> Option<(PathBuf, bool)> {
        if let Some(path) = &self.config_path {
            return Some((path.clone(), true));
        }
        if read_env {
            if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
                return Some((PathBuf::from(path), true));
            }
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some((default, false))
    }
}
