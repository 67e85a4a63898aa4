use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::logging;

/// Prefix for environment variable overrides, e.g. `RDL_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "RDL";

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// The log level to use, this is a tracing env filter
    pub level: String,

    /// What logging mode we should use
    pub mode: logging::Mode,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            mode: logging::Mode::Default,
        }
    }
}

/// Parses a config by layering an optional config file and `RDL_` prefixed
/// environment variables over the defaults of `C`.
///
/// Returns the parsed config and the path of the config file that was
/// actually loaded, if any. When `config_file` has no extension every format
/// supported by the loader is tried.
pub fn parse<C: DeserializeOwned + Serialize + Default>(
    enable_env: bool,
    config_file: Option<String>,
) -> Result<(C, Option<String>)> {
    let mut builder = config::Config::builder().add_source(
        config::Config::try_from(&C::default()).context("failed to collect config defaults")?,
    );

    let config_file = config_file.as_deref().and_then(locate_file);

    if let Some(file) = &config_file {
        builder = builder.add_source(config::File::with_name(file));
    }

    if enable_env {
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
    }

    let config = builder
        .build()
        .context("failed to load config")?
        .try_deserialize()
        .context("failed to deserialize config")?;

    Ok((config, config_file))
}

fn locate_file(file: &str) -> Option<String> {
    let path = Path::new(file);
    if path.extension().is_some() {
        return path.exists().then(|| file.to_string());
    }

    ["toml", "json", "yaml", "yml"].iter().find_map(|ext| {
        let candidate = path.with_extension(ext);
        candidate
            .exists()
            .then(|| candidate.display().to_string())
    })
}
