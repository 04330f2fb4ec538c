//! Configuration file loading.
//!
//! Search order: the explicit `--config` path, then `terrace.toml` in the working directory,
//! then built-in defaults.

use std::fs;
use std::path::Path;

use terrace::LayoutConfig;

use crate::error::{CliError, Result};

pub const LOCAL_CONFIG: &str = "terrace.toml";

pub fn load_config(explicit_path: Option<&Path>) -> Result<LayoutConfig> {
    if let Some(path) = explicit_path {
        tracing::info!(path = %path.display(), "loading configuration from explicit path");
        return load_config_file(path);
    }

    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        tracing::info!(path = %local.display(), "loading configuration from local path");
        return load_config_file(local);
    }

    tracing::debug!("no configuration file found, using defaults");
    Ok(LayoutConfig::default())
}

fn load_config_file(path: &Path) -> Result<LayoutConfig> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}
