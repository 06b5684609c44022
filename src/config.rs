use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::output::print_warning;
use crate::error::AppError;

const TEMPLATE: &str = "BridgeIP = \"\"\nBridgeToken = \"\"\n";

/// Bridge credentials read from `$HOME/.config/huecli`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(rename = "BridgeIP", default)]
    pub bridge_ip: String,

    #[serde(rename = "BridgeToken", default)]
    pub bridge_token: String,
}

pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("huecli")
}

/// Load the credential file, creating an empty template on first run.
///
/// Never aborts: any failure is reported and an empty `Config` is returned,
/// so the bridge connection step downstream fails with its own error.
pub fn load(path: &Path) -> Config {
    match try_load(path) {
        Ok(config) => config,
        Err(err) => {
            print_warning(&format!("Could not read configuration file: {}", err));
            Config::default()
        }
    }
}

fn try_load(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        print_warning("Configuration file does not currently exist. Creating a template.");
        write_template(path)?;
    }

    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| AppError::Config(err.to_string()))
}

fn write_template(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, TEMPLATE)?;
    Ok(())
}
