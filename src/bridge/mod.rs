pub mod client;

pub use client::HueBridge;

use crate::config::Config;
use crate::error::AppError;

/// Connect to the configured bridge and authenticate with the stored token.
pub async fn open_session(config: &Config, verbose: bool) -> Result<HueBridge, AppError> {
    let mut bridge = HueBridge::connect(&config.bridge_ip, verbose).await?;
    bridge.authenticate(&config.bridge_token).await?;
    Ok(bridge)
}
