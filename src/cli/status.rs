use crate::bridge;
use crate::cli::output;
use crate::config::Config;
use crate::error::AppError;

pub async fn handle(config: &Config, verbose: bool) -> Result<(), AppError> {
    let bridge = bridge::open_session(config, verbose).await?;
    let lights = bridge.get_all_lights().await?;
    output::print_status(&lights);
    Ok(())
}
