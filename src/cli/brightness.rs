use crate::bridge;
use crate::cli::output;
use crate::config::Config;
use crate::error::AppError;
use crate::resolve;

pub async fn handle(
    percent: u8,
    targets: &[String],
    config: &Config,
    verbose: bool,
) -> Result<(), AppError> {
    let bridge = bridge::open_session(config, verbose).await?;
    let all_lights = bridge.get_all_lights().await?;

    for light in &resolve::resolve_lights(targets, &all_lights) {
        if let Err(err) = bridge.set_brightness(light, percent).await {
            output::print_light_error(&light.name, "change the brightness of", &err);
        }
    }

    Ok(())
}
