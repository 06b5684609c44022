use crate::bridge;
use crate::cli::output;
use crate::config::Config;
use crate::error::AppError;
use crate::models::color::ColorTable;
use crate::resolve;

pub async fn handle(
    color_name: &str,
    targets: &[String],
    table: &ColorTable,
    config: &Config,
    verbose: bool,
) -> Result<(), AppError> {
    // An unrecognized color name is a documented no-op: no bridge call
    // is made, so the lookup happens before the session is opened.
    let Some(color) = table.get(color_name) else {
        return Ok(());
    };

    let bridge = bridge::open_session(config, verbose).await?;
    let all_lights = bridge.get_all_lights().await?;

    for light in &resolve::resolve_lights(targets, &all_lights) {
        if let Err(err) = bridge.set_color(light, color).await {
            output::print_light_error(&light.name, "change the color of", &err);
        }
    }

    Ok(())
}
