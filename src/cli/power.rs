use crate::bridge;
use crate::cli::output;
use crate::config::Config;
use crate::error::AppError;
use crate::resolve;

#[derive(Clone, Copy)]
pub enum PowerAction {
    On,
    Off,
}

pub async fn handle(
    action: PowerAction,
    targets: &[String],
    config: &Config,
    verbose: bool,
) -> Result<(), AppError> {
    let bridge = bridge::open_session(config, verbose).await?;
    let all_lights = bridge.get_all_lights().await?;

    for light in &resolve::resolve_lights(targets, &all_lights) {
        let result = match action {
            PowerAction::On => bridge.power_on(light).await,
            PowerAction::Off => bridge.power_off(light).await,
        };
        if let Err(err) = result {
            let verb = match action {
                PowerAction::On => "switch on",
                PowerAction::Off => "switch off",
            };
            output::print_light_error(&light.name, verb, &err);
        }
    }

    Ok(())
}
