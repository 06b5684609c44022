pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod resolve;

use cli::output::print_error;
use config::Config;
use error::AppError;
use models::color::ColorTable;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let Some(command) = cli_args.command else {
        cli::print_usage();
        return 0;
    };

    // Config degrades to empty fields on any read problem; the bridge
    // connection step then fails with its own reported error.
    let config = config::load(&config::default_path());

    match dispatch(command, &config, cli_args.verbose).await {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(command: cli::Commands, config: &Config, verbose: bool) -> Result<(), AppError> {
    match command {
        cli::Commands::Status => cli::status::handle(config, verbose).await,
        cli::Commands::On { lights } => {
            cli::power::handle(cli::power::PowerAction::On, &lights, config, verbose).await
        }
        cli::Commands::Off { lights } => {
            cli::power::handle(cli::power::PowerAction::Off, &lights, config, verbose).await
        }
        cli::Commands::Color { color, lights } => {
            cli::color::handle(&color, &lights, &ColorTable::builtin(), config, verbose).await
        }
        cli::Commands::Brightness { percent, lights } => {
            cli::brightness::handle(percent, &lights, config, verbose).await
        }
    }
}
