pub mod brightness;
pub mod color;
pub mod output;
pub mod power;
pub mod status;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "huecli",
    version,
    about = "Hue bridge CLI - control lights bound to the bridge by name"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (show bridge requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Give a status of current lights bound to the bridge
    Status,

    /// Switch the targeted lights on
    On {
        /// Light names
        #[arg(required = true)]
        lights: Vec<String>,
    },

    /// Switch the targeted lights off
    Off {
        /// Light names
        #[arg(required = true)]
        lights: Vec<String>,
    },

    /// Set the color of the targeted lights
    Color {
        /// Color name (DEFAULT, RED, GREEN, BLUE, PURPLE, ORANGE, YELLOW)
        color: String,

        /// Light names
        #[arg(required = true)]
        lights: Vec<String>,
    },

    /// Set the brightness of the targeted lights
    Brightness {
        /// Brightness percentage
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,

        /// Light names
        #[arg(required = true)]
        lights: Vec<String>,
    },
}

pub fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
}

/// Argv problems never fail the process: print what clap has to say
/// (nothing for an unrecognized command) and exit 0.
pub fn exit_code_for_parse_error(err: clap::Error) -> i32 {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSubcommand => {}
        _ => {
            let _ = err.print();
        }
    }
    0
}
