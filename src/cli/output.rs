use console::style;

use crate::error::AppError;
use crate::models::light::Light;

/// Print the LIGHT/STATE table in the bridge's enumeration order. ANSI
/// color is only emitted when stdout is a terminal.
pub fn print_status(lights: &[Light]) {
    println!("{:<15} {:<15}", "LIGHT", "STATE");
    for light in lights {
        let state = if light.state.on {
            style("ON").green().bold()
        } else {
            style("OFF").red().bold()
        };
        println!("{:<15} {:<15}", light.name, state);
    }
}

/// Per-light failures go to stdout and do not abort the batch.
pub fn print_light_error(name: &str, action: &str, err: &AppError) {
    println!("Could not {} {}: {}", action, name, err);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), message);
}

pub fn print_error(err: &AppError) {
    eprintln!("{} {}", style("error:").red().bold(), err);
}
