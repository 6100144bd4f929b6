use crate::cli::commands::{CommandSpec, COMMANDS};
use crate::cli::output;

pub fn print_overview() {
    output::section("Available commands");
    for entry in COMMANDS {
        output::info(format!("  {:<12} {}", entry.name, entry.description));
    }
    output::info("Use `help <command>` for usage details.");
}

pub fn print_command(entry: &CommandSpec) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}
