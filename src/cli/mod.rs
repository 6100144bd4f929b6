mod chart;
mod commands;
mod context;
mod help;
pub mod output;
mod shell;
mod table;

pub use context::{CliMode, ShellContext};
pub use shell::run_cli;

/// Whether the command loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
