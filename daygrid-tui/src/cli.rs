use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "daygrid")]
#[command(about = "Month calendar in the terminal with AI task generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run with on-disk storage and the Gemini generator (default)
    Run,
    /// Run in dev mode with in-memory data and an offline generator
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

/// How the calendar runs; only the commands that open the TUI map to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Live,
    Dev,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

impl Commands {
    pub fn run_mode(self) -> Option<RunMode> {
        match self {
            Commands::Run => Some(RunMode::Live),
            Commands::Dev => Some(RunMode::Dev),
            Commands::ConfigPath => None,
        }
    }
}
