mod api;
mod app;
mod bootstrap;
mod calendar;
mod cli;
mod config;
mod logging;
mod runtime;
mod storage;
mod task_store;
mod theme;
mod time_utils;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use cli::Cli;
use config::DaygridConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(mode) = cli.command().run_mode() else {
        return print_config_path();
    };

    let cfg = DaygridConfig::load()?;
    let _log_guard = logging::init_logging(&cfg.log_dir()?, &cfg.log_level)?;
    tracing::info!(?mode, "starting daygrid");

    let (mut app, generator) = bootstrap::prepare(mode, &cfg, time_utils::local_today())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, generator).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "daygrid exited with an error");
    }
    tracing::info!("daygrid stopped");
    res
}

fn print_config_path() -> Result<()> {
    let path = DaygridConfig::config_path()?;
    if !path.exists() {
        DaygridConfig::default().save()?;
        println!("Created default config at {}", path.display());
    }
    println!("{}", path.display());
    Ok(())
}
