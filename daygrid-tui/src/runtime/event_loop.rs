use crate::app::App;
use crate::time_utils::local_today;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use taskgen::TaskGenerator;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    generator: Arc<dyn TaskGenerator>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        app.refresh_today(local_today());
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_generating() {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &generator, &action_tx);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
