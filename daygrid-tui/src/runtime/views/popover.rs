use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_popover_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.popover.as_ref().map(|p| p.task_id.clone()) {
                app.open_editor_for_edit(&id);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => app.close_popover(),
        _ => {}
    }
}
