use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_calendar_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor_days(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor_days(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_days(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_days(7),
        KeyCode::Char('n') => app.next_month(),
        KeyCode::Char('p') => app.previous_month(),
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Tab => app.focus_next_task(),
        KeyCode::BackTab => app.focus_previous_task(),
        KeyCode::Enter => app.activate_cursor(),
        KeyCode::Char('a') => app.open_editor_for_new(app.cursor_date),
        KeyCode::Char('e') => app.edit_focused_task(),
        KeyCode::Char('i') | KeyCode::Char('/') => app.focus_prompt(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Esc => {
            app.focused_task_index = None;
            app.clear_status();
        }
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
