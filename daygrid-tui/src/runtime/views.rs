use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod calendar;
mod confirm_delete;
mod editor;
mod popover;
mod prompt;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.current_view {
        View::Calendar => calendar::handle_calendar_key(key, app),
        View::Prompt => prompt::handle_prompt_key(key, app, action_tx),
        View::Popover => popover::handle_popover_key(key, app),
        View::Editor => editor::handle_editor_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}

#[cfg(test)]
pub(super) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn char_key(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn shift(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;
    use time::macros::date;

    use super::super::action_queue::channel;

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut app = App::new(Arc::new(MemoryStore::new()), date!(2024 - 07 - 10));
        let (tx, _rx) = channel();
        app.current_view = View::Prompt;
        handle_view_key(ctrl('c'), &mut app, &tx);
        assert!(!app.running);
    }
}
