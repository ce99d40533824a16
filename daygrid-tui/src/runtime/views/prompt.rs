use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_prompt_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitGeneration),
        KeyCode::Esc => app.leave_prompt(),
        KeyCode::Char('x') if ctrl => app.prompt_input.clear(),
        KeyCode::Char('w') if ctrl => app.prompt_input.delete_word(),
        KeyCode::Char(c) if !ctrl => {
            app.prompt_input.insert(c);
        }
        KeyCode::Backspace => app.prompt_input.backspace(),
        KeyCode::Left => app.prompt_input.move_left(),
        KeyCode::Right => app.prompt_input.move_right(),
        KeyCode::Home => app.prompt_input.home(),
        KeyCode::End => app.prompt_input.end(),
        _ => {}
    }
}
