use crate::app::{App, EditorField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_editor_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.close_editor();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            enqueue_action(action_tx, Action::SaveEditor);
            return;
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SaveEditor);
            return;
        }
        KeyCode::Char('d') if ctrl => {
            app.request_delete();
            return;
        }
        _ => {}
    }

    let Some(editor) = app.editor.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab => editor.focus_next_field(),
        KeyCode::BackTab => editor.focus_previous_field(),
        KeyCode::Left if editor.focused_field == EditorField::Color => editor.cycle_color(false),
        KeyCode::Right if editor.focused_field == EditorField::Color => editor.cycle_color(true),
        code => {
            let Some(input) = editor.focused_input_mut() else {
                return;
            };
            match code {
                KeyCode::Char('w') if ctrl => input.delete_word(),
                KeyCode::Char(c) if !ctrl => {
                    if !input.insert(c) {
                        return;
                    }
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.home(),
                KeyCode::End => input.end(),
                _ => return,
            }
            editor.validation_error = None;
        }
    }
}
