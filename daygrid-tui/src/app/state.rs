use taskgen::{TaskColor, TaskDate};

use crate::types::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Calendar,
    Prompt,
    Popover,
    Editor,
    ConfirmDelete,
}

/// Guard for the single in-flight generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Pending,
}

/// What `begin_generation` hands to the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub reference_date: TaskDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Date,
    Description,
    Color,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Date,
            EditorField::Date => EditorField::Description,
            EditorField::Description => EditorField::Color,
            EditorField::Color => EditorField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EditorField::Title => EditorField::Color,
            EditorField::Date => EditorField::Title,
            EditorField::Description => EditorField::Date,
            EditorField::Color => EditorField::Description,
        }
    }
}

/// Form state for creating or editing one task.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub title: TextInput,
    pub date: TextInput,
    pub description: TextInput,
    pub color: TaskColor,
    pub focused_field: EditorField,
    pub validation_error: Option<String>,
}

impl EditorState {
    pub fn for_new(date: TaskDate) -> Self {
        Self {
            mode: EditorMode::Create,
            title: TextInput::new(),
            date: TextInput::date(&date.to_string()),
            description: TextInput::new(),
            color: TaskColor::default(),
            focused_field: EditorField::Title,
            validation_error: None,
        }
    }

    pub fn for_task(task: &Task) -> Self {
        Self {
            mode: EditorMode::Edit {
                id: task.id.clone(),
            },
            title: TextInput::with_value(&task.title),
            date: TextInput::date(&task.date.to_string()),
            description: TextInput::with_value(&task.description),
            color: task.color,
            focused_field: EditorField::Title,
            validation_error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }
}

/// Lightweight read-only view of one task, anchored at its grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverState {
    pub task_id: String,
    /// (week row, weekday column) of the cell the popover belongs to
    pub anchor: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContext {
    pub task_id: String,
    pub display_title: String,
    pub display_date: String,
}

/// What a [`TextInput`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// `YYYY-MM-DD`: digits and dashes, at most ten characters.
    Date,
}

impl InputKind {
    fn accepts(self, c: char, len: usize) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Date => len < 10 && (c.is_ascii_digit() || c == '-'),
        }
    }
}

/// Single-line input with a cursor counted in chars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    cursor: usize,
    kind: InputKind,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self::of_kind(InputKind::Text, value)
    }

    pub fn date(value: &str) -> Self {
        Self::of_kind(InputKind::Date, value)
    }

    fn of_kind(kind: InputKind, value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            kind,
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert at the cursor. Returns false when the field rejects the char.
    pub fn insert(&mut self, c: char) -> bool {
        if !self.kind.accepts(c, self.char_len()) {
            return false;
        }
        let at = self.byte_at(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    /// Delete back to the start of the previous word (Ctrl+W).
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let (from, to) = (self.byte_at(start), self.byte_at(self.cursor));
        self.value.replace_range(from..to, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor, for drawing the block cursor between them.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_at(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::with_value("gym");
        input.move_left();
        input.insert('y');
        assert_eq!(input.value, "gyym");
        input.home();
        input.backspace();
        assert_eq!(input.value, "gyym");
        input.end();
        input.backspace();
        assert_eq!(input.split_at_cursor(), ("gyy", ""));
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::with_value("café");
        input.backspace();
        assert_eq!(input.value, "caf");
        input.insert('é');
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("caf", "é"));
        input.move_right();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("café", ""));
    }

    #[test]
    fn date_input_rejects_letters_and_overflow() {
        let mut input = TextInput::date("2024-07-1");
        assert!(!input.insert('x'));
        assert!(input.insert('2'));
        assert!(!input.insert('3'));
        assert_eq!(input.value, "2024-07-12");

        let mut title = TextInput::with_value("2024-07-12");
        assert!(title.insert('x'));
    }

    #[test]
    fn delete_word_stops_at_previous_word() {
        let mut input = TextInput::with_value("gym every monday  ");
        input.delete_word();
        assert_eq!(input.value, "gym every ");
        input.move_left();
        input.delete_word();
        assert_eq!(input.split_at_cursor(), ("gym ", " "));
    }

    #[test]
    fn editor_fields_cycle() {
        let mut field = EditorField::Title;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, EditorField::Title);
        assert_eq!(EditorField::Title.previous(), EditorField::Color);
    }
}
