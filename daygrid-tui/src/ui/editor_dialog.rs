use crate::app::{App, EditorField, EditorState, TextInput};
use crate::theme::{task_color, Palette};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use taskgen::TaskColor;

use super::utils::centered_rect;

const LABEL_WIDTH: usize = 13;

pub fn render_editor_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(editor) = &app.editor else {
        return;
    };

    let area = centered_rect(64, 15, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        input_line("Title", &editor.title, editor, EditorField::Title, palette),
        input_line("Date", &editor.date, editor, EditorField::Date, palette),
        input_line(
            "Description",
            &editor.description,
            editor,
            EditorField::Description,
            palette,
        ),
        color_line(editor, palette),
        Line::from(""),
    ];

    if let Some(err) = &editor.validation_error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(palette.error),
        )));
        lines.push(Line::from(""));
    }

    let mut hints = vec![
        Span::styled("Tab", Style::default().fg(palette.highlight)),
        Span::raw(": Next field  "),
        Span::styled("Enter", Style::default().fg(palette.highlight)),
        Span::raw(": Save  "),
    ];
    if editor.is_edit() {
        hints.push(Span::styled("Ctrl+D", Style::default().fg(palette.highlight)));
        hints.push(Span::raw(": Delete  "));
    }
    hints.push(Span::styled("Esc", Style::default().fg(palette.highlight)));
    hints.push(Span::raw(": Cancel"));
    lines.push(Line::from(hints));

    let title = if editor.is_edit() {
        " Edit Task "
    } else {
        " New Task "
    };
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

fn label_span(label: &str, focused: bool, palette: &Palette) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    Span::styled(format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH), style)
}

fn input_line<'a>(
    label: &str,
    input: &'a TextInput,
    editor: &EditorState,
    field: EditorField,
    palette: &Palette,
) -> Line<'a> {
    let focused = editor.focused_field == field;
    let mut spans = vec![label_span(label, focused, palette)];
    if focused {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::styled(before, Style::default().fg(palette.text)));
        spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        spans.push(Span::styled(after, Style::default().fg(palette.text)));
    } else {
        spans.push(Span::styled(
            input.value.as_str(),
            Style::default().fg(palette.text),
        ));
    }
    Line::from(spans)
}

fn color_line(editor: &EditorState, palette: &Palette) -> Line<'static> {
    let focused = editor.focused_field == EditorField::Color;
    let mut spans = vec![label_span("Color", focused, palette)];
    for color in TaskColor::ALL {
        let selected = color == editor.color;
        let mut style = Style::default().fg(task_color(color));
        if selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let marker = if selected { "●" } else { "○" };
        spans.push(Span::styled(format!("{marker} "), style));
        if selected {
            spans.push(Span::styled(format!("{color} "), style));
        }
    }
    Line::from(spans)
}
