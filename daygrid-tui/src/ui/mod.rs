use crate::app::{App, View};
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

mod calendar_view;
mod delete_dialog;
mod editor_dialog;
mod popover;
mod prompt_panel;
pub(super) mod utils;

const PROMPT_PANEL_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, root[0], app, &palette);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PROMPT_PANEL_WIDTH), Constraint::Min(0)])
        .split(root[1]);

    prompt_panel::render_prompt_panel(frame, body[0], app, &palette);
    let cells = calendar_view::render_calendar(frame, body[1], app, &palette);

    match app.current_view {
        View::Calendar | View::Prompt => {}
        View::Popover => popover::render_popover(frame, app, &cells, &palette),
        View::Editor => editor_dialog::render_editor_dialog(frame, app, &palette),
        View::ConfirmDelete => {
            editor_dialog::render_editor_dialog(frame, app, &palette);
            delete_dialog::render_delete_confirm_dialog(frame, app, &palette);
        }
    }

    render_footer(frame, root[2], app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    const LABEL: &str = " Daygrid";
    let theme_label = format!("{} theme ", app.theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2 + LABEL.len() as u16),
            Constraint::Min(0),
            Constraint::Length(theme_label.len() as u16),
        ])
        .split(area);

    // Throbber spins while a generation request is in flight
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(palette.highlight))
        .throbber_style(Style::default().fg(palette.highlight))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_generating() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            LABEL,
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        label_area,
    );

    let mut middle = vec![
        Span::styled("  ", Style::default()),
        Span::styled(app.month().title(), Style::default().fg(palette.text)),
    ];
    let count = match app.task_count() {
        _ if !app.has_tasks() => "  · no tasks yet".to_string(),
        1 => "  · 1 task".to_string(),
        n => format!("  · {n} tasks"),
    };
    middle.push(Span::styled(count, Style::default().fg(palette.muted)));
    if app.is_generating() {
        middle.push(Span::styled(
            "  · generating tasks…",
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(middle)), cols[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(theme_label, Style::default().fg(palette.muted)))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn key_hints(view: View) -> Vec<(&'static str, &'static str)> {
    match view {
        View::Calendar => vec![
            ("←↓↑→/hjkl", "Move"),
            ("n/p", "Month"),
            ("t", "Today"),
            ("Tab", "Task"),
            ("Enter", "Open"),
            ("a", "Add"),
            ("e", "Edit"),
            ("i", "Ask AI"),
            ("T", "Theme"),
            ("q", "Quit"),
        ],
        View::Prompt => vec![
            ("Enter", "Generate"),
            ("Ctrl+W", "Delete word"),
            ("Ctrl+X", "Clear"),
            ("Esc", "Back to calendar"),
        ],
        View::Popover => vec![("e", "Edit"), ("Esc", "Close")],
        View::Editor => vec![
            ("Tab", "Next field"),
            ("←/→", "Color"),
            ("Enter", "Save"),
            ("Ctrl+D", "Delete"),
            ("Esc", "Cancel"),
        ],
        View::ConfirmDelete => vec![("y", "Delete"), ("n", "Keep")],
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut hints = Vec::new();
    for (key, label) in key_hints(app.current_view) {
        hints.push(Span::styled(key, Style::default().fg(palette.highlight)));
        hints.push(Span::raw(format!(": {label}  ")));
    }

    let status = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(palette.text),
        )),
        None => Line::from(""),
    };

    let footer = Paragraph::new(vec![status, Line::from(hints)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(footer, area);
}
