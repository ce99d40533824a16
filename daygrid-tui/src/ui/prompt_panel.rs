use crate::app::{App, View};
use crate::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str =
    "e.g. Doctor's appointment next Tuesday at 3pm, gym every Monday and Wednesday";

pub fn render_prompt_panel(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.current_view == View::Prompt;

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Add with AI ",
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(if focused {
            palette.accent
        } else {
            palette.border
        }));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let input_text = if focused {
        let (before, after) = app.prompt_input.split_at_cursor();
        Line::from(vec![
            Span::styled(before, Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.accent)),
            Span::styled(after, Style::default().fg(palette.text)),
        ])
    } else if app.prompt_input.value.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            app.prompt_input.value.as_str(),
            Style::default().fg(palette.text),
        ))
    };
    let input = Paragraph::new(input_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Describe your tasks ")
                .border_style(Style::default().fg(palette.border))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, chunks[0]);

    let hint = if app.is_generating() {
        Line::from(Span::styled(
            "Generating tasks…",
            Style::default().fg(palette.highlight),
        ))
    } else if focused {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(palette.highlight)),
            Span::styled(" to generate, recurring phrases expand over 2-3 months", Style::default().fg(palette.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled("i", Style::default().fg(palette.highlight)),
            Span::styled(" or ", Style::default().fg(palette.muted)),
            Span::styled("/", Style::default().fg(palette.highlight)),
            Span::styled(" to describe tasks in plain language", Style::default().fg(palette.muted)),
        ])
    };
    frame.render_widget(
        Paragraph::new(hint)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );

    if let Some(error) = &app.error_message {
        let error_box = Paragraph::new(Span::styled(
            error.as_str(),
            Style::default().fg(palette.error),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(palette.error))
                .padding(Padding::horizontal(1)),
        );
        let height = chunks[2].height.min(6);
        let area = Rect {
            height,
            ..chunks[2]
        };
        frame.render_widget(error_box, area);
    }
}
