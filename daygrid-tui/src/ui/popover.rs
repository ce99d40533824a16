use crate::app::App;
use crate::theme::{task_color, Palette};
use crate::time_utils::format_long_date;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use super::utils::rect_beside;

const POPOVER_WIDTH: u16 = 40;
const POPOVER_HEIGHT: u16 = 9;

/// Task summary drawn beside its grid cell.
pub fn render_popover(frame: &mut Frame, app: &App, cells: &[Rect], palette: &Palette) {
    let (Some(popover), Some(task)) = (app.popover.as_ref(), app.popover_task()) else {
        return;
    };
    let (week, weekday) = popover.anchor;
    let Some(anchor) = cells.get(week * 7 + weekday) else {
        return;
    };

    let area = rect_beside(*anchor, POPOVER_WIDTH, POPOVER_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let color = task_color(task.color);
    let description = if task.description.trim().is_empty() {
        Span::styled(
            "No description provided.",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(task.description.as_str(), Style::default().fg(palette.text))
    };

    let text = vec![
        Line::from(Span::styled(
            task.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_long_date(task.date.date()),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(description),
    ];

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title_bottom(Line::from(vec![
                Span::styled(" e", Style::default().fg(palette.highlight)),
                Span::styled(": Edit  ", Style::default().fg(palette.muted)),
                Span::styled("Esc", Style::default().fg(palette.highlight)),
                Span::styled(": Close ", Style::default().fg(palette.muted)),
            ]))
            .style(Style::default().bg(palette.background))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
