use crate::app::App;
use crate::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use super::utils::{centered_rect, truncate};

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(ctx) = &app.delete_context else {
        return;
    };

    let area = centered_rect(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate(&ctx.display_title, 46),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            ctx.display_date.as_str(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(palette.error)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(palette.text)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Task? ")
                .border_style(Style::default().fg(palette.error))
                .style(Style::default().bg(palette.background))
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
