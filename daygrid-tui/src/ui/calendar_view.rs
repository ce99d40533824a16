use std::ops::Range;

use crate::app::{App, View};
use crate::calendar::{DayCell, GridCell, WEEKDAY_LABELS};
use crate::theme::{task_color, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::truncate;

/// Draw the month grid and return the rect of every grid cell, row-major.
pub fn render_calendar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) -> Vec<Rect> {
    let grid = app.month_grid();
    let focused = app.current_view == View::Calendar || app.current_view == View::Popover;

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", grid.month().title()))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(if focused {
            palette.accent
        } else {
            palette.border
        }));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let header_cols = seven_columns(rows[0]);
    for (label, col) in WEEKDAY_LABELS.iter().zip(header_cols.iter()) {
        frame.render_widget(
            Paragraph::new(Span::styled(*label, Style::default().fg(palette.muted)))
                .alignment(Alignment::Center),
            *col,
        );
    }

    let cells = cell_rects(rows[1], grid.week_count());
    for (week, row_rects) in grid.weeks().zip(cells.chunks(7)) {
        for (cell, rect) in week.iter().zip(row_rects) {
            if let GridCell::Day(day) = cell {
                render_day_cell(frame, *rect, day, app, palette);
            }
        }
    }
    cells
}

fn seven_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area)
        .to_vec()
}

fn cell_rects(area: Rect, weeks: usize) -> Vec<Rect> {
    if weeks == 0 {
        return Vec::new();
    }
    let row_constraints = vec![Constraint::Ratio(1, weeks as u32); weeks];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area)
        .iter()
        .flat_map(|row| seven_columns(*row))
        .collect()
}

fn render_day_cell(frame: &mut Frame, area: Rect, day: &DayCell<'_>, app: &App, palette: &Palette) {
    let is_cursor = day.date.date() == app.cursor_date;

    let border_style = if is_cursor {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else if day.is_today {
        Style::default().fg(palette.today)
    } else {
        Style::default().fg(palette.border)
    };
    let number_style = if day.is_today {
        Style::default()
            .fg(palette.today)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(palette.text)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!("{:>2}", day.day()), number_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let capacity = inner.height as usize;
    if capacity == 0 || day.tasks.is_empty() {
        return;
    }

    let focused = if is_cursor { app.focused_task_index } else { None };
    let window = visible_window(day.tasks.len(), capacity, focused);
    let hidden = day.tasks.len() - window.len();
    let width = inner.width.saturating_sub(1) as usize;

    let mut lines: Vec<Line> = day.tasks[window.clone()]
        .iter()
        .zip(window)
        .map(|(task, idx)| {
            let mut style = Style::default().fg(task_color(task.color));
            if focused == Some(idx) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled("▌", Style::default().fg(task_color(task.color))),
                Span::styled(truncate(&task.title, width), style),
            ])
        })
        .collect();
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("+{hidden} more"),
            Style::default().fg(palette.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Task indices to draw in a cell with `capacity` lines. When the tasks do not
/// fit, one line is kept for "+N more" and the window slides to keep the
/// focused task visible.
fn visible_window(total: usize, capacity: usize, focused: Option<usize>) -> Range<usize> {
    if total <= capacity {
        return 0..total;
    }
    let slots = capacity.saturating_sub(1);
    let start = match focused {
        Some(idx) if slots > 0 && idx >= slots => (idx + 1 - slots).min(total - slots),
        _ => 0,
    };
    start..start + slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rects_cover_every_grid_cell() {
        let rects = cell_rects(Rect::new(0, 0, 70, 25), 5);
        assert_eq!(rects.len(), 35);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 5));
        assert_eq!(rects[8].y, 5);
        assert_eq!(rects[8].x, 10);
    }

    #[test]
    fn window_shows_everything_that_fits() {
        assert_eq!(visible_window(3, 3, Some(2)), 0..3);
        assert_eq!(visible_window(0, 3, None), 0..0);
    }

    #[test]
    fn window_follows_focus_past_the_overflow_line() {
        // 6 tasks in 3 lines: two task lines plus "+4 more"
        assert_eq!(visible_window(6, 3, None), 0..2);
        assert_eq!(visible_window(6, 3, Some(1)), 0..2);
        assert_eq!(visible_window(6, 3, Some(2)), 1..3);
        assert_eq!(visible_window(6, 3, Some(5)), 4..6);
        assert!(visible_window(6, 3, Some(5)).contains(&5));
    }

    #[test]
    fn single_line_cell_only_counts() {
        assert_eq!(visible_window(4, 1, Some(2)), 0..0);
    }
}
