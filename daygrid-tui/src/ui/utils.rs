use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A `width` x `height` rect beside `anchor`: right of it when there is room,
/// otherwise left, clamped to `bounds`.
pub fn rect_beside(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let right_x = anchor.x.saturating_add(anchor.width);
    let x = if right_x.saturating_add(width) <= bounds.right() {
        right_x
    } else {
        anchor.x.saturating_sub(width).max(bounds.x)
    };
    let y = anchor
        .y
        .min(bounds.bottom().saturating_sub(height))
        .max(bounds.y);

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Truncate to `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
