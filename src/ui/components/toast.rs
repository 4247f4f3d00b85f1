//! Transient notification toast

use crate::state::{Notification, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the submission feedback toast anchored above the status bar
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();

    let (title, color) = match notification.severity {
        Severity::Success => ("Success", Color::Green),
        Severity::Error => ("Error", Color::Red),
    };

    let width = (notification.message.len() as u16 + 4)
        .max(title.len() as u16 + 4)
        .min(area.width.saturating_sub(2));
    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(5),
        width,
        height: 3,
    };

    frame.render_widget(Clear, toast_area);

    let content = Line::from(Span::raw(notification.message.as_str()));
    let toast = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(toast, toast_area);
}
