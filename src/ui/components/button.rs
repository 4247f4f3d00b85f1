//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border); mouse
/// click mapping shares the same constant
pub use crate::state::BUTTON_HEIGHT;

/// Render a boxed button. `accent` colors the border when the button is
/// focused (the submit button uses green, navigation uses cyan).
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_focused: bool,
    accent: Color,
) {
    let border_style = if is_focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar navigation button
pub fn render_nav_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    render_button(frame, area, label, is_selected, Color::Cyan);
}
