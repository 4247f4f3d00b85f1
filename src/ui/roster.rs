//! Club roster rendering

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the club roster. Each item occupies exactly one row directly under
/// the block's top border; mouse click mapping relies on that.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let roster = &app.state.roster;

    let lines: Vec<Line> = roster
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == roster.selected() {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        *item,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {item}"),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Clubs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}
