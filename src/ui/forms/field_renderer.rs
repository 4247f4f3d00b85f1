//! Field rendering utilities for the enrollment form

use crate::state::{FieldId, Gender};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn field_block(field: FieldId, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let required_marker = if field.is_required() { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{required_marker} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a plain text input with cursor and error annotation
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display.to_string(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .wrap(Wrap { trim: false });

    frame.render_widget(content.block(field_block(field, is_active, error)), area);
}

/// Draw the gender radio group as a single row of choices
pub fn draw_radio_group(frame: &mut Frame, area: Rect, selected: Gender, is_active: bool) {
    let mut spans = Vec::new();
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let marker = if gender == selected { "(•)" } else { "( )" };
        let style = if gender == selected && is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if gender == selected {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker} {} ", gender.label()), style));
    }

    let content = Paragraph::new(Line::from(spans));
    frame.render_widget(
        content.block(field_block(FieldId::Gender, is_active, None)),
        area,
    );
}

/// Draw the grade select; the dropdown itself is rendered as an overlay
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    grade: Option<u8>,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = match grade {
        Some(g) => format!("Grade {g} ▾"),
        None => "Select… ▾".to_string(),
    };

    let content = Paragraph::new(Line::from(Span::styled(display, style)));
    frame.render_widget(
        content.block(field_block(FieldId::Grade, is_active, error)),
        area,
    );
}

/// Draw the date-of-birth field; typed entry happens in the overlay
pub fn draw_date_field(
    frame: &mut Frame,
    area: Rect,
    value: Option<chrono::NaiveDate>,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = match value {
        Some(date) => date.format(crate::state::DATE_FORMAT).to_string(),
        None if is_active => String::new(),
        None => "(empty)".to_string(),
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(
        content.block(field_block(FieldId::DateOfBirth, is_active, error)),
        area,
    );
}

/// Draw the school-bus checkbox
pub fn draw_checkbox(frame: &mut Frame, area: Rect, checked: bool, is_active: bool) {
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = Paragraph::new(Line::from(Span::styled(
        format!("{marker} Space to toggle"),
        style,
    )));
    frame.render_widget(
        content.block(field_block(FieldId::SchoolBus, is_active, None)),
        area,
    );
}
