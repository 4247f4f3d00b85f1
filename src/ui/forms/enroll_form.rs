//! Enrollment form rendering

use super::field_renderer::{
    draw_checkbox, draw_date_field, draw_radio_group, draw_select, draw_text_field,
};
use crate::app::App;
use crate::state::{FieldId, GRADE_MAX, GRADE_MIN};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the enrollment form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Student Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // first / last name
            Constraint::Length(3), // email / date of birth
            Constraint::Length(3), // gender / grade
            Constraint::Length(3), // address
            Constraint::Length(3), // phone / parent name
            Constraint::Length(3), // parent email / school bus
            Constraint::Length(3), // submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let focus = form.focus;
    let paired = |row: Rect| {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        (halves[0], halves[1])
    };

    let (first_area, last_area) = paired(rows[0]);
    draw_text_field(
        frame,
        first_area,
        FieldId::FirstName,
        &form.record.first_name,
        focus == FieldId::FirstName,
        form.error(FieldId::FirstName),
    );
    draw_text_field(
        frame,
        last_area,
        FieldId::LastName,
        &form.record.last_name,
        focus == FieldId::LastName,
        form.error(FieldId::LastName),
    );

    let (email_area, dob_area) = paired(rows[1]);
    draw_text_field(
        frame,
        email_area,
        FieldId::Email,
        &form.record.email,
        focus == FieldId::Email,
        form.error(FieldId::Email),
    );
    draw_date_field(
        frame,
        dob_area,
        form.record.date_of_birth,
        focus == FieldId::DateOfBirth,
        form.error(FieldId::DateOfBirth),
    );

    let (gender_area, grade_area) = paired(rows[2]);
    draw_radio_group(
        frame,
        gender_area,
        form.record.gender,
        focus == FieldId::Gender,
    );
    draw_select(
        frame,
        grade_area,
        form.record.grade,
        focus == FieldId::Grade,
        form.error(FieldId::Grade),
    );

    draw_text_field(
        frame,
        rows[3],
        FieldId::Address,
        &form.record.address,
        focus == FieldId::Address,
        None,
    );

    let (phone_area, parent_area) = paired(rows[4]);
    draw_text_field(
        frame,
        phone_area,
        FieldId::PhoneNumber,
        &form.record.phone_number,
        focus == FieldId::PhoneNumber,
        form.error(FieldId::PhoneNumber),
    );
    draw_text_field(
        frame,
        parent_area,
        FieldId::ParentName,
        &form.record.parent_name,
        focus == FieldId::ParentName,
        None,
    );

    let (parent_email_area, bus_area) = paired(rows[5]);
    draw_text_field(
        frame,
        parent_email_area,
        FieldId::ParentEmail,
        &form.record.parent_email,
        focus == FieldId::ParentEmail,
        None,
    );
    draw_checkbox(
        frame,
        bus_area,
        form.record.has_school_bus,
        focus == FieldId::SchoolBus,
    );

    render_button(
        frame,
        rows[6],
        "Submit",
        focus == FieldId::Submit,
        Color::Green,
    );

    // Overlays go last so they sit on top of the fields
    if form.date_overlay.open {
        draw_date_overlay(frame, dob_area, &form.date_overlay.buffer);
    }
    if form.grade_menu.open {
        draw_grade_menu(frame, grade_area, form.grade_menu.highlight);
    }
}

/// Typed-entry popup under the date-of-birth field
fn draw_date_overlay(frame: &mut Frame, anchor: Rect, buffer: &str) {
    let popup = Rect {
        x: anchor.x,
        y: anchor.y + anchor.height,
        width: anchor.width.min(26),
        height: 3,
    };
    frame.render_widget(Clear, popup);

    let content = Paragraph::new(Line::from(vec![
        Span::styled(buffer.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" YYYY-MM-DD ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(content, popup);
}

/// Grade choices popup under the select
fn draw_grade_menu(frame: &mut Frame, anchor: Rect, highlight: u8) {
    let height = (GRADE_MAX - GRADE_MIN + 1) as u16 + 2;
    let popup = Rect {
        x: anchor.x,
        y: anchor.y + anchor.height,
        width: anchor.width.min(16),
        height: height.min(frame.area().height.saturating_sub(anchor.y + anchor.height)),
    };
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = (GRADE_MIN..=GRADE_MAX)
        .map(|grade| {
            let style = if grade == highlight {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("Grade {grade}"), style))
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(menu, popup);
}
