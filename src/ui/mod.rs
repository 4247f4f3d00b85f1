//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod roster;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Enroll => forms::draw(frame, main_area, app),
        View::Clubs => roster::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Toast renders on top of everything
    if let Some(notification) = &app.state.notification {
        components::render_toast(frame, notification);
    }
}
