//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod toasts;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_provider(frame, main_area, app);

    if app.state.dialog.is_visible() {
        if let Some(form) = app.state.dialog.form() {
            components::render_rename_dialog(frame, form, app.spinner_frame());
        }
    }

    toasts::draw(frame, main_area, &app.state.toasts);

    layout::draw_status_bar(frame, status_area, app);
}
