//! UI rendering module for inkweather
//!
//! Draws the forecast screen with ratatui and, on request, the help overlay
//! on top of it.

pub mod forecast_view;
pub mod help_overlay;
pub mod icons;

pub use forecast_view::render as render_forecast;
pub use help_overlay::render as render_help_overlay;
pub use icons::{condition_glyph, wind_arrow, Condition};

use ratatui::Frame;

use crate::app::App;

/// Renders the whole screen for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    render_forecast(frame, app);
    if app.show_help {
        render_help_overlay(frame);
    }
}
