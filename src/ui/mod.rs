//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod results;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_privacy_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header, app);
    layout::draw_progress(frame, regions.progress, app);

    match app.state.current_view {
        View::Form => forms::draw_step(frame, regions.content, app),
        View::Results => results::draw(frame, regions.content, app),
    }

    layout::draw_status_bar(frame, regions.status, app);

    // Overlays; alerts win over the privacy dialog
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    } else if app.state.show_privacy {
        render_privacy_dialog(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::services::{MockGeolocator, MockLeadTracker, MockReverseGeocoder};
    use crate::sizing::estimate;
    use crate::state::FormView;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_services(
            TuiConfig::default(),
            Arc::new(MockGeolocator::new()),
            Arc::new(MockReverseGeocoder::new()),
            Arc::new(MockLeadTracker::new()),
        )
    }

    #[tokio::test]
    async fn test_first_step_renders() {
        let screen = render(&app());
        assert!(screen.contains("Step 1 of 7"));
        assert!(screen.contains("Installation type"));
        assert!(screen.contains("Residential"));
        assert!(screen.contains("Next [Enter]"));
        assert!(!screen.contains("Back [Esc]"));
    }

    #[tokio::test]
    async fn test_alert_overlay_renders() {
        let mut app = app();
        app.push_error("Please select an installation type.");
        let screen = render(&app);
        assert!(screen.contains("Attention"));
        assert!(screen.contains("Please select an installation type."));
    }

    #[tokio::test]
    async fn test_results_view_offers_back_to_form() {
        let mut app = app();
        app.state.show_results(&estimate(360.0).unwrap());
        let screen = render(&app);
        assert!(screen.contains("Your estimate"));
        assert!(screen.contains("560.88 kWh"));
        assert!(screen.contains("Back to form [b]"));
        assert!(screen.contains("Copy specialist link [w]"));
    }

    #[tokio::test]
    async fn test_privacy_overlay_renders() {
        let mut app = app();
        app.state.show_privacy = true;
        let screen = render(&app);
        assert!(screen.contains("Privacy policy"));
    }
}
