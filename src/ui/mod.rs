//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`chart`]: Live download/upload line chart
//! - [`readouts`]: Counter readouts and the protocol panel
//! - [`common`]: Shared components (header, buttons, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! │ Buttons (common::render_controls)    │
//! ├──────────────────────────────────────┤
//! │ Chart (chart::render)                │
//! ├─────────┬─────────┬─────────┬────────┤
//! │ Totals and rates (readouts)          │
//! ├──────────────────────────────────────┤
//! │ Protocols (readouts)                 │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod chart;
pub mod common;
pub mod readouts;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 80;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 20;

/// Render one full frame of the dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(
            0,
            (area.height / 2).saturating_sub(2),
            area.width,
            5u16.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Buttons
        Constraint::Min(8),    // Chart
        Constraint::Length(4), // Counters
        Constraint::Length(3), // Protocols
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_controls(frame, app, chunks[1]);
    chart::render(frame, app, chunks[2]);
    readouts::render_stats(frame, app, chunks[3]);
    readouts::render_protocols(frame, app, chunks[4]);
    common::render_status_bar(frame, app, chunks[5]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::{Control, MonitorState};
    use crate::source::{Sample, SimulatedSource, TrafficSource};

    fn app() -> App {
        App::new(Box::new(SimulatedSource::with_seed(4)), Theme::dark())
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn activate_with_samples(app: &mut App, n: u32) {
        app.state = MonitorState::Active;
        let mut source = SimulatedSource::with_seed(8);
        for i in 0..n {
            let time = NaiveTime::from_hms_opt(10, 0, i).unwrap();
            let reading = source.sample().unwrap();
            app.apply_sample(&Sample::at(time, reading));
        }
    }

    #[test]
    fn test_render_initial_dashboard() {
        let mut app = app();
        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("NETWATCH"));
        assert!(screen.contains("Ready"));
        assert!(screen.contains("Start monitoring"));
        assert!(screen.contains("No samples yet"));
        assert!(screen.contains("Total downloaded"));
        assert!(screen.contains("Upload speed"));
        assert!(screen.contains("HTTPS (443)"));
        assert!(screen.contains("0%"));
    }

    #[test]
    fn test_render_records_button_areas() {
        let mut app = app();
        draw(&mut app, 100, 30);

        let areas = app.control_areas;
        assert_eq!(areas.start.y, 1);
        assert_eq!(areas.start.width as usize, "[ Start monitoring ]".len());
        assert_eq!(areas.hit(areas.stop.x, 1), Some(Control::Stop));
    }

    #[test]
    fn test_render_with_samples() {
        let mut app = app();
        app.stats.total_download = 1_234_567;
        activate_with_samples(&mut app, 3);
        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("Monitoring active"));
        assert!(screen.contains("Network traffic"));
        assert!(screen.contains("Download"));
        assert!(screen.contains("10:00:00"));
        assert!(screen.contains("10:00:02"));
        assert!(screen.contains("1,23"));
        assert!(!screen.contains("No samples yet"));
    }

    #[test]
    fn test_render_protocol_shares() {
        let mut app = app();
        app.protocols = SimulatedSource::with_seed(1).sample().unwrap().protocols;
        let screen = draw(&mut app, 100, 30);

        for (protocol, pct) in app.protocols.iter() {
            assert!(screen.contains(protocol.label()));
            assert!(screen.contains(&format!("{}%", pct)));
        }
    }

    #[test]
    fn test_render_sampling_error() {
        let mut app = app();
        app.last_error = Some("source unavailable: test".to_string());
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Sampling error: source unavailable: test"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = app();
        app.toggle_help();
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_render_too_small() {
        let mut app = app();
        let screen = draw(&mut app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }
}
