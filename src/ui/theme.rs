//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::app::MonitorState;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color of the download series and readouts.
    pub download: Color,
    /// Color of the upload series and readouts.
    pub upload: Color,
    /// Color for the "monitoring active" status.
    pub active: Color,
    /// Color for the "stopped" status.
    pub stopped: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for panel titles and emphasized values.
    pub header: Style,
    /// Style for the focused, enabled button.
    pub button_focused: Style,
    /// Style for an enabled button without focus.
    pub button: Style,
    /// Style for a disabled button.
    pub button_disabled: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            download: Color::Green,
            upload: Color::Red,
            active: Color::Green,
            stopped: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::Cyan),
            button_disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            download: Color::Green,
            upload: Color::Red,
            active: Color::Green,
            stopped: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::Blue),
            button_disabled: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for the monitoring status label
    pub fn state_style(&self, state: MonitorState) -> Style {
        match state {
            MonitorState::Ready => Style::default(),
            MonitorState::Active => Style::default().fg(self.active).add_modifier(Modifier::BOLD),
            MonitorState::Stopped => Style::default().fg(self.stopped).add_modifier(Modifier::BOLD),
        }
    }
}
