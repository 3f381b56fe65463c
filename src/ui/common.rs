//! Common UI components.
//!
//! This module contains the header bar, control buttons, status bar, and help
//! overlay.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Control, ControlAreas, MonitorState};
use crate::data::history::TIME_FORMAT;

/// Render the header bar: monitoring status on the left, clock on the right.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_style = app.theme.state_style(app.state);
    let indicator = match app.state {
        MonitorState::Active => "●",
        MonitorState::Ready | MonitorState::Stopped => "○",
    };

    let left = Line::from(vec![
        Span::styled(format!(" {} ", indicator), state_style),
        Span::styled("NETWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.state.label(), state_style),
        Span::raw(" │ "),
        Span::styled(
            app.source_description(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
    let clock = format!("{} ", Local::now().format(TIME_FORMAT));
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(clock.len() as u16)])
            .split(area);

    frame.render_widget(Paragraph::new(left), chunks[0]);
    frame.render_widget(
        Paragraph::new(clock).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Render the Start/Stop buttons and remember where they landed.
pub fn render_controls(frame: &mut Frame, app: &mut App, area: Rect) {
    let start_text = button_text(Control::Start);
    let stop_text = button_text(Control::Stop);

    let chunks = Layout::horizontal([
        Constraint::Length(1),
        Constraint::Length(start_text.chars().count() as u16),
        Constraint::Length(2),
        Constraint::Length(stop_text.chars().count() as u16),
        Constraint::Min(0),
    ])
    .split(area);

    for (control, text, rect) in [
        (Control::Start, start_text, chunks[1]),
        (Control::Stop, stop_text, chunks[3]),
    ] {
        let style = button_style(app, control);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    }

    app.control_areas = ControlAreas {
        start: chunks[1],
        stop: chunks[3],
    };
}

fn button_text(control: Control) -> String {
    format!("[ {} ]", control.label())
}

fn button_style(app: &App, control: Control) -> Style {
    if !app.is_enabled(control) {
        app.theme.button_disabled
    } else if app.focus == control {
        app.theme.button_focused
    } else {
        app.theme.button
    }
}

/// Render the status bar at the bottom.
///
/// Shows temporary status messages first, then any sampling error, then
/// context-sensitive controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref err) = app.last_error {
        let paragraph = Paragraph::new(format!(" Sampling error: {} | retrying", err))
            .style(Style::default().fg(app.theme.stopped));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.state {
        MonitorState::Active => "x:stop Tab:focus Enter:press ?:help q:quit",
        MonitorState::Ready | MonitorState::Stopped => {
            "s:start Tab:focus Enter:press ?:help q:quit"
        }
    };

    let status = format!(" {} samples | {}", app.stats.samples, controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Monitoring",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  s           Start monitoring"),
        Line::from("  x           Stop monitoring"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Buttons",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab ←/→     Move focus"),
        Line::from("  Enter Space Press focused button"),
        Line::from("  Click       Press button"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?           Toggle help"),
        Line::from("  q Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 19u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
