//! Numeric readouts: traffic counters and protocol shares.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format::format_thousands;

/// Render the four counter readouts side by side.
pub fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let readouts = [
        ("Total downloaded", format_thousands(stats.total_download), "KB", app.theme.download),
        ("Total uploaded", format_thousands(stats.total_upload), "KB", app.theme.upload),
        ("Download speed", stats.current_download.to_string(), "KB/s", app.theme.download),
        ("Upload speed", stats.current_upload.to_string(), "KB/s", app.theme.upload),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((title, value, unit, color), column) in readouts.into_iter().zip(columns.iter()) {
        render_readout(frame, app, *column, title, value, unit, color);
    }
}

fn render_readout(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: String,
    unit: &str,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            unit.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Render the simulated protocol split.
pub fn render_protocols(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Simulated protocols ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(inner);

    for ((protocol, pct), column) in app.protocols.iter().zip(columns.iter()) {
        let line = Line::from(vec![
            Span::raw(format!("{} ", protocol.label())),
            Span::styled(format!("{}%", pct), app.theme.header),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), *column);
    }
}
