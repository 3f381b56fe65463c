//! Live traffic chart.
//!
//! Plots download and upload rates over the most recent
//! [`CHART_WINDOW`](crate::data::CHART_WINDOW) samples.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::CHART_WINDOW;

/// Render the traffic chart.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Network traffic ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let window = app.history.window(CHART_WINDOW);

    if window.is_empty() {
        let hint = Paragraph::new("\nNo samples yet. Press s to start monitoring.")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let datasets = vec![
        Dataset::default()
            .name("Download")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.download))
            .data(&window.download),
        Dataset::default()
            .name("Upload")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.upload))
            .data(&window.upload),
    ];

    let y_max = window.y_max();
    let axis_style = Style::default().fg(app.theme.border);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time")
                .style(axis_style)
                .bounds([0.0, window.x_max()])
                .labels(x_labels(&window.labels)),
        )
        .y_axis(
            Axis::default()
                .title("Speed (KB/s)")
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{:.0}", y_max),
                ]),
        )
        .legend_position(Some(LegendPosition::TopLeft));

    frame.render_widget(chart, area);
}

/// Pick the time labels shown under the x axis.
///
/// Labels are spread evenly over the axis, so a middle label is only added
/// when it lands exactly on a point: first, middle and last for an odd
/// number of points, first and last otherwise.
fn x_labels(labels: &[String]) -> Vec<String> {
    match labels {
        [] => Vec::new(),
        // A lone point sits at the left edge
        [only] => vec![only.clone(), String::new()],
        [first, .., last] if labels.len() % 2 == 0 => vec![first.clone(), last.clone()],
        [first, .., last] => vec![
            first.clone(),
            labels[(labels.len() - 1) / 2].clone(),
            last.clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("00:00:{:02}", i)).collect()
    }

    #[test]
    fn test_x_labels_empty() {
        assert!(x_labels(&[]).is_empty());
    }

    #[test]
    fn test_x_labels_single_point() {
        assert_eq!(x_labels(&labels(1)), vec!["00:00:00".to_string(), String::new()]);
    }

    #[test]
    fn test_x_labels_two_points() {
        assert_eq!(x_labels(&labels(2)), vec!["00:00:00", "00:00:01"]);
    }

    #[test]
    fn test_x_labels_middle_on_a_point() {
        // Middle slot sits at x = 2, which is the third point
        assert_eq!(
            x_labels(&labels(5)),
            vec!["00:00:00", "00:00:02", "00:00:04"]
        );
    }

    #[test]
    fn test_x_labels_full_window() {
        // Middle slot would fall at x = 9.5, between two points
        assert_eq!(
            x_labels(&labels(CHART_WINDOW)),
            vec!["00:00:00", "00:00:19"]
        );
    }
}
