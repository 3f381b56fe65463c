//! Bounded history of recent traffic points for the chart.

use std::collections::VecDeque;

use chrono::NaiveTime;

use crate::source::Sample;

/// Maximum number of points to keep.
pub const HISTORY_CAPACITY: usize = 50;

/// Number of most recent points drawn on the chart.
pub const CHART_WINDOW: usize = 20;

/// Time format used for chart labels and the clock.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One charted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficPoint {
    /// Wall-clock time the sample was taken.
    pub time: NaiveTime,
    /// Download rate in KB/s.
    pub download: u64,
    /// Upload rate in KB/s.
    pub upload: u64,
}

impl TrafficPoint {
    /// Time label in `HH:MM:SS` form.
    pub fn label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

impl From<&Sample> for TrafficPoint {
    fn from(sample: &Sample) -> Self {
        Self {
            time: sample.time,
            download: sample.reading.download,
            upload: sample.reading.upload,
        }
    }
}

/// Ring buffer of the most recent [`TrafficPoint`]s.
///
/// Holds at most [`HISTORY_CAPACITY`] points; pushing onto a full buffer
/// evicts the oldest point first.
#[derive(Debug, Clone, Default)]
pub struct TrafficHistory {
    points: VecDeque<TrafficPoint>,
}

impl TrafficHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record a new sample.
    pub fn push(&mut self, sample: &Sample) {
        self.push_point(TrafficPoint::from(sample));
    }

    /// Record a point directly.
    pub fn push_point(&mut self, point: TrafficPoint) {
        self.points.push_back(point);
        if self.points.len() > HISTORY_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over all retained points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrafficPoint> {
        self.points.iter()
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&TrafficPoint> {
        self.points.back()
    }

    /// Build chart series from the last `n` points.
    ///
    /// X coordinates are positions within the window (0, 1, 2, ...), so the
    /// chart always spans the full width regardless of wall-clock gaps.
    pub fn window(&self, n: usize) -> ChartWindow {
        let skip = self.points.len().saturating_sub(n);
        let points: Vec<&TrafficPoint> = self.points.iter().skip(skip).collect();

        let download = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.download as f64))
            .collect();
        let upload = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.upload as f64))
            .collect();
        let peak = points
            .iter()
            .map(|p| p.download.max(p.upload))
            .max()
            .unwrap_or(0);

        ChartWindow {
            labels: points.iter().map(|p| p.label()).collect(),
            download,
            upload,
            peak,
        }
    }
}

/// Chart-ready series for a window of history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartWindow {
    /// Time labels, one per point, oldest first.
    pub labels: Vec<String>,
    /// Download series as (x, KB/s).
    pub download: Vec<(f64, f64)>,
    /// Upload series as (x, KB/s).
    pub upload: Vec<(f64, f64)>,
    /// Highest value in either series.
    pub peak: u64,
}

impl ChartWindow {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Upper bound for the y axis: the peak rounded up to the next 100,
    /// never below 100.
    pub fn y_max(&self) -> f64 {
        self.peak.div_ceil(100).max(1).saturating_mul(100) as f64
    }

    /// Upper bound for the x axis.
    pub fn x_max(&self) -> f64 {
        self.len().saturating_sub(1).max(1) as f64
    }
}
