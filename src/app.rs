//! Application state and monitoring controls.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::data::{ProtocolShare, TrafficHistory, TrafficStats};
use crate::sampler::{Sampler, SamplerEvent, SharedSource, SAMPLE_PERIOD};
use crate::source::{Sample, TrafficSource};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Whether the dashboard is collecting samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Started up, never monitored.
    Ready,
    /// Sampler running.
    Active,
    /// Stopped by the user.
    Stopped,
}

impl MonitorState {
    /// Returns the display label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            MonitorState::Ready => "Ready",
            MonitorState::Active => "Monitoring active",
            MonitorState::Stopped => "Stopped",
        }
    }
}

/// The two on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
}

impl Control {
    /// Move focus to the other button.
    pub fn toggle(self) -> Self {
        match self {
            Control::Start => Control::Stop,
            Control::Stop => Control::Start,
        }
    }

    /// Returns the button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "Start monitoring",
            Control::Stop => "Stop",
        }
    }
}

/// Screen areas of the buttons from the last frame, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlAreas {
    pub start: Rect,
    pub stop: Rect,
}

impl ControlAreas {
    /// Which button, if any, covers the given cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let contains =
            |r: &Rect| column >= r.x && column < r.right() && row >= r.y && row < r.bottom();

        if contains(&self.start) {
            Some(Control::Start)
        } else if contains(&self.stop) {
            Some(Control::Stop)
        } else {
            None
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub state: MonitorState,
    pub focus: Control,
    pub show_help: bool,

    // Sampling
    source: SharedSource,
    sampler: Option<Sampler>,
    sample_period: Duration,

    // Dashboard data
    pub stats: TrafficStats,
    pub history: TrafficHistory,
    pub protocols: ProtocolShare,
    pub last_error: Option<String>,

    // UI
    pub theme: Theme,
    pub control_areas: ControlAreas,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over the given traffic source.
    pub fn new(source: Box<dyn TrafficSource>, theme: Theme) -> Self {
        Self {
            running: true,
            state: MonitorState::Ready,
            focus: Control::Start,
            show_help: false,
            source: Arc::new(Mutex::new(source)),
            sampler: None,
            sample_period: SAMPLE_PERIOD,
            stats: TrafficStats::new(),
            history: TrafficHistory::new(),
            protocols: ProtocolShare::default(),
            last_error: None,
            theme,
            control_areas: ControlAreas::default(),
            status_message: None,
        }
    }

    /// Override the sampling period.
    pub fn with_sample_period(mut self, period: Duration) -> Self {
        self.sample_period = period;
        self
    }

    /// Returns a description of the traffic source.
    pub fn source_description(&self) -> String {
        self.source.lock().description().to_string()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    pub fn is_active(&self) -> bool {
        self.state == MonitorState::Active
    }

    /// Whether the given button is currently enabled.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start => !self.is_active(),
            Control::Stop => self.is_active(),
        }
    }

    /// Start sampling.
    ///
    /// Returns Ok(false) if monitoring was already active. Must be called
    /// from within a tokio runtime.
    pub fn start_monitoring(&mut self) -> Result<bool> {
        if self.is_active() {
            return Ok(false);
        }
        if tokio::runtime::Handle::try_current().is_err() {
            bail!("no async runtime available for the sampler");
        }

        self.sampler = Some(Sampler::spawn(self.source.clone(), self.sample_period));
        self.state = MonitorState::Active;
        self.focus = Control::Stop;
        info!(source = %self.source_description(), "monitoring started");
        Ok(true)
    }

    /// Stop sampling.
    ///
    /// Samples already queued by the sampler are discarded. Returns false if
    /// monitoring was not active.
    pub fn stop_monitoring(&mut self) -> bool {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
        if !self.is_active() {
            return false;
        }

        self.state = MonitorState::Stopped;
        self.focus = Control::Start;
        info!(
            total_download = self.stats.total_download,
            total_upload = self.stats.total_upload,
            "monitoring stopped"
        );
        true
    }

    /// Press a button. Disabled buttons do nothing.
    pub fn press(&mut self, control: Control) {
        if !self.is_enabled(control) {
            return;
        }
        match control {
            Control::Start => {
                if let Err(e) = self.start_monitoring() {
                    self.set_status_message(format!("Start failed: {}", e));
                }
            }
            Control::Stop => {
                self.stop_monitoring();
            }
        }
    }

    /// Press whichever button has focus.
    pub fn press_focused(&mut self) {
        self.press(self.focus);
    }

    /// Move focus to the other button.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Fold a sample into the dashboard.
    ///
    /// Returns false, leaving every counter untouched, unless monitoring is
    /// active.
    pub fn apply_sample(&mut self, sample: &Sample) -> bool {
        if !self.is_active() {
            return false;
        }

        let reading = &sample.reading;
        self.stats.record(reading.download, reading.upload);
        self.history.push(sample);
        if self.stats.has_current_traffic() {
            self.protocols = reading.protocols;
        }
        self.last_error = None;
        true
    }

    /// Drain everything the sampler produced since the last call.
    ///
    /// Returns the number of samples applied.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;

        while let Some(event) = self.sampler.as_mut().and_then(Sampler::poll) {
            match event {
                SamplerEvent::Sample(sample) => {
                    if self.apply_sample(&sample) {
                        applied += 1;
                    }
                }
                SamplerEvent::Error(err) => {
                    self.last_error = Some(err);
                }
            }
        }

        if self.is_active() && !self.sampler.as_ref().is_some_and(Sampler::is_running) {
            warn!("sampler exited unexpectedly");
            self.last_error = Some("Sampler exited unexpectedly".to_string());
            self.stop_monitoring();
        }

        applied
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.stop_monitoring();
        self.running = false;
    }
}
