//! # netwatch
//!
//! A terminal dashboard for simulated network traffic.
//!
//! Every figure on screen is fabricated by a pseudo-random generator: a live
//! download/upload chart, running totals, current rates and a per-protocol
//! traffic split. No network interface is ever read.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (counters)    │(rendering)   │         │ │
//! │  └────▲────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │ mpsc                                                │
//! │  ┌────┴────┐    ┌──────────┐                                │
//! │  │ sampler │───▶│  source  │◀── SimulatedSource             │
//! │  │ (task)  │    │ (input)  │                                │
//! │  └─────────┘    └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Monitoring state machine (ready / active / stopped) and the
//!   controls that drive it
//! - **[`sampler`]**: Background tokio task that takes one reading per second
//!   and sends it to the app over a channel
//! - **[`source`]**: [`TrafficSource`] trait and the pseudo-random
//!   [`SimulatedSource`]
//! - **[`data`]**: Ring-buffered chart history, running counters and protocol
//!   shares
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]** / **[`logging`]**: Ambient settings and the file-backed
//!   log subscriber
//!
//! ## Usage
//!
//! ```bash
//! netwatch
//! netwatch --theme light --log-file netwatch.log
//! netwatch --seed 42
//! ```
//!
//! ### As a library
//!
//! ```
//! use netwatch::{App, SimulatedSource, Theme};
//!
//! let app = App::new(Box::new(SimulatedSource::with_seed(42)), Theme::dark());
//! assert!(!app.is_active());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod logging;
pub mod sampler;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Control, MonitorState};
pub use config::{Settings, ThemeChoice};
pub use data::{Protocol, ProtocolShare, TrafficHistory, TrafficStats};
pub use sampler::{Sampler, SamplerEvent, SAMPLE_PERIOD};
pub use source::{Reading, Sample, SimulatedSource, SourceError, TrafficSource};
pub use ui::Theme;
