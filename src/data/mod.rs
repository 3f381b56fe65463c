//! Data models for the traffic dashboard.
//!
//! Everything here is plain in-memory state owned by the UI thread. Samples
//! produced by the [`sampler`](crate::sampler) are folded into these types by
//! [`App::apply_sample`](crate::app::App::apply_sample).
//!
//! ## Submodules
//!
//! - [`format`]: Number formatting for the readouts (e.g., "1,234,567")
//! - [`history`]: Bounded ring buffer of recent points for the chart
//! - [`protocols`]: Fabricated per-protocol traffic shares
//! - [`stats`]: Lifetime totals and instantaneous rates
//!
//! ## Data Flow
//!
//! ```text
//! Sample (from the sampler)
//!        │
//!        ├──▶ TrafficStats::record()   (totals + current rates)
//!        ├──▶ TrafficHistory::push()   (chart points, capacity 50)
//!        └──▶ ProtocolShare            (replaced wholesale)
//! ```

pub mod format;
pub mod history;
pub mod protocols;
pub mod stats;

pub use history::{ChartWindow, TrafficHistory, TrafficPoint, CHART_WINDOW, HISTORY_CAPACITY};
pub use protocols::{Protocol, ProtocolShare};
pub use stats::TrafficStats;
