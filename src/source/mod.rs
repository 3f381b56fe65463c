//! Traffic source abstraction.
//!
//! A [`TrafficSource`] produces one [`Reading`] per sampling tick. The
//! [`Sampler`](crate::sampler::Sampler) stamps each reading with the time it
//! was taken and ships it to the UI as a [`Sample`].
//!
//! The only implementation is [`SimulatedSource`], which fabricates every
//! figure from a pseudo-random generator. Nothing here touches a real network
//! interface.

mod simulated;

pub use simulated::{SimulatedSource, DOWNLOAD_RANGE, UPLOAD_RANGE};

use std::fmt::Debug;

use chrono::{Local, NaiveTime};
use thiserror::Error;

use crate::data::ProtocolShare;

/// Errors a traffic source can report for a single tick.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The source had nothing to report this tick.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source panicked while taking a reading.
    #[error("source panicked: {0}")]
    Panicked(String),
}

/// Traffic figures for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Download rate in KB/s.
    pub download: u64,
    /// Upload rate in KB/s.
    pub upload: u64,
    /// Per-protocol split for this tick.
    pub protocols: ProtocolShare,
}

/// A [`Reading`] stamped with the local time it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub time: NaiveTime,
    pub reading: Reading,
}

impl Sample {
    /// Stamp a reading with the current local time.
    pub fn now(reading: Reading) -> Self {
        Self::at(Local::now().time(), reading)
    }

    /// Stamp a reading with an explicit time.
    pub fn at(time: NaiveTime, reading: Reading) -> Self {
        Self { time, reading }
    }
}

/// Trait for producing traffic readings.
///
/// Implementations are polled once per sampling tick from a background task,
/// so `sample` must not block for long.
pub trait TrafficSource: Send + Debug {
    /// Take the next reading.
    fn sample(&mut self) -> Result<Reading, SourceError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
