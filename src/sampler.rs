//! Background sampling loop.
//!
//! A [`Sampler`] owns a tokio task that asks a [`TrafficSource`] for a reading
//! once per period and ships the result to the UI over a bounded channel. The
//! UI drains the channel with [`Sampler::poll`] on every frame; nothing on the
//! sampling side ever touches the dashboard's counters directly.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::source::{Reading, Sample, SourceError, TrafficSource};

/// How often a new sample is taken.
pub const SAMPLE_PERIOD: Duration = Duration::from_secs(1);

/// Pending events buffered between the sampler and the UI.
const CHANNEL_CAPACITY: usize = 16;

/// A source shared between the app and whichever sampler is running.
pub type SharedSource = Arc<Mutex<Box<dyn TrafficSource>>>;

/// Something that happened on a sampling tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerEvent {
    /// A fresh sample.
    Sample(Sample),
    /// The source failed this tick; the loop carries on with the next one.
    Error(String),
}

/// Handle to a running sampling task.
///
/// Dropping the handle does not stop the task by itself, but the task exits
/// on its next tick once it notices the receiver is gone. Call
/// [`Sampler::stop`] to end it immediately.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use parking_lot::Mutex;
/// use netwatch::{Sampler, SamplerEvent, SimulatedSource, TrafficSource};
///
/// # tokio_test::block_on(async {
/// let source: Box<dyn TrafficSource> = Box::new(SimulatedSource::with_seed(1));
/// let mut sampler = Sampler::spawn(Arc::new(Mutex::new(source)), Duration::from_secs(1));
/// tokio::time::sleep(Duration::from_millis(20)).await;
/// assert!(matches!(sampler.poll(), Some(SamplerEvent::Sample(_))));
/// sampler.stop();
/// # });
/// ```
#[derive(Debug)]
pub struct Sampler {
    receiver: mpsc::Receiver<SamplerEvent>,
    handle: JoinHandle<()>,
}

/// Take one reading, turning a panicking source into an error for this tick.
///
/// The lock is released before returning.
fn sample_once(source: &SharedSource) -> Result<Reading, SourceError> {
    panic::catch_unwind(AssertUnwindSafe(|| source.lock().sample()))
        .unwrap_or_else(|payload| Err(SourceError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Sampler {
    /// Spawn the sampling task on the current tokio runtime.
    ///
    /// The first sample is taken immediately, then one every `period`.
    pub fn spawn(source: SharedSource, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let event = match sample_once(&source) {
                    Ok(reading) => {
                        let sample = Sample::now(reading);
                        debug!(
                            download = reading.download,
                            upload = reading.upload,
                            "sampled traffic"
                        );
                        SamplerEvent::Sample(sample)
                    }
                    Err(e) => {
                        warn!(error = %e, "sampling failed, retrying next tick");
                        SamplerEvent::Error(e.to_string())
                    }
                };

                if tx.send(event).await.is_err() {
                    // Receiver dropped
                    debug!("sampler receiver closed, exiting");
                    break;
                }
            }
        });

        Self {
            receiver: rx,
            handle,
        }
    }

    /// Take the next pending event without blocking.
    pub fn poll(&mut self) -> Option<SamplerEvent> {
        self.receiver.try_recv().ok()
    }

    /// Whether the sampling task is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the sampling task.
    ///
    /// Any events still queued are discarded along with the receiver.
    pub fn stop(self) {
        self.handle.abort();
    }
}
