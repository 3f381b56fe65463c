//! Pseudo-random traffic source.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Reading, SourceError, TrafficSource};
use crate::data::ProtocolShare;

/// Download rates are drawn uniformly from this range, KB/s.
pub const DOWNLOAD_RANGE: RangeInclusive<u64> = 10..=1000;
/// Upload rates are drawn uniformly from this range, KB/s.
pub const UPLOAD_RANGE: RangeInclusive<u64> = 5..=500;

/// A source that fabricates traffic figures.
///
/// # Example
///
/// ```
/// use netwatch::{SimulatedSource, TrafficSource};
///
/// let mut source = SimulatedSource::with_seed(1);
/// let reading = source.sample().unwrap();
/// assert!((10..=1000).contains(&reading.download));
/// ```
#[derive(Debug)]
pub struct SimulatedSource {
    rng: StdRng,
    description: String,
}

impl SimulatedSource {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            description: "simulated".to_string(),
        }
    }

    /// Create a source with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            description: format!("simulated (seed {})", seed),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficSource for SimulatedSource {
    fn sample(&mut self) -> Result<Reading, SourceError> {
        let download = self.rng.gen_range(DOWNLOAD_RANGE);
        let upload = self.rng.gen_range(UPLOAD_RANGE);

        // Protocol split only moves when there was traffic to split
        let protocols = if download + upload > 0 {
            ProtocolShare::generate(&mut self.rng)
        } else {
            ProtocolShare::default()
        };

        Ok(Reading {
            download,
            upload,
            protocols,
        })
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_within_ranges() {
        let mut source = SimulatedSource::with_seed(3);
        for _ in 0..1_000 {
            let reading = source.sample().unwrap();
            assert!(DOWNLOAD_RANGE.contains(&reading.download));
            assert!(UPLOAD_RANGE.contains(&reading.upload));
            assert_eq!(reading.protocols.total(), 100);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimulatedSource::with_seed(99);
        let mut b = SimulatedSource::with_seed(99);
        for _ in 0..50 {
            assert_eq!(a.sample().unwrap(), b.sample().unwrap());
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(SimulatedSource::new().description(), "simulated");
        assert_eq!(
            SimulatedSource::with_seed(5).description(),
            "simulated (seed 5)"
        );
    }
}
