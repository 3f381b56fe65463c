//! Fabricated per-protocol traffic shares.

use std::ops::RangeInclusive;

use rand::Rng;

/// Range HTTP's share is drawn from.
pub const HTTP_RANGE: RangeInclusive<u8> = 30..=50;
/// Range HTTPS's share is drawn from (further capped so the total stays at 100).
pub const HTTPS_RANGE: RangeInclusive<u8> = 30..=50;
/// Range FTP's share is drawn from.
pub const FTP_RANGE: RangeInclusive<u8> = 1..=5;

/// Protocols shown in the protocol panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
    Ftp,
    Other,
}

impl Protocol {
    /// All protocols in display order.
    pub const ALL: [Protocol; 4] = [
        Protocol::Http,
        Protocol::Https,
        Protocol::Ftp,
        Protocol::Other,
    ];

    /// Returns the display label for this protocol.
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Http => "HTTP (80)",
            Protocol::Https => "HTTPS (443)",
            Protocol::Ftp => "FTP (21)",
            Protocol::Other => "Other",
        }
    }
}

/// Percentage split of traffic across [`Protocol`]s.
///
/// A generated share always sums to exactly 100 with no negative entries.
/// The default share is all zeros, shown before the first sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolShare {
    http: u8,
    https: u8,
    ftp: u8,
    other: u8,
}

impl ProtocolShare {
    /// Draw a fresh split.
    ///
    /// HTTP and FTP come straight from their ranges. HTTPS is drawn from its
    /// range capped at whatever HTTP and FTP left over, and Other takes the
    /// remainder. The cap never drops below the bottom of `HTTPS_RANGE`
    /// because `100 - 50 - 5 = 45`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let http = rng.gen_range(HTTP_RANGE);
        let ftp = rng.gen_range(FTP_RANGE);
        let https_cap = (*HTTPS_RANGE.end()).min(100 - http - ftp);
        let https = rng.gen_range(*HTTPS_RANGE.start()..=https_cap);
        let other = 100 - http - https - ftp;

        Self {
            http,
            https,
            ftp,
            other,
        }
    }

    /// Share for a single protocol, in percent.
    pub fn get(&self, protocol: Protocol) -> u8 {
        match protocol {
            Protocol::Http => self.http,
            Protocol::Https => self.https,
            Protocol::Ftp => self.ftp,
            Protocol::Other => self.other,
        }
    }

    /// Iterate over (protocol, percent) in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Protocol, u8)> + '_ {
        Protocol::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Sum of all shares. 100 for generated shares, 0 for the default.
    pub fn total(&self) -> u16 {
        self.iter().map(|(_, pct)| pct as u16).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_zero() {
        let share = ProtocolShare::default();
        assert_eq!(share.total(), 0);
        assert!(share.iter().all(|(_, pct)| pct == 0));
    }

    #[test]
    fn test_generated_shares_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let share = ProtocolShare::generate(&mut rng);
            assert!(HTTP_RANGE.contains(&share.get(Protocol::Http)));
            assert!(HTTPS_RANGE.contains(&share.get(Protocol::Https)));
            assert!(FTP_RANGE.contains(&share.get(Protocol::Ftp)));
            assert_eq!(share.total(), 100);
        }
    }

    #[test]
    fn test_other_is_remainder() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let share = ProtocolShare::generate(&mut rng);
            let named = share.get(Protocol::Http) as u16
                + share.get(Protocol::Https) as u16
                + share.get(Protocol::Ftp) as u16;
            assert_eq!(share.get(Protocol::Other) as u16, 100 - named);
        }
    }

    #[test]
    fn test_iter_display_order() {
        let labels: Vec<&str> = ProtocolShare::default().iter().map(|(p, _)| p.label()).collect();
        assert_eq!(labels, vec!["HTTP (80)", "HTTPS (443)", "FTP (21)", "Other"]);
    }
}
