//! Running traffic counters.

/// Lifetime totals and instantaneous rates.
///
/// Totals are in KB and only ever grow; rates are in KB/s and reflect the
/// most recent sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrafficStats {
    /// Total downloaded, KB.
    pub total_download: u64,
    /// Total uploaded, KB.
    pub total_upload: u64,
    /// Current download rate, KB/s.
    pub current_download: u64,
    /// Current upload rate, KB/s.
    pub current_upload: u64,
    /// Number of samples folded in.
    pub samples: u64,
}

impl TrafficStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one second worth of traffic into the counters.
    pub fn record(&mut self, download: u64, upload: u64) {
        self.total_download = self.total_download.saturating_add(download);
        self.total_upload = self.total_upload.saturating_add(upload);
        self.current_download = download;
        self.current_upload = upload;
        self.samples += 1;
    }

    /// Whether the most recent sample carried any traffic.
    pub fn has_current_traffic(&self) -> bool {
        self.current_download > 0 || self.current_upload > 0
    }
}
