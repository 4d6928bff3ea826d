/// In-memory record of the most recent system read.
///
/// Every field starts at its zero/empty default and is only overwritten
/// when its backing source was successfully read and parsed. A source
/// that goes missing on a later refresh leaves the last known good value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    /// First `model name` entry from the CPU info source.
    pub cpu_model: Option<String>,
    /// Last-seen `cpu cores` value.
    pub cpu_cores: u32,
    /// Count of `processor` entries.
    pub cpu_threads: u32,
    /// Current (or max, as fallback) scaling frequency in GHz.
    pub cpu_frequency_ghz: f64,
    pub memory_total_gib: f64,
    pub memory_used_gib: f64,
    pub memory_free_gib: f64,
    pub hostname: Option<String>,
    /// `"<sysname> <release>"`, e.g. `"Linux 6.1.0-13-amd64"`.
    pub kernel: Option<String>,
    /// `PRETTY_NAME` from the OS release file, quotes stripped.
    pub os: Option<String>,
    pub uptime_seconds: u64,
}

/// Outcome of refreshing one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    Updated,
    /// The source was unreadable or unparsable; previous values kept.
    #[default]
    Retained,
}

impl FieldStatus {
    pub fn is_updated(self) -> bool {
        self == FieldStatus::Updated
    }
}

/// Per-source outcome of a single refresh. Defaults to all-retained,
/// which is the state before any refresh has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub cpu: FieldStatus,
    pub frequency: FieldStatus,
    pub memory: FieldStatus,
    pub hostname: FieldStatus,
    pub kernel: FieldStatus,
    pub os_release: FieldStatus,
    pub uptime: FieldStatus,
}

impl RefreshReport {
    pub fn stale_count(&self) -> usize {
        [
            self.cpu,
            self.frequency,
            self.memory,
            self.hostname,
            self.kernel,
            self.os_release,
            self.uptime,
        ]
        .iter()
        .filter(|status| !status.is_updated())
        .count()
    }

    pub fn all_updated(&self) -> bool {
        self.stale_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_zeroed() {
        let snapshot = SystemSnapshot::default();
        assert_eq!(snapshot.cpu_model, None);
        assert_eq!(snapshot.cpu_cores, 0);
        assert_eq!(snapshot.cpu_threads, 0);
        assert_eq!(snapshot.cpu_frequency_ghz, 0.0);
        assert_eq!(snapshot.memory_total_gib, 0.0);
        assert_eq!(snapshot.uptime_seconds, 0);
    }

    #[test]
    fn stale_count_tracks_retained_sources() {
        let mut report = RefreshReport::default();
        assert_eq!(report.stale_count(), 7);
        assert!(!report.all_updated());

        report.cpu = FieldStatus::Updated;
        report.memory = FieldStatus::Updated;
        assert_eq!(report.stale_count(), 5);

        report.frequency = FieldStatus::Updated;
        report.hostname = FieldStatus::Updated;
        report.kernel = FieldStatus::Updated;
        report.os_release = FieldStatus::Updated;
        report.uptime = FieldStatus::Updated;
        assert!(report.all_updated());
    }
}
