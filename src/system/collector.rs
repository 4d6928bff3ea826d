use std::fs;
use std::path::Path;

use sysinfo::System;

use crate::system::snapshot::{FieldStatus, RefreshReport, SystemSnapshot};
use crate::system::sources::{self, SourcePaths};

/// One memory accounting sample, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Seam for the syscall-backed memory query so tests can inject a
/// fixed sample instead of reading the live system.
pub trait MemoryProbe {
    fn sample(&mut self) -> Option<MemorySample>;
}

/// Default probe backed by the `sysinfo` crate.
pub struct SysinfoMemoryProbe {
    sys: System,
}

impl SysinfoMemoryProbe {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SysinfoMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for SysinfoMemoryProbe {
    fn sample(&mut self) -> Option<MemorySample> {
        self.sys.refresh_memory();
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            return None;
        }
        Some(MemorySample {
            total_bytes,
            free_bytes: self.sys.free_memory(),
        })
    }
}

/// Owns the snapshot and re-derives it from the system sources on each
/// refresh. All failure modes are silent no-ops on the affected fields;
/// the returned [`RefreshReport`] is the only failure signal.
pub struct Collector {
    paths: SourcePaths,
    memory: Box<dyn MemoryProbe>,
    snapshot: SystemSnapshot,
    last_report: RefreshReport,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    /// Collector against the live system sources. Performs the initial
    /// refresh, so the snapshot is populated on return.
    pub fn new() -> Self {
        Self::with_sources(SourcePaths::default(), Box::new(SysinfoMemoryProbe::new()))
    }

    pub fn with_sources(paths: SourcePaths, memory: Box<dyn MemoryProbe>) -> Self {
        let mut collector = Collector {
            paths,
            memory,
            snapshot: SystemSnapshot::default(),
            last_report: RefreshReport::default(),
        };
        collector.refresh();
        collector
    }

    pub fn snapshot(&self) -> &SystemSnapshot {
        &self.snapshot
    }

    pub fn last_report(&self) -> RefreshReport {
        self.last_report
    }

    /// Re-derives every snapshot field and reports, per source, whether
    /// it was updated or its previous value was retained.
    pub fn refresh(&mut self) -> RefreshReport {
        let report = RefreshReport {
            cpu: self.refresh_cpu(),
            frequency: self.refresh_frequency(),
            memory: self.refresh_memory(),
            hostname: self.refresh_hostname(),
            kernel: self.refresh_kernel(),
            os_release: self.refresh_os_release(),
            uptime: self.refresh_uptime(),
        };
        self.last_report = report;
        report
    }

    fn refresh_cpu(&mut self) -> FieldStatus {
        let Some(text) = read_source(&self.paths.cpuinfo) else {
            return FieldStatus::Retained;
        };
        let identity = sources::parse_cpuinfo(&text);
        if identity.is_empty() {
            return FieldStatus::Retained;
        }
        self.snapshot.cpu_model = identity.model;
        self.snapshot.cpu_cores = identity.cores;
        self.snapshot.cpu_threads = identity.threads;
        FieldStatus::Updated
    }

    fn refresh_frequency(&mut self) -> FieldStatus {
        // Current scaling frequency preferred, max frequency as fallback.
        for path in [&self.paths.scaling_cur_freq, &self.paths.cpuinfo_max_freq] {
            if let Some(text) = read_source(path)
                && let Some(khz) = sources::parse_freq_khz(&text)
            {
                self.snapshot.cpu_frequency_ghz = khz / 1_000_000.0;
                return FieldStatus::Updated;
            }
        }
        FieldStatus::Retained
    }

    fn refresh_memory(&mut self) -> FieldStatus {
        let Some(sample) = self.memory.sample() else {
            return FieldStatus::Retained;
        };
        let (total, used, free) = sources::memory_gib(sample.total_bytes, sample.free_bytes);
        self.snapshot.memory_total_gib = total;
        self.snapshot.memory_used_gib = used;
        self.snapshot.memory_free_gib = free;
        FieldStatus::Updated
    }

    fn refresh_hostname(&mut self) -> FieldStatus {
        let Some(hostname) = read_trimmed(&self.paths.hostname) else {
            return FieldStatus::Retained;
        };
        self.snapshot.hostname = Some(hostname);
        FieldStatus::Updated
    }

    // The kernel string needs both files, so it only counts as updated
    // when the pair was readable.
    fn refresh_kernel(&mut self) -> FieldStatus {
        let (Some(sysname), Some(release)) = (
            read_trimmed(&self.paths.kernel_ostype),
            read_trimmed(&self.paths.kernel_osrelease),
        ) else {
            return FieldStatus::Retained;
        };
        self.snapshot.kernel = Some(format!("{sysname} {release}"));
        FieldStatus::Updated
    }

    fn refresh_os_release(&mut self) -> FieldStatus {
        let Some(text) = read_source(&self.paths.os_release) else {
            return FieldStatus::Retained;
        };
        match sources::parse_pretty_name(&text) {
            Some(name) => {
                self.snapshot.os = Some(name);
                FieldStatus::Updated
            }
            None => FieldStatus::Retained,
        }
    }

    fn refresh_uptime(&mut self) -> FieldStatus {
        let Some(text) = read_source(&self.paths.uptime) else {
            return FieldStatus::Retained;
        };
        match sources::parse_uptime_seconds(&text) {
            Some(seconds) => {
                self.snapshot.uptime_seconds = seconds;
                FieldStatus::Updated
            }
            None => FieldStatus::Retained,
        }
    }
}

fn read_source(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn read_trimmed(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
