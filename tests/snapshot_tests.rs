use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use cpuview::system::collector::{Collector, MemoryProbe, MemorySample};
use cpuview::system::snapshot::FieldStatus;
use cpuview::system::sources::SourcePaths;
use tempfile::TempDir;

const GIB: u64 = 1 << 30;

const CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Test CPU @ 2.40GHz
cpu cores\t: 2
processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Test CPU @ 2.40GHz
cpu cores\t: 2
";

const OS_RELEASE: &str = "\
NAME=\"Test OS\"
VERSION=\"1.0\"
ID=test
PRETTY_NAME=\"Test OS 1.0\"
";

/// Memory probe that replays a fixed sequence of samples, then repeats
/// the last one.
struct ScriptedMemory {
    samples: VecDeque<Option<MemorySample>>,
    last: Option<MemorySample>,
}

impl ScriptedMemory {
    fn new(samples: impl IntoIterator<Item = Option<MemorySample>>) -> Box<Self> {
        Box::new(Self {
            samples: samples.into_iter().collect(),
            last: None,
        })
    }

    fn fixed(total_bytes: u64, free_bytes: u64) -> Box<Self> {
        Self::new([Some(MemorySample {
            total_bytes,
            free_bytes,
        })])
    }
}

impl MemoryProbe for ScriptedMemory {
    fn sample(&mut self) -> Option<MemorySample> {
        if let Some(sample) = self.samples.pop_front() {
            self.last = sample;
        }
        self.last
    }
}

fn paths_under(root: &Path) -> SourcePaths {
    SourcePaths {
        cpuinfo: root.join("cpuinfo"),
        scaling_cur_freq: root.join("scaling_cur_freq"),
        cpuinfo_max_freq: root.join("cpuinfo_max_freq"),
        os_release: root.join("os-release"),
        uptime: root.join("uptime"),
        hostname: root.join("hostname"),
        kernel_ostype: root.join("ostype"),
        kernel_osrelease: root.join("osrelease"),
    }
}

fn write_default_tree(root: &Path) {
    fs::write(root.join("cpuinfo"), CPUINFO).unwrap();
    fs::write(root.join("scaling_cur_freq"), "2400000\n").unwrap();
    fs::write(root.join("os-release"), OS_RELEASE).unwrap();
    fs::write(root.join("uptime"), "90061.27 180122.54\n").unwrap();
    fs::write(root.join("hostname"), "testhost\n").unwrap();
    fs::write(root.join("ostype"), "Linux\n").unwrap();
    fs::write(root.join("osrelease"), "6.1.0-test\n").unwrap();
}

#[test]
fn collects_full_synthetic_tree() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());

    let collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );
    let snapshot = collector.snapshot();

    assert_eq!(snapshot.cpu_model.as_deref(), Some("Test CPU @ 2.40GHz"));
    assert_eq!(snapshot.cpu_cores, 2);
    assert_eq!(snapshot.cpu_threads, 2);
    assert!((snapshot.cpu_frequency_ghz - 2.4).abs() < 1e-9);

    assert!((snapshot.memory_total_gib - 8.0).abs() < 1e-9);
    assert!((snapshot.memory_used_gib - 6.0).abs() < 1e-9);
    assert!((snapshot.memory_free_gib - 2.0).abs() < 1e-9);

    assert_eq!(snapshot.hostname.as_deref(), Some("testhost"));
    assert_eq!(snapshot.kernel.as_deref(), Some("Linux 6.1.0-test"));
    assert_eq!(snapshot.os.as_deref(), Some("Test OS 1.0"));
    assert_eq!(snapshot.uptime_seconds, 90_061);

    assert!(collector.last_report().all_updated());
}

#[test]
fn max_freq_is_the_fallback() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());
    fs::remove_file(dir.path().join("scaling_cur_freq")).unwrap();
    fs::write(dir.path().join("cpuinfo_max_freq"), "3100000\n").unwrap();

    let collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );

    assert!((collector.snapshot().cpu_frequency_ghz - 3.1).abs() < 1e-9);
    assert!(collector.last_report().frequency.is_updated());
}

#[test]
fn missing_frequency_sources_leave_zero() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());
    fs::remove_file(dir.path().join("scaling_cur_freq")).unwrap();

    let collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );

    assert_eq!(collector.snapshot().cpu_frequency_ghz, 0.0);
    assert_eq!(collector.last_report().frequency, FieldStatus::Retained);
}

#[test]
fn refresh_is_idempotent_with_unchanged_sources() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());

    let mut collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );
    let first = collector.snapshot().clone();
    collector.refresh();
    let second = collector.snapshot().clone();

    assert_eq!(first, second);
}

#[test]
fn unreadable_sources_retain_last_known_good() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());

    let mut collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );
    assert!(collector.last_report().all_updated());

    fs::remove_file(dir.path().join("os-release")).unwrap();
    fs::remove_file(dir.path().join("uptime")).unwrap();
    fs::remove_file(dir.path().join("cpuinfo")).unwrap();

    let report = collector.refresh();
    let snapshot = collector.snapshot();

    // Previous values survive the outage
    assert_eq!(snapshot.os.as_deref(), Some("Test OS 1.0"));
    assert_eq!(snapshot.uptime_seconds, 90_061);
    assert_eq!(snapshot.cpu_model.as_deref(), Some("Test CPU @ 2.40GHz"));
    assert_eq!(snapshot.cpu_threads, 2);

    // But the report names the stale sources
    assert_eq!(report.os_release, FieldStatus::Retained);
    assert_eq!(report.uptime, FieldStatus::Retained);
    assert_eq!(report.cpu, FieldStatus::Retained);
    assert!(report.hostname.is_updated());
    assert!(report.kernel.is_updated());
    assert!(report.frequency.is_updated());
    assert_eq!(report.stale_count(), 3);
}

#[test]
fn kernel_staleness_is_reported_independently_of_hostname() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());

    let mut collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );

    fs::remove_file(dir.path().join("ostype")).unwrap();
    let report = collector.refresh();

    assert!(report.hostname.is_updated());
    assert_eq!(report.kernel, FieldStatus::Retained);
    // The previous kernel string survives
    assert_eq!(
        collector.snapshot().kernel.as_deref(),
        Some("Linux 6.1.0-test")
    );
}

#[test]
fn memory_probe_failure_retains_previous_values() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());

    let probe = ScriptedMemory::new([
        Some(MemorySample {
            total_bytes: 8 * GIB,
            free_bytes: 2 * GIB,
        }),
        None,
    ]);
    let mut collector = Collector::with_sources(paths_under(dir.path()), probe);
    assert!((collector.snapshot().memory_total_gib - 8.0).abs() < 1e-9);

    let report = collector.refresh();
    assert_eq!(report.memory, FieldStatus::Retained);
    assert!((collector.snapshot().memory_total_gib - 8.0).abs() < 1e-9);
    assert!((collector.snapshot().memory_used_gib - 6.0).abs() < 1e-9);
}

#[test]
fn unquoted_pretty_name_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_default_tree(dir.path());
    fs::write(dir.path().join("os-release"), "PRETTY_NAME=Bare Words 1.0\n").unwrap();

    let collector = Collector::with_sources(
        paths_under(dir.path()),
        ScriptedMemory::fixed(8 * GIB, 2 * GIB),
    );

    assert_eq!(collector.snapshot().os, None);
    assert_eq!(collector.last_report().os_release, FieldStatus::Retained);
}

#[test]
fn empty_tree_yields_default_snapshot() {
    let dir = TempDir::new().unwrap();

    let collector = Collector::with_sources(paths_under(dir.path()), ScriptedMemory::new([None]));
    let snapshot = collector.snapshot();

    assert_eq!(*snapshot, Default::default());
    assert_eq!(collector.last_report().stale_count(), 7);
}
