use std::path::PathBuf;

const GIB: f64 = (1u64 << 30) as f64;

/// Locations of the text sources the collector reads.
///
/// Every source is optional at runtime; tests point these at synthetic
/// files instead of the live system.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub cpuinfo: PathBuf,
    pub scaling_cur_freq: PathBuf,
    pub cpuinfo_max_freq: PathBuf,
    pub os_release: PathBuf,
    pub uptime: PathBuf,
    pub hostname: PathBuf,
    pub kernel_ostype: PathBuf,
    pub kernel_osrelease: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        SourcePaths {
            cpuinfo: "/proc/cpuinfo".into(),
            scaling_cur_freq: "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq".into(),
            cpuinfo_max_freq: "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq".into(),
            os_release: "/etc/os-release".into(),
            uptime: "/proc/uptime".into(),
            hostname: "/proc/sys/kernel/hostname".into(),
            kernel_ostype: "/proc/sys/kernel/ostype".into(),
            kernel_osrelease: "/proc/sys/kernel/osrelease".into(),
        }
    }
}

/// CPU identity parsed out of the cpuinfo source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuIdentity {
    pub model: Option<String>,
    pub cores: u32,
    pub threads: u32,
}

impl CpuIdentity {
    /// True when nothing recognizable was found, i.e. the input was not
    /// a cpuinfo listing at all.
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.cores == 0 && self.threads == 0
    }
}

/// Parses the colon-separated key/value listing of `/proc/cpuinfo`.
///
/// The model comes from the first `model name` line (one leading space
/// after the colon stripped), cores from the last `cpu cores` line, and
/// threads count one per `processor` line.
pub fn parse_cpuinfo(text: &str) -> CpuIdentity {
    let mut identity = CpuIdentity::default();

    for line in text.lines() {
        if line.starts_with("processor") {
            identity.threads += 1;
        }

        if identity.model.is_none()
            && line.starts_with("model name")
            && let Some((_, value)) = line.split_once(':')
        {
            let value = value.strip_prefix(' ').unwrap_or(value);
            identity.model = Some(value.to_string());
        }

        if line.starts_with("cpu cores")
            && let Some((_, value)) = line.split_once(':')
            && let Ok(cores) = value.trim().parse()
        {
            identity.cores = cores;
        }
    }

    identity
}

/// Parses a cpufreq sysfs file: a single integer in kHz.
pub fn parse_freq_khz(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}

/// Scans an os-release listing for a double-quoted `PRETTY_NAME` and
/// returns its value with the quotes stripped. Unquoted values are
/// skipped, matching the strictness of the original format.
pub fn parse_pretty_name(text: &str) -> Option<String> {
    for line in text.lines() {
        if let Some(value) = line.strip_prefix("PRETTY_NAME=")
            && let Some(quoted) = value.strip_prefix('"')
        {
            let end = quoted.find('"').unwrap_or(quoted.len());
            return Some(quoted[..end].to_string());
        }
    }
    None
}

/// Parses the first floating-point token of `/proc/uptime`, truncated
/// to whole seconds.
pub fn parse_uptime_seconds(text: &str) -> Option<u64> {
    let seconds: f64 = text.split_whitespace().next()?.parse().ok()?;
    Some(seconds.max(0.0) as u64)
}

/// Converts a memory sample in bytes to (total, used, free) GiB, with
/// used defined as total minus free.
pub fn memory_gib(total_bytes: u64, free_bytes: u64) -> (f64, f64, f64) {
    let total = total_bytes as f64 / GIB;
    let free = free_bytes as f64 / GIB;
    (total, total - free, free)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn cpuinfo_model_cores_threads() {
        let identity = parse_cpuinfo(CPUINFO);
        assert_eq!(identity.model.as_deref(), Some("Test CPU @ 2.40GHz"));
        assert_eq!(identity.cores, 2);
        assert_eq!(identity.threads, 2);
    }

    #[test]
    fn cpuinfo_first_model_wins_last_cores_wins() {
        let text = "\
processor : 0
model name : first model
cpu cores : 4
processor : 1
model name : second model
cpu cores : 8
";
        let identity = parse_cpuinfo(text);
        assert_eq!(identity.model.as_deref(), Some("first model"));
        assert_eq!(identity.cores, 8);
    }

    #[test]
    fn cpuinfo_cores_only_still_counts() {
        let identity = parse_cpuinfo("cpu cores : 4\n");
        assert!(!identity.is_empty());
        assert_eq!(identity.cores, 4);
        assert_eq!(identity.threads, 0);
    }

    #[test]
    fn cpuinfo_unrelated_text_is_empty() {
        let identity = parse_cpuinfo("not a cpuinfo file\nat all\n");
        assert!(identity.is_empty());
        assert_eq!(identity.cores, 0);
    }

    #[test]
    fn freq_first_token_only() {
        assert_eq!(parse_freq_khz("2400000\n"), Some(2_400_000.0));
        assert_eq!(parse_freq_khz("  3100000 extra"), Some(3_100_000.0));
        assert_eq!(parse_freq_khz(""), None);
        assert_eq!(parse_freq_khz("n/a"), None);
    }

    #[test]
    fn pretty_name_quoted() {
        let text = "NAME=\"Test OS\"\nPRETTY_NAME=\"Test OS 1.0\"\nID=test\n";
        assert_eq!(parse_pretty_name(text).as_deref(), Some("Test OS 1.0"));
    }

    #[test]
    fn pretty_name_unquoted_is_skipped() {
        assert_eq!(parse_pretty_name("PRETTY_NAME=Test OS 1.0\n"), None);
    }

    #[test]
    fn pretty_name_unterminated_quote_reads_to_line_end() {
        assert_eq!(
            parse_pretty_name("PRETTY_NAME=\"Test OS 1.0\n").as_deref(),
            Some("Test OS 1.0")
        );
    }

    #[test]
    fn uptime_truncates_fraction() {
        assert_eq!(parse_uptime_seconds("90061.27 180122.54\n"), Some(90_061));
        assert_eq!(parse_uptime_seconds("0.99"), Some(0));
        assert_eq!(parse_uptime_seconds(""), None);
        assert_eq!(parse_uptime_seconds("garbage"), None);
    }

    #[test]
    fn memory_conversion_is_binary_gib() {
        let (total, used, free) = memory_gib(8 * (1 << 30), 2 * (1 << 30));
        assert!((total - 8.0).abs() < 1e-9);
        assert!((used - 6.0).abs() < 1e-9);
        assert!((free - 2.0).abs() < 1e-9);
    }
}
