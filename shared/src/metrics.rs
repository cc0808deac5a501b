//! Hardcoded catalog of monitorable metrics and their display units.
//!
//! Thresholds are stored server-side in each metric's canonical unit
//! (microseconds for latency, bytes for space and bandwidth). The operator
//! picks a friendlier unit in the form; `convert` scales the entered
//! magnitude into the canonical unit before it goes on the wire.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub id: &'static str,
    pub label: &'static str,
    pub factor: f64,
}

const KIB: f64 = 1024.0;

const LATENCY_UNITS: &[Unit] = &[
    Unit { id: "us", label: "µs", factor: 1.0 },
    Unit { id: "ms", label: "ms", factor: 1_000.0 },
    Unit { id: "s", label: "s", factor: 1_000_000.0 },
];

const SPACE_UNITS: &[Unit] = &[
    Unit { id: "B", label: "bytes", factor: 1.0 },
    Unit { id: "KB", label: "KB", factor: KIB },
    Unit { id: "MB", label: "MB", factor: KIB * KIB },
    Unit { id: "GB", label: "GB", factor: KIB * KIB * KIB },
    Unit { id: "TB", label: "TB", factor: KIB * KIB * KIB * KIB },
    Unit { id: "PB", label: "PB", factor: KIB * KIB * KIB * KIB * KIB },
];

const RATE_UNITS: &[Unit] = &[Unit { id: "ops", label: "ops/sec", factor: 1.0 }];

const DEPTH_UNITS: &[Unit] = &[Unit { id: "ops", label: "queued ops", factor: 1.0 }];

const RATIO_UNITS: &[Unit] = &[Unit { id: "to1", label: "to 1", factor: 1.0 }];

const PERCENT_UNITS: &[Unit] = &[Unit { id: "%", label: "%", factor: 0.01 }];

/// Metrics available to array-scoped monitors.
pub const ARRAY_METRICS: &[Metric] = &[
    Metric { id: "usec_per_read_op", label: "Read latency" },
    Metric { id: "usec_per_write_op", label: "Write latency" },
    Metric { id: "reads_per_sec", label: "Read IOPS" },
    Metric { id: "writes_per_sec", label: "Write IOPS" },
    Metric { id: "output_per_sec", label: "Read bandwidth" },
    Metric { id: "input_per_sec", label: "Write bandwidth" },
    Metric { id: "queue_depth", label: "Queue depth" },
    Metric { id: "volumes", label: "Volume space" },
    Metric { id: "snapshots", label: "Snapshot space" },
    Metric { id: "system", label: "System space" },
    Metric { id: "shared_space", label: "Shared space" },
    Metric { id: "total", label: "Total space" },
    Metric { id: "data_reduction", label: "Data reduction" },
    Metric { id: "total_reduction", label: "Total reduction" },
    Metric { id: "percent_full", label: "Percent full" },
];

/// Metrics available to volume-scoped monitors. Strict subset of
/// [`ARRAY_METRICS`]: the array-wide space categories, queue depth and the
/// fill percentage have no per-volume counterpart.
pub const VOL_METRICS: &[Metric] = &[
    Metric { id: "usec_per_read_op", label: "Read latency" },
    Metric { id: "usec_per_write_op", label: "Write latency" },
    Metric { id: "reads_per_sec", label: "Read IOPS" },
    Metric { id: "writes_per_sec", label: "Write IOPS" },
    Metric { id: "output_per_sec", label: "Read bandwidth" },
    Metric { id: "input_per_sec", label: "Write bandwidth" },
    Metric { id: "volumes", label: "Volume space" },
    Metric { id: "snapshots", label: "Snapshot space" },
    Metric { id: "data_reduction", label: "Data reduction" },
    Metric { id: "total_reduction", label: "Total reduction" },
];

pub fn metrics_for(monitor_type: &str) -> &'static [Metric] {
    match monitor_type {
        "vol" => VOL_METRICS,
        _ => ARRAY_METRICS,
    }
}

pub fn metric_label(metric: &str) -> &'static str {
    ARRAY_METRICS
        .iter()
        .find(|m| m.id == metric)
        .map(|m| m.label)
        .unwrap_or("Unknown metric")
}

pub fn units_for(metric: &str) -> &'static [Unit] {
    match metric {
        "usec_per_read_op" | "usec_per_write_op" => LATENCY_UNITS,
        "input_per_sec" | "output_per_sec" => SPACE_UNITS,
        "volumes" | "snapshots" | "system" | "shared_space" | "total" => SPACE_UNITS,
        "reads_per_sec" | "writes_per_sec" => RATE_UNITS,
        "queue_depth" => DEPTH_UNITS,
        "data_reduction" | "total_reduction" => RATIO_UNITS,
        "percent_full" => PERCENT_UNITS,
        _ => &[],
    }
}

pub fn unit_label(metric: &str, unit: &str) -> &'static str {
    units_for(metric)
        .iter()
        .find(|u| u.id == unit)
        .map(|u| u.label)
        .unwrap_or("")
}

/// Scales an entered magnitude into the metric's canonical unit.
///
/// The multiply is string-safe: integral results render without a fractional
/// part, so `"5"` in `ms` becomes `"5000"`, not `"5000.0"`. When the unit is
/// unknown for the metric, or the entered text is not a number, the entered
/// string passes through unconverted.
pub fn convert(entered: &str, metric: &str, unit: &str) -> String {
    let factor = match units_for(metric).iter().find(|u| u.id == unit) {
        Some(u) => u.factor,
        None => return entered.to_string(),
    };
    let magnitude: f64 = match entered.trim().parse() {
        Ok(v) => v,
        Err(_) => return entered.to_string(),
    };
    let raw = magnitude * factor;
    if raw.fract() == 0.0 && raw.abs() < 9_007_199_254_740_992.0 {
        format!("{}", raw as i64)
    } else {
        format!("{}", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_latency_to_canonical_microseconds() {
        assert_eq!("5000", convert("5", "usec_per_read_op", "ms"));
        assert_eq!("5000000", convert("5", "usec_per_read_op", "s"));
        assert_eq!("5", convert("5", "usec_per_read_op", "us"));
    }

    #[test]
    fn should_pass_through_unrecognized_unit() {
        assert_eq!("5", convert("5", "usec_per_read_op", "parsecs"));
    }

    #[test]
    fn should_pass_through_non_numeric_input() {
        assert_eq!("five", convert("five", "usec_per_read_op", "ms"));
    }

    #[test]
    fn should_convert_space_with_binary_factors() {
        assert_eq!("1024", convert("1", "system", "KB"));
        assert_eq!("1073741824", convert("1", "shared_space", "GB"));
        assert_eq!("1125899906842624", convert("1", "total", "PB"));
    }

    #[test]
    fn should_convert_percentage() {
        assert_eq!("0.8", convert("80", "percent_full", "%"));
    }

    #[test]
    fn should_keep_fractional_results() {
        assert_eq!("1536", convert("1.5", "volumes", "KB"));
        assert_eq!("2500", convert("2.5", "usec_per_write_op", "ms"));
    }

    #[test]
    fn should_restrict_volume_scope_to_subset() {
        let vol_ids: Vec<&str> = metrics_for("vol").iter().map(|m| m.id).collect();
        for excluded in ["system", "shared_space", "queue_depth", "total", "percent_full"] {
            assert!(!vol_ids.contains(&excluded), "{} leaked into vol scope", excluded);
        }
        let array_ids: Vec<&str> = metrics_for("array").iter().map(|m| m.id).collect();
        for id in &vol_ids {
            assert!(array_ids.contains(id), "{} missing from array scope", id);
        }
    }

    #[test]
    fn should_default_unknown_scope_to_array_metrics() {
        assert_eq!(ARRAY_METRICS, metrics_for(""));
    }

    #[test]
    fn should_expose_units_for_every_metric() {
        for metric in ARRAY_METRICS {
            assert!(!units_for(metric.id).is_empty(), "{} has no units", metric.id);
        }
    }
}
