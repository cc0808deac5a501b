use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::status::CollectionStatus;

/// An alert rule as returned by `GET rest/monitors/`.
///
/// `value` is the threshold in the metric's canonical unit; `display_value`
/// and `unit` keep what the operator actually typed so an edit session can
/// show the original entry instead of the converted raw number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `"array"` or `"vol"`.
    #[serde(rename = "type", default)]
    pub monitor_type: String,
    /// Glob pattern over array names.
    #[serde(default)]
    pub array_name: String,
    /// Glob pattern over volume names.
    #[serde(default)]
    pub vol_name: String,
    #[serde(default)]
    pub metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Threshold in the metric's canonical unit.
    #[serde(default)]
    pub value: String,
    /// The magnitude the operator entered, before unit conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    /// Range comparison applied to the metric: `gt`, `lt`, `gte` or `lte`.
    #[serde(default)]
    pub compare: String,
    /// Wire format `"<magnitude><scope-letter>"`, e.g. `"1d"`.
    #[serde(default)]
    pub window: String,
    /// Matching documents required inside the window before the alert fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_timestamp: Option<f64>,
}

pub const SEVERITIES: &[&str] = &["info", "warn", "critical"];

pub const COMPARISONS: &[(&str, &str)] = &[
    ("gt", ">"),
    ("gte", "≥"),
    ("lt", "<"),
    ("lte", "≤"),
];

impl MonitorRecord {
    pub fn is_collecting(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn collection_status(&self) -> CollectionStatus {
        CollectionStatus::derive(self.enabled, self.task_state.as_deref())
    }

    pub fn seconds_since_update(&self, now_epoch: f64) -> Option<i64> {
        self.task_timestamp
            .map(|ts| (now_epoch - ts).floor() as i64)
    }

    pub fn severity(&self) -> &str {
        self.severity.as_deref().unwrap_or("info")
    }

    /// `"array_name / vol_name"` for volume monitors, just the array pattern
    /// otherwise.
    pub fn scope_label(&self) -> String {
        if self.monitor_type == "vol" {
            format!("{} / {}", self.array_name, self.vol_name)
        } else {
            self.array_name.clone()
        }
    }

    /// Threshold as entered, e.g. `"5 ms"`, falling back to the raw value
    /// for records written before display values were kept.
    pub fn threshold_label(&self) -> String {
        let magnitude = self.display_value.as_deref().unwrap_or(&self.value);
        let unit = self
            .unit
            .as_deref()
            .map(|u| metrics::unit_label(&self.metric, u))
            .unwrap_or("");
        if unit.is_empty() {
            magnitude.to_string()
        } else {
            format!("{} {}", magnitude, unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> MonitorRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_deserialize_wire_type_field() {
        let monitor = record(
            r#"{"type": "vol", "array_name": "*", "vol_name": "db-*",
                "metric": "usec_per_read_op", "value": "5000", "compare": "gt",
                "window": "1d"}"#,
        );
        assert_eq!("vol", monitor.monitor_type);
        assert_eq!("* / db-*", monitor.scope_label());
    }

    #[test]
    fn should_default_severity_to_info() {
        let monitor = record(r#"{"type": "array"}"#);
        assert_eq!("info", monitor.severity());
    }

    #[test]
    fn should_label_threshold_from_display_value() {
        let monitor = record(
            r#"{"type": "array", "metric": "usec_per_read_op",
                "value": "5000", "display_value": "5", "unit": "ms"}"#,
        );
        assert_eq!("5 ms", monitor.threshold_label());
    }

    #[test]
    fn should_fall_back_to_raw_value_without_display_value() {
        let monitor = record(
            r#"{"type": "array", "metric": "usec_per_read_op", "value": "5000"}"#,
        );
        assert_eq!("5000", monitor.threshold_label());
    }

    #[test]
    fn should_report_paused_when_disabled() {
        let monitor = record(r#"{"type": "array", "enabled": false, "task_state": "SUCCESS"}"#);
        assert_eq!(CollectionStatus::Paused, monitor.collection_status());
    }

    #[test]
    fn should_round_trip_through_json() {
        let monitor = record(
            r#"{"id": "m-1", "type": "array", "array_name": "*", "vol_name": "*",
                "metric": "queue_depth", "value": "64", "compare": "gt",
                "window": "2h", "hits": 3, "severity": "critical",
                "data_ttl": "90d", "frequency": 60}"#,
        );
        let json = serde_json::to_value(&monitor).unwrap();
        assert_eq!("array", json["type"]);
        assert_eq!("2h", json["window"]);
        assert_eq!(3, json["hits"]);
    }
}
