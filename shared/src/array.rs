use serde::{Deserialize, Serialize};

use crate::status::CollectionStatus;

/// A monitored storage-array endpoint as returned by `GET rest/arrays/`.
///
/// The password is write-only: the server strips it on create and never
/// returns it, so it has no field here. Everything except `host` is filled
/// in server-side (probe results, task bookkeeping) and may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity_version: Option<String>,
    /// Wire format `"<days>d"`, e.g. `"90d"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ttl: Option<String>,
    /// Collection interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_state: Option<String>,
    /// Epoch seconds of the last collection run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_timestamp: Option<f64>,
}

impl ArrayRecord {
    pub fn is_collecting(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn collection_status(&self) -> CollectionStatus {
        CollectionStatus::derive(self.enabled, self.task_state.as_deref())
    }

    /// Whole seconds between the last collection run and `now_epoch`.
    pub fn seconds_since_update(&self, now_epoch: f64) -> Option<i64> {
        self.task_timestamp
            .map(|ts| (now_epoch - ts).floor() as i64)
    }

    /// Display name, falling back to the host until the backend has probed
    /// the array.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ArrayRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_deserialize_minimal_record() {
        let array = record(r#"{"host": "pure01.example.com"}"#);
        assert_eq!("pure01.example.com", array.host);
        assert!(array.is_collecting());
        assert_eq!(CollectionStatus::NotStarted, array.collection_status());
    }

    #[test]
    fn should_deserialize_full_record() {
        let array = record(
            r#"{
                "id": "a-1", "name": "pure01", "host": "pure01.example.com",
                "username": "pureuser", "purity_version": "4.8.0",
                "data_ttl": "90d", "frequency": 60, "enabled": true,
                "task_state": "SUCCESS", "task_timestamp": 1700000000
            }"#,
        );
        assert_eq!(Some("a-1".into()), array.id);
        assert_eq!(Some("90d".into()), array.data_ttl);
        assert_eq!(CollectionStatus::Task("SUCCESS".into()), array.collection_status());
    }

    #[test]
    fn should_report_paused_immediately_after_local_toggle() {
        let mut array = record(r#"{"host": "h", "task_state": "SUCCESS"}"#);
        assert_eq!(CollectionStatus::Task("SUCCESS".into()), array.collection_status());

        array.enabled = Some(false);
        assert_eq!(CollectionStatus::Paused, array.collection_status());
    }

    #[test]
    fn should_compute_seconds_since_update() {
        let array = record(r#"{"host": "h", "task_timestamp": 1700000000}"#);
        assert_eq!(Some(42), array.seconds_since_update(1_700_000_042.9));
        assert_eq!(None, ArrayRecord::default().seconds_since_update(1.0));
    }

    #[test]
    fn should_fall_back_to_host_for_display_name() {
        let array = record(r#"{"host": "pure01.example.com"}"#);
        assert_eq!("pure01.example.com", array.display_name());
    }
}
