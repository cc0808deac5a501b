//! Draft/commit logic behind the add and edit forms.
//!
//! A draft is a deep copy of a record reshaped for form binding: retention
//! and window suffixes stripped to bare integers, the array password seeded
//! with the record's own id as a sentinel meaning "unchanged". Committing a
//! draft reverses the reshaping and produces the wire payload.

use serde::Serialize;

use crate::array::ArrayRecord;
use crate::monitor::MonitorRecord;
use crate::{metrics, ttl, window};

pub const DEFAULT_TTL_DAYS: &str = "90";
pub const DEFAULT_FREQUENCY_SECS: &str = "60";

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDraft {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Bare day count; the `d` suffix is re-appended on save.
    pub data_ttl_days: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrayCreatePayload {
    pub host: String,
    pub username: String,
    pub password: String,
    pub data_ttl: String,
    pub frequency: u32,
}

/// Update body for `PUT rest/arrays/:id`. Credentials are present only when
/// the operator changed them; the backend re-probes the array iff both keys
/// arrive.
#[derive(Debug, Clone, Serialize)]
pub struct ArrayUpdatePayload {
    pub host: String,
    pub data_ttl: String,
    pub frequency: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ArrayDraft {
    pub fn new() -> Self {
        ArrayDraft {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            data_ttl_days: DEFAULT_TTL_DAYS.to_string(),
            frequency: DEFAULT_FREQUENCY_SECS.to_string(),
        }
    }

    /// Opens an edit session for `record`.
    ///
    /// The server never returns the password, so the form field is seeded
    /// with the record's own id. That sentinel is not a credential: it only
    /// signals "unchanged" to [`ArrayDraft::update_payload`].
    pub fn edit(record: &ArrayRecord) -> Self {
        ArrayDraft {
            host: record.host.clone(),
            username: record.username.clone().unwrap_or_default(),
            password: record.id.clone().unwrap_or_default(),
            data_ttl_days: record
                .data_ttl
                .as_deref()
                .map(ttl::to_days)
                .unwrap_or_else(|| DEFAULT_TTL_DAYS.to_string()),
            frequency: record
                .frequency
                .map(|f| f.to_string())
                .unwrap_or_else(|| DEFAULT_FREQUENCY_SECS.to_string()),
        }
    }

    pub fn create_payload(&self) -> ArrayCreatePayload {
        ArrayCreatePayload {
            host: self.host.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            data_ttl: ttl::to_wire(&self.data_ttl_days),
            frequency: self.frequency.parse().unwrap_or(60),
        }
    }

    pub fn update_payload(&self, original: &ArrayRecord) -> ArrayUpdatePayload {
        let username_unchanged =
            self.username == original.username.clone().unwrap_or_default();
        let password_untouched =
            self.password == original.id.clone().unwrap_or_default();
        let (username, password) = if username_unchanged && password_untouched {
            (None, None)
        } else {
            (Some(self.username.clone()), Some(self.password.clone()))
        };
        ArrayUpdatePayload {
            host: self.host.clone(),
            data_ttl: ttl::to_wire(&self.data_ttl_days),
            frequency: self.frequency.parse().unwrap_or(60),
            username,
            password,
        }
    }
}

impl Default for ArrayDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorDraft {
    pub name: String,
    /// `"array"` or `"vol"`.
    pub monitor_type: String,
    pub array_name: String,
    pub vol_name: String,
    pub metric: String,
    pub unit: String,
    /// Threshold magnitude as typed, in the selected display unit.
    pub value: String,
    pub compare: String,
    pub window_magnitude: String,
    pub window_scope: String,
    pub hits: String,
    pub severity: String,
    pub data_ttl_days: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub array_name: String,
    pub vol_name: String,
    pub metric: String,
    pub unit: String,
    pub value: String,
    pub display_value: String,
    pub compare: String,
    pub window: String,
    pub hits: u32,
    pub severity: String,
    pub data_ttl: String,
    pub frequency: u32,
}

impl MonitorDraft {
    pub fn new() -> Self {
        MonitorDraft {
            name: String::new(),
            monitor_type: "array".to_string(),
            array_name: "*".to_string(),
            vol_name: "*".to_string(),
            metric: "usec_per_read_op".to_string(),
            unit: "us".to_string(),
            value: String::new(),
            compare: "gt".to_string(),
            window_magnitude: "1".to_string(),
            window_scope: "d".to_string(),
            hits: "1".to_string(),
            severity: "info".to_string(),
            data_ttl_days: DEFAULT_TTL_DAYS.to_string(),
            frequency: DEFAULT_FREQUENCY_SECS.to_string(),
        }
    }

    pub fn edit(record: &MonitorRecord) -> Self {
        let (window_magnitude, window_scope) = window::split(&record.window);
        let unit = record
            .unit
            .clone()
            .or_else(|| {
                metrics::units_for(&record.metric)
                    .first()
                    .map(|u| u.id.to_string())
            })
            .unwrap_or_default();
        MonitorDraft {
            name: record.name.clone().unwrap_or_default(),
            monitor_type: if record.monitor_type.is_empty() {
                "array".to_string()
            } else {
                record.monitor_type.clone()
            },
            array_name: record.array_name.clone(),
            vol_name: record.vol_name.clone(),
            metric: record.metric.clone(),
            unit,
            value: record
                .display_value
                .clone()
                .unwrap_or_else(|| record.value.clone()),
            compare: if record.compare.is_empty() {
                "gt".to_string()
            } else {
                record.compare.clone()
            },
            window_magnitude,
            window_scope,
            hits: record.hits.unwrap_or(1).to_string(),
            severity: record.severity().to_string(),
            data_ttl_days: record
                .data_ttl
                .as_deref()
                .map(ttl::to_days)
                .unwrap_or_else(|| DEFAULT_TTL_DAYS.to_string()),
            frequency: record
                .frequency
                .map(|f| f.to_string())
                .unwrap_or_else(|| DEFAULT_FREQUENCY_SECS.to_string()),
        }
    }

    /// Wire body for both create and full update. The raw `value` is the
    /// entered magnitude converted into the metric's canonical unit;
    /// `display_value` and `unit` keep the original entry for later edits.
    pub fn payload(&self) -> MonitorPayload {
        MonitorPayload {
            name: if self.name.trim().is_empty() {
                None
            } else {
                Some(self.name.trim().to_string())
            },
            monitor_type: self.monitor_type.clone(),
            array_name: self.array_name.clone(),
            vol_name: self.vol_name.clone(),
            metric: self.metric.clone(),
            unit: self.unit.clone(),
            value: metrics::convert(&self.value, &self.metric, &self.unit),
            display_value: self.value.clone(),
            compare: self.compare.clone(),
            window: window::join(&self.window_magnitude, &self.window_scope),
            hits: self.hits.parse().unwrap_or(1),
            severity: self.severity.clone(),
            data_ttl: ttl::to_wire(&self.data_ttl_days),
            frequency: self.frequency.parse().unwrap_or(60),
        }
    }
}

impl Default for MonitorDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array_record() -> ArrayRecord {
        serde_json::from_str(
            r#"{
                "id": "a-1", "name": "pure01", "host": "pure01.example.com",
                "username": "pureuser", "data_ttl": "90d", "frequency": 60
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn should_seed_array_edit_draft() {
        let draft = ArrayDraft::edit(&array_record());
        assert_eq!("pure01.example.com", draft.host);
        assert_eq!("pureuser", draft.username);
        // password field carries the id sentinel, not a credential
        assert_eq!("a-1", draft.password);
        assert_eq!("90", draft.data_ttl_days);
        assert_eq!("60", draft.frequency);
    }

    #[test]
    fn should_omit_credentials_when_unchanged() {
        let original = array_record();
        let draft = ArrayDraft::edit(&original);
        let json = serde_json::to_value(draft.update_payload(&original)).unwrap();
        assert!(json.get("username").is_none());
        assert!(json.get("password").is_none());
        assert_eq!("90d", json["data_ttl"]);
        assert_eq!(60, json["frequency"]);
    }

    #[test]
    fn should_send_both_credentials_when_password_changed() {
        let original = array_record();
        let mut draft = ArrayDraft::edit(&original);
        draft.password = "s3cret".to_string();
        let json = serde_json::to_value(draft.update_payload(&original)).unwrap();
        assert_eq!("pureuser", json["username"]);
        assert_eq!("s3cret", json["password"]);
    }

    #[test]
    fn should_send_both_credentials_when_username_changed() {
        let original = array_record();
        let mut draft = ArrayDraft::edit(&original);
        draft.username = "other".to_string();
        let json = serde_json::to_value(draft.update_payload(&original)).unwrap();
        assert_eq!("other", json["username"]);
        // still the sentinel text, but the backend gets to decide that
        assert_eq!("a-1", json["password"]);
    }

    #[test]
    fn should_round_trip_retention_through_edit_session() {
        let original = array_record();
        let draft = ArrayDraft::edit(&original);
        let payload = draft.update_payload(&original);
        assert_eq!("90d", payload.data_ttl);
    }

    #[test]
    fn should_default_new_array_draft() {
        let draft = ArrayDraft::new();
        assert_eq!("90", draft.data_ttl_days);
        assert_eq!("60", draft.frequency);
        let payload = draft.create_payload();
        assert_eq!("90d", payload.data_ttl);
        assert_eq!(60, payload.frequency);
    }

    #[test]
    fn should_default_new_monitor_draft() {
        let draft = MonitorDraft::new();
        assert_eq!("array", draft.monitor_type);
        assert_eq!("*", draft.array_name);
        assert_eq!("*", draft.vol_name);
        assert_eq!(("1".to_string(), "d".to_string()), (draft.window_magnitude.clone(), draft.window_scope.clone()));
        assert_eq!("info", draft.severity);
    }

    #[test]
    fn should_convert_threshold_into_canonical_unit() {
        let mut draft = MonitorDraft::new();
        draft.metric = "usec_per_read_op".to_string();
        draft.unit = "ms".to_string();
        draft.value = "5".to_string();
        let payload = draft.payload();
        assert_eq!("5000", payload.value);
        assert_eq!("5", payload.display_value);
        assert_eq!("ms", payload.unit);
    }

    #[test]
    fn should_round_trip_window_through_edit_session() {
        let record: MonitorRecord = serde_json::from_str(
            r#"{"type": "vol", "array_name": "*", "vol_name": "db-*",
                "metric": "usec_per_read_op", "unit": "ms", "value": "5000",
                "display_value": "5", "compare": "gt", "window": "12h",
                "data_ttl": "30d"}"#,
        )
        .unwrap();
        let draft = MonitorDraft::edit(&record);
        assert_eq!("12", draft.window_magnitude);
        assert_eq!("h", draft.window_scope);
        assert_eq!("30", draft.data_ttl_days);
        // edit shows the original entry, not the converted raw number
        assert_eq!("5", draft.value);

        let payload = draft.payload();
        assert_eq!("12h", payload.window);
        assert_eq!("30d", payload.data_ttl);
        assert_eq!("5000", payload.value);
    }

    #[test]
    fn should_omit_empty_monitor_name() {
        let json = serde_json::to_value(MonitorDraft::new().payload()).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!("array", json["type"]);
    }
}
