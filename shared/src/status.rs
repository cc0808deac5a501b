use std::fmt::{Display, Formatter};

/// Derived display state of a record's background collection task.
///
/// The three states are mutually exclusive: a record that never ran reports
/// `NotStarted` even while disabled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CollectionStatus {
    NotStarted,
    Paused,
    Task(String),
}

impl CollectionStatus {
    pub fn derive(enabled: Option<bool>, task_state: Option<&str>) -> Self {
        match task_state {
            None => CollectionStatus::NotStarted,
            Some(state) => {
                if !enabled.unwrap_or(true) {
                    CollectionStatus::Paused
                } else {
                    CollectionStatus::Task(state.to_string())
                }
            }
        }
    }
}

impl Display for CollectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionStatus::NotStarted => write!(f, "NOT STARTED"),
            CollectionStatus::Paused => write!(f, "PAUSED"),
            CollectionStatus::Task(state) => write!(f, "{}", state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_not_started_without_task_state() {
        let status = CollectionStatus::derive(None, None);
        assert_eq!(CollectionStatus::NotStarted, status);
    }

    #[test]
    fn should_report_not_started_even_when_disabled() {
        let status = CollectionStatus::derive(Some(false), None);
        assert_eq!(CollectionStatus::NotStarted, status);
    }

    #[test]
    fn should_report_paused_when_disabled_regardless_of_task_state() {
        let status = CollectionStatus::derive(Some(false), Some("SUCCESS"));
        assert_eq!(CollectionStatus::Paused, status);
    }

    #[test]
    fn should_report_task_state_when_enabled() {
        let status = CollectionStatus::derive(Some(true), Some("FAILURE"));
        assert_eq!(CollectionStatus::Task("FAILURE".into()), status);
    }

    #[test]
    fn should_treat_absent_enabled_flag_as_enabled() {
        let status = CollectionStatus::derive(None, Some("SUCCESS"));
        assert_eq!(CollectionStatus::Task("SUCCESS".into()), status);
    }

    #[test]
    fn should_display_labels() {
        assert_eq!("NOT STARTED", CollectionStatus::NotStarted.to_string());
        assert_eq!("PAUSED", CollectionStatus::Paused.to_string());
        assert_eq!("RUNNING", CollectionStatus::Task("RUNNING".into()).to_string());
    }
}
