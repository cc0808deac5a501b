use chrono::DateTime;

/// Humanized "time ago" text for a last-collection timestamp, plus an exact
/// label for tooltips. Both take the current epoch explicitly so callers on
/// the UI side can drive them from one shared clock signal.
pub fn from_epoch(epoch: Option<f64>, now_epoch: f64) -> String {
    match epoch {
        None => "-".to_string(),
        Some(ts) => humanize((now_epoch - ts).floor() as i64),
    }
}

pub fn humanize(delta_secs: i64) -> String {
    if delta_secs < 0 {
        return "just now".to_string();
    }
    match delta_secs {
        0..=4 => "just now".to_string(),
        5..=59 => format!("{} seconds ago", delta_secs),
        60..=119 => "a minute ago".to_string(),
        120..=3_599 => format!("{} minutes ago", delta_secs / 60),
        3_600..=7_199 => "an hour ago".to_string(),
        7_200..=86_399 => format!("{} hours ago", delta_secs / 3_600),
        86_400..=172_799 => "a day ago".to_string(),
        _ => format!("{} days ago", delta_secs / 86_400),
    }
}

/// `"2023-11-14 22:13:20 UTC"` for a tooltip; empty when the timestamp is
/// absent or out of range.
pub fn timestamp_label(epoch: Option<f64>) -> String {
    epoch
        .and_then(|ts| DateTime::from_timestamp(ts as i64, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_dash_without_timestamp() {
        assert_eq!("-", from_epoch(None, 1_700_000_000.0));
    }

    #[test]
    fn should_humanize_ranges() {
        assert_eq!("just now", humanize(0));
        assert_eq!("30 seconds ago", humanize(30));
        assert_eq!("a minute ago", humanize(75));
        assert_eq!("5 minutes ago", humanize(300));
        assert_eq!("an hour ago", humanize(3_700));
        assert_eq!("3 hours ago", humanize(11_000));
        assert_eq!("a day ago", humanize(100_000));
        assert_eq!("4 days ago", humanize(400_000));
    }

    #[test]
    fn should_clamp_clock_skew_to_just_now() {
        assert_eq!("just now", humanize(-10));
        assert_eq!("just now", from_epoch(Some(1_700_000_100.0), 1_700_000_000.0));
    }

    #[test]
    fn should_format_timestamp_label() {
        assert_eq!(
            "2023-11-14 22:13:20 UTC",
            timestamp_label(Some(1_700_000_000.0))
        );
        assert_eq!("", timestamp_label(None));
    }
}
