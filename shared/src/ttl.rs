/// Retention periods travel on the wire as `<integer>d` (Elasticsearch TTL
/// syntax, e.g. `"90d"`). Edit forms work on the bare day count, so the
/// suffix is stripped on load and re-appended on save; the round trip must
/// be lossless.
const DAY_SUFFIX: char = 'd';

/// `"90d"` -> `"90"`. A value without the suffix passes through unchanged.
pub fn to_days(wire: &str) -> String {
    wire.strip_suffix(DAY_SUFFIX).unwrap_or(wire).to_string()
}

/// `"90"` -> `"90d"`.
pub fn to_wire(days: &str) -> String {
    format!("{}{}", days, DAY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_day_suffix() {
        assert_eq!("90", to_days("90d"));
        assert_eq!("0", to_days("0d"));
    }

    #[test]
    fn should_pass_through_without_suffix() {
        assert_eq!("90", to_days("90"));
    }

    #[test]
    fn should_append_day_suffix() {
        assert_eq!("90d", to_wire("90"));
    }

    #[test]
    fn should_round_trip_any_non_negative_magnitude() {
        for magnitude in [0u64, 1, 7, 30, 90, 365, 10_000] {
            let wire = format!("{}d", magnitude);
            assert_eq!(wire, to_wire(&to_days(&wire)));
        }
    }
}
