/// Monitor evaluation windows travel on the wire as one string combining an
/// integer magnitude with a scope letter (`"1d"`, `"30m"`), matching the
/// date-math range filter the backend feeds to its search queries.
pub const SCOPES: &[(&str, &str)] = &[
    ("m", "minutes"),
    ("h", "hours"),
    ("d", "days"),
    ("w", "weeks"),
];

/// `"1d"` -> (`"1"`, `"d"`). A trailing non-letter leaves the scope empty so
/// that `join` reproduces the original string.
pub fn split(wire: &str) -> (String, String) {
    match wire.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => {
            let magnitude = &wire[..wire.len() - c.len_utf8()];
            (magnitude.to_string(), c.to_string())
        }
        _ => (wire.to_string(), String::new()),
    }
}

pub fn join(magnitude: &str, scope: &str) -> String {
    format!("{}{}", magnitude, scope)
}
