use serde::Deserialize;

/// Error body the backend attaches to rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Replaces two known array-creation failure messages with friendlier text;
/// every other message is shown to the operator verbatim.
pub fn friendly_array_create_error(message: &str) -> String {
    if message.contains("Invalid argument") {
        "Unreachable array hostname, please try again.".to_string()
    } else if message.contains("invalid credentials") {
        "Invalid credentials, please try again.".to_string()
    } else {
        message.to_string()
    }
}
