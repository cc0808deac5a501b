/// REST surface of the backend.
///
/// The trailing slash on the collection endpoints is significant: the server
/// rejects collection requests without it.
pub enum ApiEndpoint {
    Arrays,
    Array,
    Monitors,
    Monitor,
}

impl ApiEndpoint {
    pub fn to_str(&self) -> &'static str {
        match self {
            ApiEndpoint::Arrays => "rest/arrays/",
            ApiEndpoint::Array => "rest/arrays/{id}",
            ApiEndpoint::Monitors => "rest/monitors/",
            ApiEndpoint::Monitor => "rest/monitors/{id}",
        }
    }

    pub fn with_id(&self, id: &str) -> String {
        self.to_str().replace("{id}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_trailing_slash_on_collections() {
        assert!(ApiEndpoint::Arrays.to_str().ends_with('/'));
        assert!(ApiEndpoint::Monitors.to_str().ends_with('/'));
    }

    #[test]
    fn should_substitute_item_id() {
        assert_eq!("rest/arrays/a-1", ApiEndpoint::Array.with_id("a-1"));
        assert_eq!("rest/monitors/m-9", ApiEndpoint::Monitor.with_id("m-9"));
    }
}
