use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Backend base URL, baked in at build time through `BACKEND_URL`.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_BACKEND_URL,
    }
}

/// Everything the waitlist form needs to reach the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitlistConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl WaitlistConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self::new(get_backend_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = WaitlistConfig::new("https://api.founderfund.io/");
        assert_eq!(config.base_url, "https://api.founderfund.io");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn timeout_can_be_overridden() {
        let config = WaitlistConfig::new("http://x").with_timeout(Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_millis(250));
    }
}
