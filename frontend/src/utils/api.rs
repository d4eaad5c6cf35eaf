use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::utils::console;

/// Thin request builder bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct Api {
    base_url: String,
}

/// Request wrapper that knows its path and can race the send against a timeout
pub struct RequestWrapper {
    request: Request,
    path: String,
    timeout: Option<Duration>,
}

pub fn timeout_error(path: &str, millis: u32) -> GlooError {
    GlooError::GlooError(format!("request to {} timed out after {}ms", path, millis))
}

/// Resolves to `work`'s result unless `deadline` finishes first, in which
/// case `on_timeout` supplies the error.
pub async fn race_deadline<T, W, D>(
    work: W,
    deadline: D,
    on_timeout: impl FnOnce() -> GlooError,
) -> Result<T, GlooError>
where
    W: Future<Output = Result<T, GlooError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(on_timeout()),
    }
}

impl RequestWrapper {
    fn new(request: Request, path: &str) -> Self {
        Self {
            request: request.credentials(RequestCredentials::SameOrigin),
            path: path.to_string(),
            timeout: None,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Give up on the response after `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let Some(timeout) = self.timeout else {
            return self.request.send().await;
        };

        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let path = self.path;
        race_deadline(self.request.send(), TimeoutFuture::new(millis), || {
            console::log(&format!("Request to {} timed out after {}ms", path, millis));
            timeout_error(&path, millis)
        })
        .await
    }
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a POST request against the backend
    pub fn post(&self, path: &str) -> RequestWrapper {
        let full_url = format!("{}{}", self.base_url, path);
        RequestWrapper::new(Request::post(&full_url), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn deadline_wins_over_a_stalled_request() {
        let result: Result<u16, GlooError> = block_on(race_deadline(
            pending(),
            ready(()),
            || timeout_error("/api/waitlist", 15_000),
        ));
        match result {
            Err(GlooError::GlooError(message)) => {
                assert_eq!(message, "request to /api/waitlist timed out after 15000ms")
            }
            other => panic!("expected a timeout error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn finished_request_beats_a_pending_deadline() {
        let result = block_on(race_deadline(ready(Ok(201u16)), pending(), || {
            panic!("deadline should not fire")
        }));
        assert_eq!(result.ok(), Some(201));
    }

    #[test]
    fn request_errors_pass_through_unchanged() {
        let result: Result<u16, GlooError> = block_on(race_deadline(
            ready(Err(GlooError::GlooError("network down".to_string()))),
            pending(),
            || timeout_error("/x", 1),
        ));
        assert!(matches!(result, Err(GlooError::GlooError(message)) if message == "network down"));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(Api::new("https://api.example.com/").base_url(), "https://api.example.com");
    }
}
