use std::time::Duration;

use async_trait::async_trait;
use gloo_net::Error as GlooError;
use serde::Serialize;
use thiserror::Error;

use crate::config::WaitlistConfig;
use crate::utils::api::Api;
use crate::utils::console;
use crate::waitlist::draft::{FounderStage, FundingStage, Role};

pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Body of `POST /api/waitlist`. Unset optionals go out as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaitlistSignupRequest {
    pub email: String,
    pub role: Role,
    pub founder_stage: Option<FounderStage>,
    pub funding_stage: Option<FundingStage>,
    pub biggest_pain: String,
    pub detailed_pain: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("email is already on the waitlist")]
    Conflict,
    #[error("waitlist request failed: {0}")]
    Transient(String),
}

/// Maps a response status onto the three outcomes the form cares about.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    match status {
        200..=299 => Ok(()),
        409 => Err(SubmitError::Conflict),
        other => Err(SubmitError::Transient(format!("unexpected status {}", other))),
    }
}

/// Folds a send result (status code or transport error, timeouts included)
/// into a submit outcome.
pub fn settle_response(sent: Result<u16, GlooError>) -> Result<(), SubmitError> {
    match sent {
        Ok(status) => classify_status(status),
        Err(e) => Err(SubmitError::Transient(e.to_string())),
    }
}

#[async_trait(?Send)]
pub trait WaitlistClient {
    async fn join(&self, request: &WaitlistSignupRequest) -> Result<(), SubmitError>;
}

/// Talks to the real backend over fetch.
#[derive(Clone, Debug)]
pub struct HttpWaitlistClient {
    api: Api,
    timeout: Duration,
}

impl HttpWaitlistClient {
    pub fn new(config: &WaitlistConfig) -> Self {
        Self {
            api: Api::new(config.base_url.clone()),
            timeout: config.request_timeout,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api.base_url(), WAITLIST_PATH)
    }
}

#[async_trait(?Send)]
impl WaitlistClient for HttpWaitlistClient {
    async fn join(&self, request: &WaitlistSignupRequest) -> Result<(), SubmitError> {
        let wrapper = self
            .api
            .post(WAITLIST_PATH)
            .timeout(self.timeout)
            .json(request)
            .map_err(|e| SubmitError::Transient(format!("could not encode signup: {}", e)))?;

        let outcome = settle_response(wrapper.send().await.map(|response| response.status()));
        if let Err(SubmitError::Transient(cause)) = &outcome {
            console::error(&format!("Waitlist request to {} failed: {}", self.endpoint(), cause));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::api::{race_deadline, timeout_error};
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use serde_json::json;

    #[test]
    fn status_classification() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(201), Ok(()));
        assert_eq!(classify_status(204), Ok(()));
        assert_eq!(classify_status(409), Err(SubmitError::Conflict));
        for status in [400, 404, 422, 429, 500, 502, 503] {
            assert!(matches!(classify_status(status), Err(SubmitError::Transient(_))));
        }
    }

    #[test]
    fn unset_fields_serialize_as_null() {
        let request = WaitlistSignupRequest {
            email: "a@b.com".to_string(),
            role: Role::Founder,
            founder_stage: Some(FounderStage::Mvp),
            funding_stage: None,
            biggest_pain: "Finding relevant investors or startups".to_string(),
            detailed_pain: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "a@b.com",
                "role": "Founder",
                "founder_stage": "MVP",
                "funding_stage": null,
                "biggest_pain": "Finding relevant investors or startups",
                "detailed_pain": null,
            })
        );
    }

    #[test]
    fn transport_failures_and_timeouts_are_transient() {
        match settle_response(Err(timeout_error(WAITLIST_PATH, 15_000))) {
            Err(SubmitError::Transient(cause)) => assert!(cause.contains("timed out after 15000ms")),
            other => panic!("expected a transient failure, got {:?}", other),
        }

        let offline = settle_response(Err(GlooError::GlooError("failed to fetch".to_string())));
        assert!(matches!(offline, Err(SubmitError::Transient(_))));

        assert_eq!(settle_response(Ok(201)), Ok(()));
        assert_eq!(settle_response(Ok(409)), Err(SubmitError::Conflict));
    }

    #[test]
    fn stalled_request_settles_as_transient() {
        let sent = block_on(race_deadline(pending::<Result<u16, GlooError>>(), ready(()), || {
            timeout_error(WAITLIST_PATH, 1)
        }));
        assert!(matches!(settle_response(sent), Err(SubmitError::Transient(_))));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = HttpWaitlistClient::new(&WaitlistConfig::new("https://api.example.com/"));
        assert_eq!(client.endpoint(), "https://api.example.com/api/waitlist");
    }
}
