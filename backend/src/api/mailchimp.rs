use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::ApiError;
use crate::handlers::waitlist_dtos::WaitlistSignupRequest;
use crate::utils::validation::truncate_chars;

const PAIN_MERGE_FIELD_LEN: usize = 50;

#[derive(Debug, Clone)]
pub struct MailchimpConfig {
    pub api_key: String,
    /// Data centre prefix, e.g. `us21`
    pub server_prefix: String,
    pub audience_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MailchimpMember {
    pub id: Option<String>,
    pub status: Option<String>,
}

pub struct MailchimpClient {
    config: MailchimpConfig,
    http: Client,
}

impl MailchimpClient {
    pub fn new(config: MailchimpConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    fn members_url(&self) -> String {
        format!(
            "https://{}.api.mailchimp.com/3.0/lists/{}/members",
            self.config.server_prefix, self.config.audience_id
        )
    }

    /// Adds the signup as a pending (double opt-in) audience member.
    pub async fn add_member(
        &self,
        signup: &WaitlistSignupRequest,
    ) -> Result<MailchimpMember, ApiError> {
        let auth = format!("founderfund:{}", self.config.api_key);
        let encoded_auth = BASE64.encode(auth.as_bytes());

        let body = json!({
            "email_address": signup.email,
            "status": "pending",
            "merge_fields": merge_fields(signup),
        });

        let response = self
            .http
            .post(self.members_url())
            .header("Authorization", format!("Basic {}", encoded_auth))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Mailchimp(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Mailchimp(format!("{}: {}", status, error_text)));
        }

        response
            .json::<MailchimpMember>()
            .await
            .map_err(|e| ApiError::Mailchimp(format!("Unexpected response: {}", e)))
    }
}

pub fn merge_fields(signup: &WaitlistSignupRequest) -> Value {
    let stage = signup
        .founder_stage
        .map(|stage| stage.as_str())
        .or_else(|| signup.funding_stage.map(|stage| stage.as_str()))
        .unwrap_or("N/A");
    json!({
        "ROLE": signup.role.as_str(),
        "STAGE": stage,
        "PAIN": truncate_chars(&signup.biggest_pain, PAIN_MERGE_FIELD_LEN),
    })
}
