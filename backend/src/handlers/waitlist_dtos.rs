use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::waitlist_models::WaitlistEntry;
use crate::utils::validation::is_valid_email;

pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email is already on our waitlist. We'll be in touch soon!";

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Founder,
    Investor,
    Fund,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Founder => "Founder",
            Role::Investor => "Investor",
            Role::Fund => "Fund",
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FounderStage {
    Idea,
    #[serde(rename = "MVP")]
    Mvp,
    Revenue,
    Growth,
}

impl FounderStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FounderStage::Idea => "Idea",
            FounderStage::Mvp => "MVP",
            FounderStage::Revenue => "Revenue",
            FounderStage::Growth => "Growth",
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundingStage {
    #[serde(rename = "Pre-seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    Later,
}

impl FundingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStage::PreSeed => "Pre-seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::Later => "Later",
        }
    }
}

/// Body of `POST /api/waitlist`
#[derive(Deserialize, Clone, Debug)]
pub struct WaitlistSignupRequest {
    pub email: String,
    pub role: Role,
    pub founder_stage: Option<FounderStage>,
    pub funding_stage: Option<FundingStage>,
    pub biggest_pain: String,
    pub detailed_pain: Option<String>,
}

impl WaitlistSignupRequest {
    /// Trims the free-text fields and rejects what the JSON extractor cannot.
    pub fn validate(self) -> Result<Self, ApiError> {
        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(ApiError::Validation(
                "Please provide a valid email address".to_string(),
            ));
        }
        let biggest_pain = self.biggest_pain.trim().to_string();
        if biggest_pain.is_empty() {
            return Err(ApiError::Validation(
                "biggest_pain must not be empty".to_string(),
            ));
        }
        let detailed_pain = self
            .detailed_pain
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Self {
            email,
            biggest_pain,
            detailed_pain,
            ..self
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WaitlistSignupResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub mailchimp_synced: bool,
}

impl WaitlistSignupResponse {
    pub fn from_entry(entry: &WaitlistEntry, mailchimp_synced: bool) -> Self {
        Self {
            id: entry.id.clone(),
            email: entry.email.clone(),
            role: entry.role.clone(),
            created_at: entry.created_at.clone(),
            mailchimp_synced,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct WaitlistStats {
    pub total_signups: i64,
    pub founders: i64,
    pub investors: i64,
    pub funds: i64,
}

#[derive(Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<WaitlistSignupRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn optional_fields_may_be_null_or_missing() {
        let request = parse(json!({
            "email": "a@b.com",
            "role": "Investor",
            "funding_stage": "Seed",
            "founder_stage": null,
            "biggest_pain": "Managing deal flow efficiently"
        }))
        .unwrap();
        assert_eq!(request.role, Role::Investor);
        assert_eq!(request.funding_stage, Some(FundingStage::Seed));
        assert_eq!(request.founder_stage, None);
        assert_eq!(request.detailed_pain, None);
    }

    #[test]
    fn unknown_role_is_rejected_by_serde() {
        let result = parse(json!({
            "email": "a@b.com",
            "role": "Angel",
            "biggest_pain": "Other"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_trims_and_normalises() {
        let request = parse(json!({
            "email": "  a@b.com ",
            "role": "Founder",
            "founder_stage": "MVP",
            "biggest_pain": " Other ",
            "detailed_pain": "   "
        }))
        .unwrap()
        .validate()
        .unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.biggest_pain, "Other");
        assert_eq!(request.detailed_pain, None);
        assert_eq!(request.founder_stage, Some(FounderStage::Mvp));
    }

    #[test]
    fn validate_rejects_bad_email_and_blank_pain() {
        let bad_email = parse(json!({
            "email": "invalid-email",
            "role": "Fund",
            "biggest_pain": "Other"
        }))
        .unwrap();
        assert!(matches!(bad_email.validate(), Err(ApiError::Validation(_))));

        let blank_pain = parse(json!({
            "email": "a@b.com",
            "role": "Fund",
            "biggest_pain": "  "
        }))
        .unwrap();
        assert!(matches!(blank_pain.validate(), Err(ApiError::Validation(_))));
    }
}
