use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    handlers::waitlist_dtos::{
        WaitlistSignupRequest, WaitlistSignupResponse, WaitlistStats, DUPLICATE_EMAIL_MESSAGE,
    },
    models::waitlist_models::WaitlistEntry,
    AppState,
};

pub async fn signup_waitlist(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WaitlistSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WaitlistSignupResponse>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let signup = payload.validate()?;

    if state.waitlist_repository.email_exists(&signup.email)? {
        tracing::debug!("Rejecting duplicate waitlist signup");
        return Err(ApiError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
    }

    let mut entry = WaitlistEntry {
        id: uuid::Uuid::new_v4().to_string(),
        email: signup.email.clone(),
        role: signup.role.as_str().to_string(),
        founder_stage: signup.founder_stage.map(|stage| stage.as_str().to_string()),
        funding_stage: signup.funding_stage.map(|stage| stage.as_str().to_string()),
        biggest_pain: signup.biggest_pain.clone(),
        detailed_pain: signup.detailed_pain.clone(),
        created_at: Utc::now().to_rfc3339(),
        mailchimp_id: None,
        mailchimp_status: None,
    };

    // A failed sync never blocks the signup itself.
    let mut mailchimp_synced = false;
    if let Some(mailchimp) = &state.mailchimp {
        match mailchimp.add_member(&signup).await {
            Ok(member) => {
                entry.mailchimp_id = member.id;
                entry.mailchimp_status = member.status;
                mailchimp_synced = true;
            }
            Err(e) => tracing::warn!("Mailchimp sync failed: {}", e),
        }
    }

    state.waitlist_repository.create_entry(&entry)?;
    tracing::info!(
        "New waitlist signup {} (role: {}, mailchimp: {})",
        entry.id,
        entry.role,
        mailchimp_synced
    );

    Ok((
        StatusCode::CREATED,
        Json(WaitlistSignupResponse::from_entry(&entry, mailchimp_synced)),
    ))
}

pub async fn get_waitlist_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WaitlistStats>, ApiError> {
    let stats = state.waitlist_repository.stats()?;
    Ok(Json(stats))
}
