use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{
    error::ApiError,
    handlers::waitlist_dtos::StatusCheckCreate,
    models::waitlist_models::StatusCheck,
    AppState,
};

const MAX_STATUS_CHECKS: i64 = 1000;

pub async fn api_root() -> Json<Value> {
    Json(json!({ "message": "FounderFund API" }))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let check = StatusCheck {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: payload.client_name,
        timestamp: Utc::now().to_rfc3339(),
    };
    state.waitlist_repository.record_status_check(&check)?;
    Ok(Json(check))
}

pub async fn get_status_checks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.waitlist_repository.list_status_checks(MAX_STATUS_CHECKS)?;
    Ok(Json(checks))
}
