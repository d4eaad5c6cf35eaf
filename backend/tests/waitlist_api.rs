use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use founderfund_backend::{build_pool, config::AppConfig, router, run_migrations, AppState};

fn test_app() -> Router {
    let config = AppConfig {
        database_url: ":memory:".to_string(),
        ..AppConfig::default()
    };
    let pool = build_pool(&config.database_url).unwrap();
    run_migrations(&pool).unwrap();
    let state = Arc::new(AppState::new(pool, &config).unwrap());
    router(state, &config).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn founder_signup(email: &str) -> Value {
    json!({
        "email": email,
        "role": "Founder",
        "founder_stage": "MVP",
        "funding_stage": null,
        "biggest_pain": "Finding the right investors",
        "detailed_pain": null
    })
}

#[tokio::test]
async fn root_and_health_respond() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "FounderFund API");

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn signup_is_created() {
    let app = test_app();
    let (status, body) = send(&app, post_json("/api/waitlist", founder_signup("a@b.com"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["role"], "Founder");
    assert_eq!(body["mailchimp_synced"], false);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert!(!body["created_at"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_email_conflicts_regardless_of_case() {
    let app = test_app();
    let (status, _) = send(&app, post_json("/api/waitlist", founder_signup("a@b.com"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_json("/api/waitlist", founder_signup("A@B.com"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "This email is already on our waitlist. We'll be in touch soon!"
    );

    let (_, stats) = send(&app, get("/api/waitlist/stats")).await;
    assert_eq!(stats["total_signups"], 1);
}

#[tokio::test]
async fn invalid_payloads_are_unprocessable() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/api/waitlist", founder_signup("invalid-email"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let missing_role = json!({
        "email": "a@b.com",
        "biggest_pain": "Other"
    });
    let (status, _) = send(&app, post_json("/api/waitlist", missing_role)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown_role = json!({
        "email": "a@b.com",
        "role": "Angel",
        "biggest_pain": "Other"
    });
    let (status, _) = send(&app, post_json("/api/waitlist", unknown_role)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, stats) = send(&app, get("/api/waitlist/stats")).await;
    assert_eq!(stats["total_signups"], 0);
}

#[tokio::test]
async fn stats_count_each_role() {
    let app = test_app();
    let signups = [
        json!({"email": "f1@x.com", "role": "Founder", "founder_stage": "Idea", "biggest_pain": "Other"}),
        json!({"email": "f2@x.com", "role": "Founder", "founder_stage": "Growth", "biggest_pain": "Other"}),
        json!({"email": "i1@x.com", "role": "Investor", "funding_stage": "Seed", "biggest_pain": "Other"}),
        json!({"email": "v1@x.com", "role": "Fund", "funding_stage": "Later", "biggest_pain": "Other",
               "detailed_pain": "  "}),
    ];
    for signup in signups {
        let (status, _) = send(&app, post_json("/api/waitlist", signup)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, stats) = send(&app, get("/api/waitlist/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({"total_signups": 4, "founders": 2, "investors": 1, "funds": 1})
    );
}

#[tokio::test]
async fn status_checks_are_recorded_and_listed() {
    let app = test_app();
    let (status, created) = send(
        &app,
        post_json("/api/status", json!({ "client_name": "uptime-monitor" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["client_name"], "uptime-monitor");

    let (status, checks) = send(&app, get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    let checks = checks.as_array().unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0]["id"], created["id"]);
}
