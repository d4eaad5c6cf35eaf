use std::sync::Arc;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod schema;
pub mod handlers {
    pub mod status_handlers;
    pub mod waitlist_dtos;
    pub mod waitlist_handlers;
}
pub mod api {
    pub mod mailchimp;
}
pub mod models {
    pub mod waitlist_models;
}
pub mod repositories {
    pub mod waitlist_repository;
}
pub mod utils {
    pub mod validation;
}

use api::mailchimp::MailchimpClient;
use config::AppConfig;
use error::ApiError;
use handlers::{status_handlers, waitlist_handlers};
use repositories::waitlist_repository::WaitlistRepository;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct AppState {
    pub waitlist_repository: Arc<WaitlistRepository>,
    pub mailchimp: Option<Arc<MailchimpClient>>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &AppConfig) -> Result<Self, ApiError> {
        let mailchimp = match &config.mailchimp {
            Some(mailchimp_config) => Some(Arc::new(MailchimpClient::new(mailchimp_config.clone())?)),
            None => None,
        };
        Ok(Self {
            waitlist_repository: Arc::new(WaitlistRepository::new(pool)),
            mailchimp,
        })
    }
}

/// Every `:memory:` connection is its own database, so those pools hold a
/// single connection for their whole life.
pub fn build_pool(database_url: &str) -> Result<DbPool, ApiError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = if database_url == ":memory:" {
        r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        r2d2::Pool::builder()
    };
    Ok(builder.build(manager)?)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), ApiError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ApiError::Migration(e.to_string()))?;
    if !applied.is_empty() {
        tracing::info!("Applied {} database migration(s)", applied.len());
    }
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ApiError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    // tower-http refuses credentials together with a wildcard origin
    if origins.iter().any(|origin| origin == "*") {
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ApiError::Config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cors
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

pub fn router(state: Arc<AppState>, config: &AppConfig) -> Result<Router, ApiError> {
    let app = Router::new()
        .route("/api/health", get(status_handlers::health_check))
        .route("/api", get(status_handlers::api_root))
        .route("/api/", get(status_handlers::api_root))
        .route(
            "/api/status",
            get(status_handlers::get_status_checks).post(status_handlers::create_status_check),
        )
        .route("/api/waitlist", post(waitlist_handlers::signup_waitlist))
        .route("/api/waitlist/stats", get(waitlist_handlers::get_waitlist_stats))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&config.cors_origins)?)
        .with_state(state);
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_malformed_origins() {
        assert!(cors_layer(&["*".to_string()]).is_ok());
        assert!(cors_layer(&["https://founderfund.io".to_string()]).is_ok());
        assert!(matches!(
            cors_layer(&["bad\norigin".to_string()]),
            Err(ApiError::Config(_))
        ));
    }
}
