use std::sync::Arc;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use founderfund_backend::{build_pool, config::AppConfig, router, run_migrations, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,founderfund_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let pool = build_pool(&config.database_url)?;
    run_migrations(&pool)?;

    if config.mailchimp.is_none() {
        tracing::warn!("Mailchimp is not configured, signups will only be stored locally");
    }
    let state = Arc::new(AppState::new(pool, &config)?);
    let app = router(state, &config)?;

    tracing::info!(
        "Starting server on port {} ({})",
        config.port,
        if config.is_production() { "production" } else { "development" }
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
