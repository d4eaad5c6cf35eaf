use crate::api::mailchimp::MailchimpConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database path, `:memory:` for a throwaway database
    pub database_url: String,
    pub port: u16,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub sentry_dsn: Option<String>,
    /// Present only when every Mailchimp variable is set
    pub mailchimp: Option<MailchimpConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "founderfund.db".to_string(),
            port: 3000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            sentry_dsn: None,
            mailchimp: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        let defaults = Self::default();
        Ok(AppConfig {
            database_url: env_var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: match env_var("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ApiError::Config(format!("Invalid PORT: {}", port)))?,
                None => defaults.port,
            },
            cors_origins: env_var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            environment: env_var("ENVIRONMENT").unwrap_or(defaults.environment),
            sentry_dsn: env_var("SENTRY_DSN"),
            mailchimp: match (
                env_var("MAILCHIMP_API_KEY"),
                env_var("MAILCHIMP_SERVER_PREFIX"),
                env_var("MAILCHIMP_AUDIENCE_ID"),
            ) {
                (Some(api_key), Some(server_prefix), Some(audience_id)) => Some(MailchimpConfig {
                    api_key,
                    server_prefix,
                    audience_id,
                }),
                _ => None,
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment != "development"
    }
}

/// Unset and blank variables are treated the same.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
