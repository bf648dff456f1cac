use std::env;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Runtime settings, read once at startup from the environment
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub mail_from: String,
    pub resend_api_key: Option<String>,
    pub dispatch_interval_secs: u64,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://reusela.db?mode=rwc".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET".to_string()))?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let mail_from =
            env::var("MAIL_FROM").unwrap_or_else(|_| "ReuseLa <onboarding@resend.dev>".to_string());

        let resend_api_key = env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());

        let dispatch_interval_secs = match env::var("DISPATCH_INTERVAL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "DISPATCH_INTERVAL_SECS".to_string(),
                value: raw,
            })?,
            Err(_) => 30,
        };

        Ok(AppSettings {
            database_url,
            jwt_secret,
            bind_addr,
            mail_from,
            resend_api_key,
            dispatch_interval_secs,
        })
    }
}
