//! Settings validation, run once at startup.

use crate::config::Settings;
use crate::error::ConfigError;
use std::net::SocketAddr;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.database.url.is_empty() {
        return Err(ConfigError::Missing("DATABASE_URL"));
    }
    if !settings.database.url.starts_with("postgres://") && !settings.database.url.starts_with("postgresql://") {
        return Err(ConfigError::Invalid {
            key: "DATABASE_URL",
            reason: "expected a postgres:// URL".into(),
        });
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    settings
        .server
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            reason: e.to_string(),
        })?;
    if let Some(max) = settings.api.max_category_id {
        if max < 0 {
            return Err(ConfigError::Invalid {
                key: "TRIVIA_MAX_CATEGORY_ID",
                reason: "must not be negative".into(),
            });
        }
    }
    Ok(())
}
