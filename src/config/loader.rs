//! Load settings from environment variables (optionally populated from `.env` by the binary).

use crate::config::types::{ApiSettings, DatabaseSettings, ServerSettings, Settings};
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "frontend/build";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = match get("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&get),
        };
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|e| ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: format!("{}", e),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let seed_categories = match get("TRIVIA_SEED_CATEGORIES") {
            Some(v) => parse_bool("TRIVIA_SEED_CATEGORIES", &v)?,
            None => true,
        };
        let max_category_id = match get("TRIVIA_MAX_CATEGORY_ID") {
            Some(v) if v.eq_ignore_ascii_case("none") => None,
            Some(v) => Some(v.parse().map_err(|e| ConfigError::Invalid {
                key: "TRIVIA_MAX_CATEGORY_ID",
                reason: format!("{}", e),
            })?),
            None => ApiSettings::default().max_category_id,
        };

        Ok(Settings {
            database: DatabaseSettings {
                url,
                max_connections,
                seed_categories,
            },
            server: ServerSettings {
                bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
                static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into())),
            },
            api: ApiSettings { max_category_id },
        })
    }
}

fn database_url_from_parts(get: &dyn Fn(&str) -> Option<String>) -> String {
    let user = get("DB_USER").unwrap_or_else(|| "postgres".into());
    let host = get("DB_HOST").unwrap_or_else(|| "localhost:5432".into());
    let name = get("DB_NAME").unwrap_or_else(|| "trivia".into());
    match get("DB_PASSWORD") {
        Some(password) => format!("postgres://{}:{}@{}/{}", user, password, host, name),
        None => format!("postgres://{}@{}/{}", user, host, name),
    }
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got {:?}", v),
        }),
    }
}
