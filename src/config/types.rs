//! Runtime settings. Loaded from the environment by `loader`, checked by `validator`.

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub api: ApiSettings,
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Insert the six default categories when the table is empty.
    pub seed_categories: bool,
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub bind_addr: String,
    /// Pre-built front-end bundle served at `/`.
    pub static_dir: PathBuf,
}

/// Settings consulted by request handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSettings {
    /// Largest category id `GET /categories/:id/questions` accepts. `None` disables the bound.
    pub max_category_id: Option<i32>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            max_category_id: Some(6),
        }
    }
}
