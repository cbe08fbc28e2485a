//! Trivia server: loads settings from the environment (and `.env`), prepares the database, serves the API.
//!
//! Run from repo root: `cargo run -p trivia-server`

use std::sync::Arc;
use tokio::net::TcpListener;
use trivia_api::{
    app, config, ensure_database_exists, ensure_tables, seed_default_categories, telemetry, AppState,
    PgTriviaStore, Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("trivia_api=info,trivia_server=info,tower_http=info");

    let settings = Settings::from_env()?;
    config::validate(&settings)?;

    ensure_database_exists(&settings.database.url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;
    ensure_tables(&pool).await?;
    if settings.database.seed_categories {
        seed_default_categories(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgTriviaStore::new(pool.clone())), settings.api.clone());
    let router = app(state, &settings.server.static_dir);

    let listener = TcpListener::bind(&settings.server.bind_addr).await?;
    tracing::info!(
        static_dir = %settings.server.static_dir.display(),
        "listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
