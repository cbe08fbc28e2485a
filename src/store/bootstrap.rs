//! Startup bootstrap: create the database, the two tables, and the default categories when missing.
//! Every statement is idempotent; there is no schema versioning.

use crate::error::StoreError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Categories the bundled front-end ships icons for, ids 1..=6.
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

pub async fn ensure_tables(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            "type" TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT,
            answer TEXT,
            difficulty INTEGER,
            category INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert `DEFAULT_CATEGORIES` into an empty `categories` table. Returns the number of rows inserted.
pub async fn seed_default_categories(pool: &PgPool) -> Result<u64, StoreError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(0);
    }
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for (id, kind) in DEFAULT_CATEGORIES {
        let result = sqlx::query(r#"INSERT INTO categories (id, "type") VALUES ($1, $2) ON CONFLICT (id) DO NOTHING"#)
            .bind(id)
            .bind(kind)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }
    // explicit ids leave the serial behind
    sqlx::query("SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(inserted, "seeded default categories");
    Ok(inserted)
}

/// Connect to the server's `postgres` database and create the target database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| StoreError::Database(sqlx::Error::Configuration("DATABASE_URL: no path".into())))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
