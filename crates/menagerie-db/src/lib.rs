//! # Menagerie DB
//!
//! MySQL connection pool and schema setup for the Menagerie API.
//!
//! Startup runs these in order, and any failure is fatal to the process:
//!
//! 1. [`init_db_pool`] opens the pool from a [`DatabaseConfig`]
//! 2. [`ping`] verifies the server answers
//! 3. [`ensure_schema`] creates the `animals` table
//!
//! # Example
//!
//! ```ignore
//! use menagerie_config::DatabaseConfig;
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = menagerie_db::init_db_pool(&config).await?;
//! menagerie_db::ping(&pool).await?;
//! menagerie_db::ensure_schema(&pool, config.schema_mode).await?;
//! ```

use std::str::FromStr;

use menagerie_config::{DatabaseConfig, SchemaMode};
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tracing::instrument;

pub use sqlx::MySqlPool;

const CREATE_ANIMALS: &str = "CREATE TABLE animals (\
    id MEDIUMINT NOT NULL AUTO_INCREMENT, \
    name CHAR(30) NOT NULL, \
    PRIMARY KEY (id))";

const CREATE_ANIMALS_IF_NOT_EXISTS: &str = "CREATE TABLE IF NOT EXISTS animals (\
    id MEDIUMINT NOT NULL AUTO_INCREMENT, \
    name CHAR(30) NOT NULL, \
    PRIMARY KEY (id))";

/// Builds connect options, preferring `DATABASE_URL` over the individual parts.
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, sqlx::Error> {
    if let Some(url) = &config.url {
        return MySqlConnectOptions::from_str(url);
    }

    Ok(MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name))
}

/// Opens the shared pool. The pool connects eagerly, so an unreachable server
/// fails here rather than on the first request.
#[instrument(skip(config), fields(host = %config.host, port = config.port, database = %config.name))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(config)?;

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database pool created");
    Ok(pool)
}

#[instrument(skip(pool))]
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    tracing::info!("Database ping succeeded");
    Ok(())
}

pub fn create_table_statement(mode: SchemaMode) -> &'static str {
    match mode {
        SchemaMode::Strict => CREATE_ANIMALS,
        SchemaMode::IfNotExists => CREATE_ANIMALS_IF_NOT_EXISTS,
    }
}

/// Creates the `animals` table.
///
/// Under [`SchemaMode::Strict`] this errors when the table already exists.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &MySqlPool, mode: SchemaMode) -> Result<(), sqlx::Error> {
    sqlx::query(create_table_statement(mode))
        .execute(pool)
        .await?;

    tracing::info!(%mode, "Table animals ready");
    Ok(())
}
