//! PostgreSQL record store.
//!
//! Every collection shares the `records` table; a record is one JSONB
//! `body`. Equality filters map onto JSONB containment (`@>`), and
//! `seq` gives the insertion order.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use docflow_core::config::DatabaseConfig;
use docflow_core::error::{AppError, ErrorKind};
use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;
use docflow_core::types::Record;

/// A [`RecordStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Open a connection pool and bring the `records` schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options: PgConnectOptions = config.url.parse().map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid database url", e)
        })?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(db_error("Failed to connect to database"))?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Apply pending migrations from `migrations/`.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to run migrations: {e}"),
                    e,
                )
            })?;
        info!("Record store schema is up to date");
        Ok(())
    }
}

fn into_record(body: Value) -> AppResult<Record> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(AppError::database(format!(
            "Stored record body is not an object: {other}"
        ))),
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return AppError::with_source(
                    ErrorKind::Conflict,
                    format!("Duplicate value violates {constraint}"),
                    e,
                );
            }
        }
        AppError::with_source(ErrorKind::Database, context, e)
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        // Fails if the schema is missing, not only when the server is down.
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM records)")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(db_error("Health check failed"))
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    async fn find_one(&self, collection: &str, filter: &Record) -> AppResult<Option<Record>> {
        let body: Option<Value> = sqlx::query_scalar(
            "SELECT body FROM records WHERE collection = $1 AND body @> $2 ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(Value::Object(filter.clone()))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find record"))?;

        body.map(into_record).transpose()
    }

    async fn find(&self, collection: &str, filter: &Record) -> AppResult<Vec<Record>> {
        let bodies: Vec<Value> = sqlx::query_scalar(
            "SELECT body FROM records WHERE collection = $1 AND body @> $2 ORDER BY seq",
        )
        .bind(collection)
        .bind(Value::Object(filter.clone()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list records"))?;

        bodies.into_iter().map(into_record).collect()
    }

    async fn insert_one(&self, collection: &str, record: Record) -> AppResult<()> {
        sqlx::query("INSERT INTO records (collection, body) VALUES ($1, $2)")
            .bind(collection)
            .bind(Value::Object(record))
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to insert record"))?;
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Record,
        changes: Record,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE records SET body = body || $3
            WHERE seq = (
                SELECT seq FROM records
                WHERE collection = $1 AND body @> $2
                ORDER BY seq LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Value::Object(filter.clone()))
        .bind(Value::Object(changes))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update record"))?;

        Ok(result.rows_affected())
    }

    async fn delete_one(&self, collection: &str, filter: &Record) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM records
            WHERE seq = (
                SELECT seq FROM records
                WHERE collection = $1 AND body @> $2
                ORDER BY seq LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Value::Object(filter.clone()))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to delete record"))?;

        Ok(result.rows_affected())
    }
}
