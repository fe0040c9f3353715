// Repository layer for database operations
// Decision: one pooled connection per statement, released on every exit path

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::models::*;

/// Default pool size for file-backed databases.
/// SQLite serializes writers itself, readers run in parallel.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create database connection from URL, creating the file if missing
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database.
    /// Pinned to a single connection that is never recycled; the data lives
    /// exactly as long as that connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet.
    /// Existing tables and rows are left untouched.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS controls (
                id INTEGER PRIMARY KEY,
                x REAL NOT NULL,
                y REAL NOT NULL,
                timestamp DATETIME NOT NULL
                    DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create controls table")?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_controls_timestamp
            ON controls (timestamp)
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create controls timestamp index")?;

        tracing::debug!("Control log schema ready");
        Ok(())
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ============================================
    // Controls (append-only)
    // ============================================

    /// Append one control. SQLite stamps the row while it holds the write
    /// lock, so timestamps never decrease as ids grow.
    pub async fn append_control(&self, input: CreateControlRow) -> Result<ControlRow> {
        let row = sqlx::query_as::<_, ControlRow>(
            r#"
            INSERT INTO controls (x, y, timestamp)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'))
            RETURNING id, x, y, timestamp
            "#,
        )
        .bind(input.x)
        .bind(input.y)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, x = row.x, y = row.y, "Control appended");
        Ok(row)
    }

    /// Most recent controls first; ties on timestamp fall back to insertion order
    pub async fn recent_controls(&self, limit: i64) -> Result<Vec<ControlRow>> {
        let rows = sqlx::query_as::<_, ControlRow>(
            r#"
            SELECT id, x, y, timestamp
            FROM controls
            ORDER BY timestamp DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
