// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either SQLite (production) or in-memory (dev mode) storage.

use anyhow::Result;
use std::sync::Arc;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// URL value that selects the in-memory backend
pub const IN_MEMORY_URL: &str = "memory";

/// Storage backend that can be either SQLite or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// SQLite database file (production)
    Sqlite(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a SQLite storage backend from a database URL
    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Sqlite(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Pick a backend from configuration and make sure its schema exists
    pub async fn connect(database_url: &str) -> Result<Self> {
        let backend = if database_url == IN_MEMORY_URL {
            Self::in_memory()
        } else {
            Self::sqlite(database_url).await?
        };
        backend.init().await?;
        Ok(backend)
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    /// Short backend name for health reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::InMemory(_) => "memory",
        }
    }

    /// Idempotent schema creation. No-op for the in-memory backend.
    pub async fn init(&self) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.init().await,
            Self::InMemory(_) => Ok(()),
        }
    }

    /// Release connections. Safe to call more than once.
    pub async fn close(&self) {
        if let Self::Sqlite(db) = self {
            db.close().await;
        }
    }

    // ============================================
    // Controls
    // ============================================

    pub async fn append_control(&self, input: CreateControlRow) -> Result<ControlRow> {
        match self {
            Self::Sqlite(db) => db.append_control(input).await,
            Self::InMemory(db) => db.append_control(input).await,
        }
    }

    pub async fn recent_controls(&self, limit: i64) -> Result<Vec<ControlRow>> {
        match self {
            Self::Sqlite(db) => db.recent_controls(limit).await,
            Self::InMemory(db) => db.recent_controls(limit).await,
        }
    }
}
