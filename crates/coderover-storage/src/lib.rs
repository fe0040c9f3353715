// SQLite storage layer with sqlx
//
// This crate owns the control event log:
// - Database: SQLite-backed store (production)
// - InMemoryDatabase: in-process store (dev mode, tests)
// - StorageBackend: enum dispatch over both

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::*;
