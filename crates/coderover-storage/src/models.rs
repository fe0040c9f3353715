// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Number of rows returned by the recent-events query.
pub const RECENT_CONTROLS_LIMIT: i64 = 50;

// ============================================
// Controls (append-only joystick log)
// ============================================

/// One stored joystick submission.
/// `id` and `timestamp` are assigned by the storage layer, never by callers.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ControlRow {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreateControlRow {
    pub x: f64,
    pub y: f64,
}
