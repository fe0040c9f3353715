// Control service for business logic
//
// Shapes storage rows into the log entries the joystick UI renders.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use coderover_storage::{ControlRow, CreateControlRow, StorageBackend, RECENT_CONTROLS_LIMIT};

use crate::api::controls::{ControlLogEntry, ControlRequest};

/// Clock format for log entries. No date component.
const LOG_TIME_FORMAT: &str = "%H:%M:%S";

pub struct ControlService {
    db: StorageBackend,
}

impl ControlService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// Persist one joystick position. Storage assigns id and timestamp.
    pub async fn record(&self, req: ControlRequest) -> Result<ControlRow> {
        let input = CreateControlRow { x: req.x, y: req.y };
        self.db.append_control(input).await
    }

    /// The most recent entries, newest first
    pub async fn recent(&self) -> Result<Vec<ControlLogEntry>> {
        let rows = self.db.recent_controls(RECENT_CONTROLS_LIMIT).await?;
        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }

    fn row_to_entry(row: ControlRow) -> ControlLogEntry {
        ControlLogEntry {
            x: row.x,
            y: row.y,
            time: format_log_time(row.timestamp),
        }
    }
}

/// Render a stored timestamp as server-local `HH:MM:SS`
pub fn format_log_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(LOG_TIME_FORMAT)
        .to_string()
}
