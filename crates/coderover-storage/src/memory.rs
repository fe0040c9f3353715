// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
//
// Mirrors the SQLite repository API so the server can run without a
// database file. All data is lost on restart.

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::models::*;

#[derive(Default)]
struct ControlLog {
    rows: Vec<ControlRow>,
    next_id: i64,
}

/// In-memory control log
#[derive(Default)]
pub struct InMemoryDatabase {
    controls: RwLock<ControlLog>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    pub async fn append_control(&self, input: CreateControlRow) -> Result<ControlRow> {
        let mut log = self.controls.write();
        log.next_id += 1;

        // Stamp under the write lock so timestamps follow id order
        let row = ControlRow {
            id: log.next_id,
            x: input.x,
            y: input.y,
            timestamp: Self::now(),
        };
        log.rows.push(row.clone());
        Ok(row)
    }

    pub async fn recent_controls(&self, limit: i64) -> Result<Vec<ControlRow>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let log = self.controls.read();

        let mut rows: Vec<ControlRow> = log.rows.clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        rows.truncate(limit);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_log() {
        let db = InMemoryDatabase::new();
        assert!(db
            .recent_controls(RECENT_CONTROLS_LIMIT)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let db = InMemoryDatabase::new();
        let a = db
            .append_control(CreateControlRow { x: 1.0, y: 2.0 })
            .await
            .unwrap();
        let b = db
            .append_control(CreateControlRow { x: 3.0, y: 4.0 })
            .await
            .unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.timestamp >= a.timestamp);
    }

    #[tokio::test]
    async fn test_recent_controls_newest_first_and_capped() {
        let db = InMemoryDatabase::new();
        for i in 0..51 {
            db.append_control(CreateControlRow {
                x: i as f64,
                y: -(i as f64),
            })
            .await
            .unwrap();
        }

        let rows = db.recent_controls(RECENT_CONTROLS_LIMIT).await.unwrap();
        assert_eq!(rows.len(), 50);
        assert_eq!(rows.first().unwrap().id, 51);
        assert_eq!(rows.last().unwrap().id, 2);
        assert!(rows.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_negative_limit_returns_nothing() {
        let db = InMemoryDatabase::new();
        db.append_control(CreateControlRow { x: 0.0, y: 0.0 })
            .await
            .unwrap();

        assert!(db.recent_controls(-5).await.unwrap().is_empty());
    }
}
