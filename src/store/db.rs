use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::Result;
use crate::model::{Status, Task, TaskFilter};

/// SQLite-backed task storage. Every public operation is a single SQL
/// statement, so each mutation is individually atomic; no cross-record
/// transactions are needed.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.create_tables()?;
        Ok(store)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.create_tables()?;
        Ok(store)
    }

    fn create_tables(&self) -> Result<()> {
        // seq is the insertion sequence used to break created_at ties:
        // RFC 3339 text sorts chronologically but two rapid creates can
        // share a timestamp at the store's resolution.
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'pending',
                priority TEXT NOT NULL DEFAULT 'medium',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
            CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks(priority);",
        )?;
        Ok(())
    }

    pub fn insert(&self, task: &Task) -> Result<()> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, status, priority, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.id,
                task.title,
                task.description,
                task.status.to_string(),
                task.priority.to_string(),
                task.created_at.to_rfc3339(),
                task.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                "SELECT id, title, description, status, priority, created_at, updated_at
                 FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// Filtered scan, newest first. Ties on created_at fall back to the
    /// insertion sequence so rapid successive creates keep a stable order.
    pub fn find_many(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, status, priority, created_at, updated_at
             FROM tasks
             WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR priority = ?2)
             ORDER BY created_at DESC, seq DESC",
        )?;
        let rows = stmt.query_map(
            params![
                filter.status.map(|s| s.to_string()),
                filter.priority.map(|p| p.to_string()),
            ],
            row_to_task,
        )?;
        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    /// Count records, optionally restricted to one status.
    pub fn count_by_status(&self, status: Option<Status>) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE ?1 IS NULL OR status = ?1",
            params![status.map(|s| s.to_string())],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Write the full row for an existing task. Returns false if the id
    /// does not resolve to a record.
    pub fn update(&self, task: &Task) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET title = ?2, description = ?3, status = ?4, priority = ?5, updated_at = ?6
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.description,
                task.status.to_string(),
                task.priority.to_string(),
                task.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status: String = row.get(3)?;
    let priority: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: status.parse().map_err(|e| decode_err(3, e))?,
        priority: priority.parse().map_err(|e| decode_err(4, e))?,
        created_at: parse_timestamp(5, &created_at)?,
        updated_at: parse_timestamp(6, &updated_at)?,
    })
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_err(idx, e))
}

fn decode_err(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}
