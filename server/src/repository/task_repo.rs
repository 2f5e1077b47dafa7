//! Task Repository Implementation
//!
//! SQLite-backed implementation of `Repository<Task>`.
//! Every operation is a single statement, so each one is atomic on its own.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{DomainError, DomainResult, NewTask, Task, TaskPatch};
use super::db::SharedConnection;
use super::traits::Repository;

/// SQLite implementation of Task repository
pub struct SqliteTaskRepository {
    conn: SharedConnection,
}

impl SqliteTaskRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Task> for SqliteTaskRepository {
    async fn create(&self, draft: &NewTask) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        let task = conn.query_row(
            "INSERT INTO tasks (title, completed) VALUES (?1, 0) RETURNING id, title, completed",
            params![draft.title()],
            row_to_task,
        )?;

        tracing::debug!(id = task.id, "task created");
        Ok(task)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, title, completed FROM tasks ORDER BY id")?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    async fn update(&self, id: i64, patch: &TaskPatch) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        // NULL parameters leave the column as it was
        let updated = conn
            .query_row(
                "UPDATE tasks
                 SET title = COALESCE(?1, title), completed = COALESCE(?2, completed)
                 WHERE id = ?3
                 RETURNING id, title, completed",
                params![patch.title, patch.completed, id],
                row_to_task,
            )
            .optional()?;

        updated.ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "task deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("Task {} not found", id))
}

/// Convert a database row to Task
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
    })
}
