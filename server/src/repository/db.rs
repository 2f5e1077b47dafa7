//! Database Connection and Setup
//!
//! Opens the SQLite database and creates the schema.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection handle shared by the repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<SharedConnection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");
    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // AUTOINCREMENT keeps ids of deleted rows from being handed out again
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;
    Ok(())
}
