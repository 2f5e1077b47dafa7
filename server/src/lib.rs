//! Task Store Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: HTTP handlers
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /todos | `list_tasks` |
//! | POST | /todos | `create_task` |
//! | PATCH | /todos/{id} | `update_task` |
//! | DELETE | /todos/{id} | `delete_task` |

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

pub use config::{AppConfig, ConfigError};

use domain::Task;
use repository::{init_db, Repository, SqliteTaskRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn Repository<Task>>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn Repository<Task>>) -> Self {
        Self { tasks }
    }
}

/// Build the `/todos` API around an injected store handle
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(commands::list_tasks).post(commands::create_task))
        .route(
            "/todos/{id}",
            patch(commands::update_task).delete(commands::delete_task),
        )
        .with_state(state)
}

/// Open the database, bind, and serve until Ctrl-C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let conn = init_db(&config.database_path)?;
    let state = AppState::new(Arc::new(SqliteTaskRepository::new(conn)));

    let mut app = create_router(state);
    if let Some(dir) = &config.static_dir {
        // Unknown paths get index.html so the single-page UI can load
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
        tracing::info!(dir = %dir.display(), "serving UI");
    }
    let app = app.layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(
        database = %config.database_path.display(),
        "Task Store listening on http://{bind_address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Task Store stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {e}"),
    }
}
