//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod task_repo;


pub use traits::Repository;
pub use db::{init_db, SharedConnection};
pub use task_repo::SqliteTaskRepository;
