//! Commands Layer
//!
//! HTTP handlers that bridge the UI to the repository.

mod task_cmd;

pub use task_cmd::*;
