//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Error body returned by the backend on 4xx/5xx
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
