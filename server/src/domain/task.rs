//! Task Entity
//!
//! A titled, completable unit of work. The only persisted entity.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Message returned when a task is created without a usable title
pub const TITLE_REQUIRED: &str = "Title is required";

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// SQLite rowid; server-assigned, never reused
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Entity for Task {
    type Id = i64;
    type Draft = NewTask;
    type Patch = TaskPatch;
}

/// Validated creation payload.
///
/// The title is kept exactly as submitted; only blankness is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
}

impl NewTask {
    /// Validate a raw title. Missing, empty and whitespace-only titles are rejected.
    pub fn parse(title: Option<String>) -> DomainResult<Self> {
        match title {
            Some(title) if !title.trim().is_empty() => Ok(Self { title }),
            _ => Err(DomainError::InvalidInput(TITLE_REQUIRED.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), title: None }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self { completed: None, title: Some(title.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_keeps_title_verbatim() {
        let draft = NewTask::parse(Some("  Buy milk ".to_string())).unwrap();
        assert_eq!(draft.title(), "  Buy milk ");
    }

    #[test]
    fn test_new_task_rejects_blank_titles() {
        for title in [None, Some(String::new()), Some("   ".to_string()), Some("\t\n".to_string())] {
            let err = NewTask::parse(title).unwrap_err();
            assert_eq!(err, DomainError::InvalidInput(TITLE_REQUIRED.to_string()));
        }
    }

    #[test]
    fn test_patch_deserializes_partial_payloads() {
        let patch: TaskPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(patch, TaskPatch::completed(true));

        let patch: TaskPatch = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(patch, TaskPatch::title("New"));

        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch, TaskPatch::default());
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task { id: 3, title: "A".to_string(), completed: false };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "title": "A", "completed": false}));
    }
}
