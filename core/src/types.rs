//! Domain DTOs for the task API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently.
//! The mock-server crate keeps its own copies so that integration tests
//! catch schema drift between client and server.

use serde::{Deserialize, Serialize};

/// A single task returned by the API. The `id` is server-assigned and
/// immutable; `title` is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
}

/// Request payload for creating a new task. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
}

/// Request payload for updating an existing task. The title replaces the
/// stored one wholesale; there are no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_roundtrips_through_json() {
        let task = Task {
            id: 7,
            title: "Buy milk".to_string(),
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn create_task_rejects_missing_title() {
        let result: Result<CreateTask, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_task_requires_title() {
        let result: Result<UpdateTask, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
        let input: UpdateTask = serde_json::from_str(r#"{"title":"Buy bread"}"#).unwrap();
        assert_eq!(input.title, "Buy bread");
    }
}
