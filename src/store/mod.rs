//! Task storage with a pluggable backend.
//!
//! Only the in-memory backend exists today; the trait is the seam where a
//! file- or database-backed store could be added without changing the
//! handler layer's contract.

mod memory;

pub use memory::InMemoryTaskStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A task record.
///
/// Fields absent from an incoming JSON body decode to their empty
/// defaults, so presence of `id` is a handler check rather than a decode
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Externally assigned identifier, unique key in the store
    pub id: String,

    /// Free-text description
    pub description: String,

    /// Free-text note
    pub note: String,

    /// Application names associated with the task
    pub applications: Vec<String>,
}

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Whether this store persists data across restarts.
    fn is_persistent(&self) -> bool;

    /// List every stored task. Order is unspecified.
    async fn list_tasks(&self) -> Result<Vec<Task>, String>;

    /// Get a single task by id.
    async fn get_task(&self, id: &str) -> Result<Option<Task>, String>;

    /// Insert a task under `task.id`, fully replacing any existing record
    /// with that id.
    async fn put_task(&self, task: Task) -> Result<(), String>;

    /// Delete a task by id. Returns `false` if no such task exists.
    async fn delete_task(&self, id: &str) -> Result<bool, String>;
}

/// The two demonstration tasks the server is seeded with at startup.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            description: "Finish the CRUD handlers for the task service".to_string(),
            note: "List, create, get and delete are the whole surface".to_string(),
            applications: vec![
                "VS Code".to_string(),
                "Terminal".to_string(),
                "git".to_string(),
            ],
        },
        Task {
            id: "2".to_string(),
            description: "Exercise every endpoint with curl".to_string(),
            note: "Easiest to do while developing, each time the server restarts".to_string(),
            applications: vec![
                "VS Code".to_string(),
                "Terminal".to_string(),
                "git".to_string(),
                "curl".to_string(),
            ],
        },
    ]
}
