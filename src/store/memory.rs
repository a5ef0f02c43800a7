//! In-memory task store (non-persistent).

use super::{seed_tasks, Task, TaskStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Task store backed by a process-local map. The `RwLock` serializes
/// concurrent handler access; single operations are atomic.
#[derive(Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store pre-populated with the demonstration tasks.
    pub async fn seeded() -> Self {
        let store = Self::new();
        {
            let mut tasks = store.tasks.write().await;
            for task in seed_tasks() {
                tasks.insert(task.id.clone(), task);
            }
        }
        store
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn is_persistent(&self) -> bool {
        false
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, String> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>, String> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn put_task(&self, task: Task) -> Result<(), String> {
        self.tasks.write().await.insert(task.id.clone(), task);
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<bool, String> {
        Ok(self.tasks.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            description: format!("task {}", id),
            note: "a note".to_string(),
            applications: vec!["git".to_string()],
        }
    }

    /// Put followed by get returns a record equal to the input.
    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = InMemoryTaskStore::new();
        let t = task("42");

        store.put_task(t.clone()).await.expect("Failed to put task");

        let fetched = store
            .get_task("42")
            .await
            .expect("Failed to get task")
            .expect("Task not found after put");

        assert_eq!(fetched, t);
    }

    /// Putting twice under the same id keeps exactly one record, equal to
    /// the second payload.
    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let store = InMemoryTaskStore::new();
        store.put_task(task("7")).await.expect("Failed to put task");

        let mut second = task("7");
        second.description = "rewritten".to_string();
        store
            .put_task(second.clone())
            .await
            .expect("Failed to overwrite task");

        let all = store.list_tasks().await.expect("Failed to list tasks");
        assert_eq!(all.len(), 1, "Overwrite must not add a second record");
        assert_eq!(all[0], second);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryTaskStore::new();
        store.put_task(task("9")).await.expect("Failed to put task");

        let removed = store.delete_task("9").await.expect("Failed to delete");
        assert!(removed);

        let fetched = store.get_task("9").await.expect("Failed to get task");
        assert!(fetched.is_none(), "Deleted task must not be retrievable");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_false() {
        let store = InMemoryTaskStore::new();

        let removed = store
            .delete_task("nonexistent")
            .await
            .expect("Failed to delete");
        assert!(!removed);
    }

    /// Seeding with N records and putting M more distinct ids yields
    /// exactly N+M records, no duplicates.
    #[tokio::test]
    async fn test_list_returns_all_records() {
        let store = InMemoryTaskStore::seeded().await;
        store.put_task(task("3")).await.expect("Failed to put task");
        store.put_task(task("4")).await.expect("Failed to put task");

        let mut ids: Vec<String> = store
            .list_tasks()
            .await
            .expect("Failed to list tasks")
            .into_iter()
            .map(|t| t.id)
            .collect();
        ids.sort();

        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_seeded_store_contains_demo_tasks() {
        let store = InMemoryTaskStore::seeded().await;

        for id in ["1", "2"] {
            let fetched = store
                .get_task(id)
                .await
                .expect("Failed to get task")
                .unwrap_or_else(|| panic!("Seed task {} missing", id));
            assert_eq!(fetched.id, id);
        }
    }
}
