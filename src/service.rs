use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, TaskError};
use crate::model::{NewTask, Status, Task, TaskFilter, TaskPatch};
use crate::stats::Stats;
use crate::store::TaskStore;

/// A filtered page of tasks plus the unfiltered aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub stats: Stats,
}

/// Validates and applies task mutations against the store. Statistics are
/// recomputed from store state after every mutation rather than kept as
/// running counters, so concurrent mutations cannot leave them stale.
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            store: TaskStore::open(path)?,
        })
    }

    pub fn open_memory() -> Result<Self> {
        Ok(Self {
            store: TaskStore::open_memory()?,
        })
    }

    /// List tasks matching the filter, newest first. Stats always cover the
    /// whole store regardless of the filter: overall progress should not
    /// change when the user narrows the visible subset.
    pub fn list(&self, filter: &TaskFilter) -> Result<TaskPage> {
        let tasks = self.store.find_many(filter)?;
        let stats = Stats::compute(&self.store)?;
        Ok(TaskPage { tasks, stats })
    }

    pub fn get(&self, id: &str) -> Result<Task> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Create a task. Status is forced to pending and both timestamps are
    /// stamped with the same instant, whatever the caller supplied.
    pub fn create(&self, input: NewTask) -> Result<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: input.title.trim().to_string(),
            description: input.description.unwrap_or_default(),
            priority: input.priority.unwrap_or_default(),
            status: Status::Pending,
            created_at: now,
            updated_at: now,
        };
        task.validate()?;
        self.store.insert(&task)?;
        Ok(task)
    }

    /// Merge a partial patch into the stored record, re-validate the full
    /// merged record, and commit. `updated_at` is always refreshed.
    pub fn update(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        let mut task = self.get(id)?;
        if let Some(title) = patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.validate()?;
        task.updated_at = Utc::now();
        self.commit(task)
    }

    /// Set the status. Idempotent: setting the current status changes no
    /// counters but still refreshes `updated_at`.
    pub fn set_status(&self, id: &str, status: Status) -> Result<Task> {
        let mut task = self.get(id)?;
        task.status = status;
        task.updated_at = Utc::now();
        self.commit(task)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        if !self.store.delete_by_id(id)? {
            return Err(TaskError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn stats(&self) -> Result<Stats> {
        Stats::compute(&self.store)
    }

    fn commit(&self, task: Task) -> Result<Task> {
        if !self.store.update(&task)? {
            // Row vanished between the read and the write.
            return Err(TaskError::NotFound(task.id));
        }
        Ok(task)
    }
}
