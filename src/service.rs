use crate::storage::Storage;
use crate::task::{Priority, SortKey, Status, Task, TaskList, local_now};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// The task operations, one method per menu action
///
/// Every method starts from a fresh `Storage::load` and mutating methods
/// end with a save; the file is the single source of truth between calls.
/// No method is atomic across the load-mutate-save sequence — the tool
/// assumes a single process and a single writer.
///
/// "Id not found" on update/delete is a non-fatal outcome (`Ok(false)`);
/// any storage failure propagates as an error for the caller to surface.
pub struct TaskService {
    storage: Storage,
}

impl TaskService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Add a new pending task and return it with its assigned id
    pub fn add(
        &self,
        description: String,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<Task> {
        let mut tasks = self.storage.load()?;
        let task = Task {
            id: tasks.next_id(),
            description,
            deadline,
            priority,
            status: Status::Pending,
        };
        tasks.push(task.clone());
        self.storage
            .save_with_message(&tasks, &format!("Add task {}", task.id))?;
        Ok(task)
    }

    /// List tasks for display, optionally filtered by status and sorted
    ///
    /// Read-only; the stored order is untouched.
    pub fn list(
        &self,
        filter_by: Option<Status>,
        sort_by: Option<SortKey>,
    ) -> Result<Vec<Task>> {
        Ok(self.storage.load()?.filtered_sorted(filter_by, sort_by))
    }

    /// Update the first task with the given id
    ///
    /// Only supplied fields overwrite; the rest keep their values. Saves
    /// only on a match. `Ok(false)` means no task had that id.
    pub fn update(
        &self,
        id: u32,
        new_description: Option<String>,
        new_status: Option<Status>,
        new_priority: Option<Priority>,
    ) -> Result<bool> {
        let mut tasks = self.storage.load()?;
        let Some(task) = tasks.find_by_id_mut(id) else {
            return Ok(false);
        };

        if let Some(description) = new_description {
            task.description = description;
        }
        if let Some(status) = new_status {
            task.status = status;
        }
        if let Some(priority) = new_priority {
            task.priority = priority;
        }

        self.storage
            .save_with_message(&tasks, &format!("Update task {}", id))?;
        Ok(true)
    }

    /// Remove every task with the given id
    ///
    /// Saves only if something was removed; `Ok(false)` means no match
    /// and no write.
    pub fn delete(&self, id: u32) -> Result<bool> {
        let mut tasks = self.storage.load()?;
        if !tasks.remove_by_id(id) {
            return Ok(false);
        }
        self.storage
            .save_with_message(&tasks, &format!("Delete task {}", id))?;
        Ok(true)
    }

    /// Case-insensitive description search
    pub fn search(&self, keyword: &str) -> Result<Vec<Task>> {
        Ok(self.storage.load()?.search(keyword))
    }

    /// Tasks due within 24 hours of now, overdue ones included
    pub fn due_soon(&self) -> Result<Vec<Task>> {
        self.due_soon_at(local_now())
    }

    /// Due-soon with an explicit reference time
    ///
    /// A deadline counts as due when its midnight is at or before
    /// `reference + 24h`; tasks without a deadline never count.
    pub fn due_soon_at(&self, reference: NaiveDateTime) -> Result<Vec<Task>> {
        Ok(self.storage.load()?.due_within(reference + Duration::days(1)))
    }
}
