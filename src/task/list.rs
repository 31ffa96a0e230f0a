use super::model::{Status, Task};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sort order for task display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by deadline; tasks without a deadline sort last
    Deadline,
    /// Ascending by priority rank (high, then medium, then low)
    Priority,
}

/// The ordered task collection
///
/// Vec is the primary storage: it keeps insertion order, which is the
/// display order when no sort is requested, and serializes directly as
/// the on-disk JSON array. At personal-tracker scales a lookup index
/// would add complexity without measurable benefit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Next id to assign: one past the largest live id
    ///
    /// Deriving from the maximum rather than the length means deleting a
    /// task can never hand its id to a later add while another task still
    /// wears it.
    pub fn next_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append a task to the collection
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Find a task by its id
    pub fn find_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its id and return a mutable reference
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove every task with the given id, in place
    ///
    /// Returns `true` if the collection shrank.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Produce the display view: filter by status, then stable-sort
    ///
    /// Filtering keeps only tasks whose status equals `filter_by` when one
    /// is supplied. Sorting is applied after filtering; with no sort key
    /// the view keeps insertion order. The underlying collection is not
    /// mutated.
    pub fn filtered_sorted(
        &self,
        filter_by: Option<Status>,
        sort_by: Option<SortKey>,
    ) -> Vec<Task> {
        let mut view: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| filter_by.is_none_or(|s| t.status == s))
            .cloned()
            .collect();

        match sort_by {
            // Missing deadlines take the maximal sentinel so they sort last
            Some(SortKey::Deadline) => {
                view.sort_by_key(|t| t.deadline.unwrap_or(NaiveDate::MAX));
            }
            Some(SortKey::Priority) => {
                view.sort_by_key(|t| t.priority.rank());
            }
            None => {}
        }

        view
    }

    /// Case-insensitive substring search over descriptions, storage order
    pub fn search(&self, keyword: &str) -> Vec<Task> {
        let keyword_lower = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.description.to_lowercase().contains(&keyword_lower))
            .cloned()
            .collect()
    }

    /// Tasks whose deadline falls at or before `cutoff`, storage order
    ///
    /// No lower bound: already-overdue tasks are included. Tasks without
    /// a deadline never appear.
    pub fn due_within(&self, cutoff: NaiveDateTime) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_due_by(cutoff))
            .cloned()
            .collect()
    }
}
