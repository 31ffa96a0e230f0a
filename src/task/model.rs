use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Get the current date and time in the local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Task priority
///
/// Serializes as lowercase strings ("high"/"medium"/"low") to match the
/// on-disk JSON format. Deserialization never fails: any unrecognized
/// value normalizes to `Medium` at the boundary, so rank handling does
/// not need to be scattered through query code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Ordering weight for sort-by-priority (high sorts first)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s.trim() {
            "high" => Priority::High,
            "low" => Priority::Low,
            // "medium" and anything unrecognized
            _ => Priority::Medium,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from(s.as_str())
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status
///
/// Same boundary normalization as [`Priority`]: unrecognized values
/// deserialize as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.trim() {
            "completed" => Status::Completed,
            _ => Status::Pending,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked task
///
/// The field names are the on-disk JSON field names; the persisted file is
/// a plain array of these objects, so renaming a field here is a format
/// break for previously written files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Positive integer id, unique among live tasks
    pub id: u32,
    /// Free-text description
    pub description: String,
    /// Optional calendar date (no time-of-day), serialized as YYYY-MM-DD or null
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl Task {
    /// Whether this task's deadline (taken at midnight) falls at or before
    /// `cutoff`. Tasks without a deadline are never due.
    pub fn is_due_by(&self, cutoff: NaiveDateTime) -> bool {
        match self.deadline {
            Some(date) => date.and_time(chrono::NaiveTime::MIN) <= cutoff,
            None => false,
        }
    }
}
