//! Task Tracker Library
//!
//! A personal task tracker that persists its task list to a single JSON
//! file and exposes create/read/update/delete/search/filter/sort
//! operations through an interactive numbered menu.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Shell Layer**: `menu` module - Interactive numbered-menu loop
//! - **Domain Layer**: `task` and `service` modules - Task models and operations
//! - **Persistence Layer**: `storage` module - JSON file storage with optional Git history
//!
//! # Example
//!
//! ```no_run
//! use tasktrack::{Priority, Storage, TaskService};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let service = TaskService::new(Storage::new("tasks.json", false));
//!     let task = service.add("Write report".to_string(), None, Priority::High)?;
//!     println!("created task {}", task.id);
//!     Ok(())
//! }
//! ```

mod formatting;
mod git_ops;
pub mod menu;
mod service;
mod storage;
mod task;

// Re-export commonly used types
pub use formatting::{format_task_line, format_tasks};
pub use service::TaskService;
pub use storage::Storage;
pub use task::{Priority, SortKey, Status, Task, TaskList, local_now};
