//! Task domain models and business logic
//!
//! Split into submodules:
//! - `model`: the task entity and its priority/status enums
//! - `list`: the ordered collection plus filter/sort/search queries

mod list;
mod model;

// Re-export all public types
pub use list::{SortKey, TaskList};
pub use model::{Priority, Status, Task, local_now};
