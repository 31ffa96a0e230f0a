use crate::git_ops::GitOps;
use crate::task::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed persistence for the task collection
///
/// The path is a constructor parameter, not a process-wide constant. No
/// caching and no locking: every `load` reads the file, every `save`
/// overwrites it whole. Single-writer, single-process usage is assumed.
pub struct Storage {
    file_path: PathBuf,
    git: Option<GitOps>,
}

impl Storage {
    /// Create a storage handle for the given data file
    ///
    /// With `sync_git` enabled, each successful save also commits the
    /// file when it lives inside a git work tree.
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git = sync_git.then(|| GitOps::new(&file_path));
        Self { file_path, git }
    }

    /// Load the task collection
    ///
    /// A missing file is an empty collection, not an error. A file that
    /// exists but does not parse as a task array is an error the caller
    /// must surface; it is never silently treated as empty.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let tasks: TaskList = serde_json::from_str(&content)
            .with_context(|| format!("malformed task file {}", self.file_path.display()))?;
        Ok(tasks)
    }

    /// Save the task collection, overwriting the file
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        self.save_with_message(tasks, "Update tasks")
    }

    /// Save with a custom git commit message
    ///
    /// The write itself is the operation of record; a git commit failure
    /// is reported on stderr but does not fail the save.
    pub fn save_with_message(&self, tasks: &TaskList, message: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;

        if let Some(git) = &self.git {
            if let Err(e) = git.commit(&self.file_path, message) {
                eprintln!("Warning: git commit failed: {}", e);
            }
        }

        Ok(())
    }
}
