use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::Path;

/// Commits the task file to git after each save, when the file lives
/// inside a git work tree. Local history only; nothing is fetched or
/// pushed.
pub struct GitOps {
    repo: Option<Repository>,
}

impl GitOps {
    /// Create a GitOps instance by discovering the repository containing
    /// the data file, if any
    pub fn new(file_path: &Path) -> Self {
        let file_dir = if file_path.is_file() {
            file_path.parent().unwrap_or(file_path).to_path_buf()
        } else {
            file_path.to_path_buf()
        };

        Self {
            repo: Repository::discover(&file_dir).ok(),
        }
    }

    /// Check if the data file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Stage the data file and commit it with the given message
    ///
    /// A no-op when the file is not inside a git work tree.
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r,
            None => return Ok(()),
        };

        let repo_workdir = repo
            .workdir()
            .context("repository has no working directory")?;
        let relative_path = file_path
            .strip_prefix(repo_workdir)
            .context("task file is not in the repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // Absent HEAD means this is the initial commit
        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None,
        };

        let signature = Self::get_signature(repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(())
    }

    /// Git signature from the repo config, with fallbacks for unconfigured
    /// environments
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "Task Tracker".to_string());
        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "tasktrack@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Signature::now can fail on some CI systems; fall back to
                // a fixed timestamp
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("failed to create signature with fixed time")
            }
        }
    }
}
