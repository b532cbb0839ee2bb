// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, LintgateError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LintgateError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintgateError::Git(GitError::NotARepository)
            } else {
                LintgateError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                LintgateError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            LintgateError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            LintgateError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            LintgateError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok(message.to_string())
    }
}

/// Check if the current directory is within a git repository.
pub fn is_git_repo() -> bool {
    Repository::open_current().is_ok()
}

/// Get the commit message for a reference.
pub fn get_commit_message(reference: &str) -> Result<String> {
    let repo = Repository::open_current()?;
    repo.get_commit_message(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo(message: &str) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        // Create initial commit
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();

            let sig = repo.signature().unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo("chore: initial commit");
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(LintgateError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit_message() {
        let (_dir, repo) = create_test_repo("fix: read the right message");
        let message = repo.get_commit_message("HEAD").unwrap();
        assert!(message.starts_with("fix: read the right message"));
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo("chore: initial commit");
        let result = repo.get_commit_message("no-such-ref");
        assert!(matches!(
            result,
            Err(LintgateError::Git(GitError::InvalidReference { .. }))
        ));
    }
}
