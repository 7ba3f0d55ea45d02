//! Git repository integration

use std::io;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use thiserror::Error;

/// Failure reported by the filesystem or by libgit2.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Git(#[from] git2::Error),
}

/// Errors raised while opening a repository or querying its ignore rules.
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// No repository exists at or above the requested path.
    #[error("no git repository found at or above '{}'", path.display())]
    RepositoryNotFound { path: PathBuf },

    /// A repository lookup failed for a reason other than absence.
    #[error("failed to open git repository at '{}': {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: BackendError,
    },

    /// The ignore query itself failed. This is distinct from "not ignored".
    #[error("gitignore check failed for '{}': {source}", path.display())]
    EvaluationFailed {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// Answers whether paths are excluded by a repository's ignore rules.
///
/// The repository handle is opened in [`GitignoreFilter::open`] and released
/// when the filter is dropped.
pub struct GitignoreFilter {
    repo: Repository,
    repo_root: PathBuf,
}

impl GitignoreFilter {
    /// Open the repository enclosing `path`.
    ///
    /// `path` is canonicalized first, then git's discovery walks upward from it.
    pub fn open(path: &Path) -> Result<Self, IgnoreError> {
        let abs = path.canonicalize().map_err(|e| IgnoreError::OpenFailed {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let repo = Repository::discover(&abs).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                IgnoreError::RepositoryNotFound { path: abs.clone() }
            } else {
                IgnoreError::OpenFailed {
                    path: abs.clone(),
                    source: e.into(),
                }
            }
        })?;

        // Ignore rules are relative to a work tree; bare repositories have none.
        let workdir = repo.workdir().ok_or_else(|| IgnoreError::OpenFailed {
            path: abs.clone(),
            source: git2::Error::from_str("repository has no working directory").into(),
        })?;
        let repo_root = workdir.canonicalize().map_err(|e| IgnoreError::OpenFailed {
            path: workdir.to_path_buf(),
            source: e.into(),
        })?;

        tracing::debug!(root = %repo_root.display(), "opened git repository");

        Ok(Self { repo, repo_root })
    }

    /// Check whether `path` matches an ignore rule of the repository.
    ///
    /// The repository's own `.git` directory is covered by libgit2's built-in
    /// rules and reports as ignored.
    pub fn is_ignored(&self, path: &Path) -> Result<bool, IgnoreError> {
        let canonical = resolve(path).map_err(|e| IgnoreError::EvaluationFailed {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        // Ignore rules are matched against work-tree-relative paths.
        let relative = match canonical.strip_prefix(&self.repo_root) {
            Ok(rel) if rel.as_os_str().is_empty() => return Ok(false),
            Ok(rel) => rel,
            Err(_) => {
                return Err(IgnoreError::EvaluationFailed {
                    source: git2::Error::from_str("path is outside the working directory").into(),
                    path: canonical,
                });
            }
        };

        self.repo
            .is_path_ignored(relative)
            .map_err(|e| IgnoreError::EvaluationFailed {
                path: canonical.clone(),
                source: e.into(),
            })
    }

    /// Inverse of [`is_ignored`](Self::is_ignored).
    pub fn is_included(&self, path: &Path) -> Result<bool, IgnoreError> {
        self.is_ignored(path).map(|ignored| !ignored)
    }

    /// Canonical root of the repository's working tree.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

/// Resolve `path` to an absolute, symlink-free location.
///
/// Only the containing directory is resolved; the final component is kept as
/// is, so a symlink is judged by its own name and not by its target. This also
/// lets dangling links resolve.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            Ok(parent.canonicalize()?.join(name))
        }
        _ => path.canonicalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    #[test]
    fn test_open_without_repository() {
        let dir = TestRepo::new();
        match GitignoreFilter::open(dir.path()) {
            Err(IgnoreError::RepositoryNotFound { .. }) => {}
            Err(e) => panic!("expected RepositoryNotFound, got {e}"),
            Ok(_) => panic!("expected RepositoryNotFound, got a repository"),
        }
    }

    #[test]
    fn test_open_missing_path() {
        let dir = TestRepo::new();
        let result = GitignoreFilter::open(&dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(IgnoreError::OpenFailed { .. })));
    }

    #[test]
    fn test_open_from_subdirectory() {
        let repo = TestRepo::with_git();
        let sub = repo.add_dir("src/nested");

        let filter = GitignoreFilter::open(&sub).unwrap();
        assert_eq!(filter.repo_root(), repo.path().canonicalize().unwrap());
    }

    #[test]
    fn test_ignored_file() {
        let repo = TestRepo::with_git();
        repo.add_file(".gitignore", "*.log\n");
        let log = repo.add_file("debug.log", "log content");
        let src = repo.add_file("main.rs", "fn main() {}");

        let filter = GitignoreFilter::open(repo.path()).unwrap();
        assert!(filter.is_ignored(&log).unwrap());
        assert!(!filter.is_ignored(&src).unwrap());
        assert!(filter.is_included(&src).unwrap());
    }

    #[test]
    fn test_ignored_directory_rule() {
        let repo = TestRepo::with_git();
        repo.add_file(".gitignore", "build/\n");
        repo.add_file("build/out.o", "");
        let build = repo.path().join("build");

        let filter = GitignoreFilter::open(repo.path()).unwrap();
        assert!(filter.is_ignored(&build).unwrap());
    }

    #[test]
    fn test_git_dir_is_ignored() {
        let repo = TestRepo::with_git();
        let filter = GitignoreFilter::open(repo.path()).unwrap();
        assert!(filter.is_ignored(&repo.path().join(".git")).unwrap());
    }

    #[test]
    fn test_repo_root_is_never_ignored() {
        let repo = TestRepo::with_git();
        repo.add_file(".gitignore", "*\n");

        let filter = GitignoreFilter::open(repo.path()).unwrap();
        assert!(!filter.is_ignored(repo.path()).unwrap());
    }

    #[test]
    fn test_missing_parent_is_evaluation_failure() {
        let repo = TestRepo::with_git();
        let filter = GitignoreFilter::open(repo.path()).unwrap();

        let result = filter.is_ignored(&repo.path().join("gone").join("file.txt"));
        assert!(matches!(result, Err(IgnoreError::EvaluationFailed { .. })));
    }

    #[test]
    fn test_path_outside_repository_is_evaluation_failure() {
        let repo = TestRepo::with_git();
        let other = TestRepo::new();
        let stray = other.add_file("stray.txt", "");

        let filter = GitignoreFilter::open(repo.path()).unwrap();
        let result = filter.is_ignored(&stray);
        assert!(matches!(result, Err(IgnoreError::EvaluationFailed { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_keeps_final_component() {
        let repo = TestRepo::new();
        let target = repo.add_file("target.txt", "");
        let link = repo.add_symlink("target.txt", "link.txt");

        let root = repo.path().canonicalize().unwrap();
        assert_eq!(resolve(&link).unwrap(), root.join("link.txt"));
        assert_eq!(resolve(&target).unwrap(), root.join("target.txt"));
    }
}
