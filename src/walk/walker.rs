//! BreadthFirstWalker - level-order walk over a directory tree

use std::collections::VecDeque;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::{GitignoreFilter, IgnoreError};

use super::config::WalkerConfig;
use super::filter::FileFilter;

/// Receives each path the walker emits, in emission order.
pub trait PathSink {
    fn emit(&mut self, path: &Path) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl PathSink for Vec<PathBuf> {
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        self.push(path.to_path_buf());
        Ok(())
    }
}

/// Errors that abort a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot access '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Filter(#[from] IgnoreError),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Counts reported by a completed walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories visited below the root, whether or not they were emitted.
    pub dirs: usize,
    /// Non-directory entries visited below the root.
    pub files: usize,
    /// Paths handed to the sink.
    pub emitted: usize,
    /// Directories or entries that could not be read.
    pub skipped: usize,
}

/// A pending path on the frontier.
struct Candidate {
    path: PathBuf,
    /// Type of the path itself; symlinks are not followed.
    file_type: FileType,
    depth: usize,
}

/// Walks a tree in breadth-first order, emitting every admitted path except
/// the root.
///
/// Symbolic links are emitted but never expanded. That single rule is what
/// keeps the walk free of cycles, so no visited set is kept.
pub struct BreadthFirstWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl BreadthFirstWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: FileFilter::All,
        }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set gitignore-based filtering.
    pub fn with_gitignore_filter(self, filter: GitignoreFilter) -> Self {
        self.with_filter(FileFilter::Gitignore(filter))
    }

    /// Walk `root` and send surviving paths to `sink`.
    ///
    /// The root is checked against the filter once; if it is excluded nothing
    /// is emitted. Unreadable directories below the root are skipped with a
    /// warning. A failed ignore query aborts the walk.
    pub fn walk<S: PathSink>(&self, root: &Path, sink: &mut S) -> Result<WalkStats, WalkError> {
        let root_type = fs::symlink_metadata(root)
            .map_err(|source| WalkError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?
            .file_type();

        let mut stats = WalkStats::default();

        if !self.filter.includes(root)? {
            tracing::debug!(root = %root.display(), "root is excluded by the filter");
            sink.finish()?;
            return Ok(stats);
        }
        if root_type.is_symlink() {
            tracing::debug!(root = %root.display(), "root is a symbolic link, not expanding");
        }

        let mut queue = VecDeque::new();
        queue.push_back(Candidate {
            path: root.to_path_buf(),
            file_type: root_type,
            depth: 0,
        });

        while let Some(next) = queue.pop_front() {
            if next.depth > 0 {
                self.emit(&next, sink, &mut stats)?;
            }
            if next.file_type.is_symlink() {
                continue;
            }
            if next.file_type.is_dir() {
                self.expand(&next, &mut queue, &mut stats)?;
            }
        }

        sink.finish()?;
        tracing::debug!(?stats, "walk complete");
        Ok(stats)
    }

    fn emit<S: PathSink>(
        &self,
        candidate: &Candidate,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> Result<(), WalkError> {
        // A link to a directory counts as a directory here, even though it is
        // never expanded.
        let is_dir = if candidate.file_type.is_symlink() {
            candidate.path.is_dir()
        } else {
            candidate.file_type.is_dir()
        };

        if is_dir {
            stats.dirs += 1;
            if self.config.files_only {
                return Ok(());
            }
        } else {
            stats.files += 1;
        }

        sink.emit(&candidate.path)?;
        stats.emitted += 1;
        Ok(())
    }

    /// List a directory and push every admitted entry onto the frontier.
    fn expand(
        &self,
        dir: &Candidate,
        queue: &mut VecDeque<Candidate>,
        stats: &mut WalkStats,
    ) -> Result<(), WalkError> {
        let entries = match fs::read_dir(&dir.path) {
            Ok(entries) => entries,
            Err(source) if dir.depth == 0 => {
                return Err(WalkError::RootUnreadable {
                    path: dir.path.clone(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!(path = %dir.path.display(), error = %e, "skipping unreadable directory");
                stats.skipped += 1;
                return Ok(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(path = %dir.path.display(), error = %e, "skipping unreadable entry");
                    stats.skipped += 1;
                    continue;
                }
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping entry with unknown type");
                    stats.skipped += 1;
                    continue;
                }
            };

            if self.filter.includes(&path)? {
                queue.push_back(Candidate {
                    path,
                    file_type,
                    depth: dir.depth + 1,
                });
            }
        }

        Ok(())
    }
}
