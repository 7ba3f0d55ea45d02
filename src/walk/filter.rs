//! Path inclusion for walking

use std::path::Path;

use crate::git::{GitignoreFilter, IgnoreError};

use super::config::Options;

/// Decides whether a candidate path is admitted to the walk.
#[derive(Default)]
pub enum FileFilter {
    /// Admit everything.
    #[default]
    All,
    /// Admit what the repository's ignore rules do not exclude.
    Gitignore(GitignoreFilter),
}

impl FileFilter {
    /// Select the filter for a run.
    ///
    /// Gitignore filtering is best effort: when no repository can be opened at
    /// or above the root, the walk proceeds unfiltered.
    pub fn from_options(options: &Options) -> Self {
        if !options.use_gitignore {
            return Self::All;
        }
        match GitignoreFilter::open(&options.root) {
            Ok(filter) => Self::Gitignore(filter),
            Err(e) => {
                tracing::debug!(error = %e, "gitignore filtering unavailable, listing all files");
                Self::All
            }
        }
    }

    /// Check if a path should be included.
    pub fn includes(&self, path: &Path) -> Result<bool, IgnoreError> {
        match self {
            Self::All => Ok(true),
            Self::Gitignore(filter) => filter.is_included(path),
        }
    }

    pub fn is_gitignore(&self) -> bool {
        matches!(self, Self::Gitignore(_))
    }
}

impl From<GitignoreFilter> for FileFilter {
    fn from(filter: GitignoreFilter) -> Self {
        Self::Gitignore(filter)
    }
}
