//! Configuration types for walking

use std::path::PathBuf;

/// Options for a single listing run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory the walk starts from.
    pub root: PathBuf,
    /// Suppress directories from output; they are still traversed.
    pub files_only: bool,
    /// Skip paths ignored by the enclosing git repository, if there is one.
    pub use_gitignore: bool,
}

impl Options {
    /// Walker settings derived from these options.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            files_only: self.files_only,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            files_only: false,
            use_gitignore: false,
        }
    }
}

/// Configuration for walking behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkerConfig {
    pub files_only: bool,
}
