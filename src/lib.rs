//! list-files - list a directory tree breadth first, optionally skipping what git ignores

pub mod git;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use git::{GitignoreFilter, IgnoreError};
pub use output::{PathWriter, display_path};
pub use walk::{
    BreadthFirstWalker, FileFilter, Options, PathSink, WalkError, WalkStats, WalkerConfig,
};

/// List `options.root` into `sink`.
///
/// When gitignore filtering is requested but no repository can be opened, the
/// listing proceeds unfiltered.
pub fn run<S: PathSink>(options: &Options, sink: &mut S) -> Result<WalkStats, WalkError> {
    let filter = FileFilter::from_options(options);
    BreadthFirstWalker::new(options.walker_config())
        .with_filter(filter)
        .walk(&options.root, sink)
}
