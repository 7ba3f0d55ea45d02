//! Breadth-first directory walking
//!
//! - `BreadthFirstWalker`: drives the level-order walk from a single root
//! - `FileFilter`: decides which candidate paths may join the walk
//! - `PathSink`: receives every path the walker emits

mod config;
mod filter;
mod walker;

pub use config::{Options, WalkerConfig};
pub use filter::FileFilter;
pub use walker::{BreadthFirstWalker, PathSink, WalkError, WalkStats};
