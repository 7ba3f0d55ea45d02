//! Path rendering and output
//!
//! - `format` - choose the shorter of a path's absolute and relative spellings
//! - `writer` - line-oriented sink for walker output

mod format;
mod writer;

pub use format::display_path;
pub use writer::PathWriter;
