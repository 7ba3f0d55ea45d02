//! Line-oriented output for walked paths

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::walk::PathSink;

use super::format::display_path;

/// Writes one rendered path per line.
///
/// Paths are rendered relative to `base`, which defaults to the process
/// working directory at construction time.
pub struct PathWriter<W: Write> {
    out: W,
    base: PathBuf,
}

impl<W: Write> PathWriter<W> {
    pub fn new(out: W) -> Self {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_base(out, base)
    }

    pub fn with_base(out: W, base: impl Into<PathBuf>) -> Self {
        Self {
            out,
            base: base.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PathSink for PathWriter<W> {
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        let rendered = display_path(path, &self.base);
        self.out.write_all(rendered.as_os_str().as_encoded_bytes())?;
        self.out.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
