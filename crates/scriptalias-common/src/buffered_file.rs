//! In-memory script file.
//!
//! `BufferedFile` stands in for a file on disk when fabricated script content
//! (for example generated alias definitions) has to be fed into a pipeline
//! that only knows how to read files. Mutating operations are accepted and
//! ignored; the content never changes after construction.

use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Attributes reported for a virtual file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileAttributes {
    Normal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferedFile {
    path: PathBuf,
    content: String,
}

impl BufferedFile {
    /// Wrap `content` as the file at `path`. A trailing newline is appended.
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut buffered = String::with_capacity(content.len() + 1);
        buffered.push_str(content);
        buffered.push('\n');
        Self {
            path: path.into(),
            content: buffered,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Never true: the content always ends with a newline.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        true
    }

    pub fn hidden(&self) -> bool {
        false
    }

    pub fn attributes(&self) -> FileAttributes {
        FileAttributes::Normal
    }

    pub fn copy(&self, _destination: &Path, _overwrite: bool) {}

    pub fn delete(&self) {}

    pub fn move_to(&self, _destination: &Path) {}

    /// Open a fresh reader over the UTF-8 content.
    pub fn open(&self) -> Cursor<&[u8]> {
        Cursor::new(self.content.as_bytes())
    }
}
