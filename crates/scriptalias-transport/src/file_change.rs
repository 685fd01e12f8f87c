//! File-change records.
//!
//! Layout:
//!
//! ```text
//! i16     type and version (0x0101)
//! bool    from disk
//! string  buffer
//! string  file name
//! i32     line change count
//! repeated:
//!   i32 start line, i32 end line, i32 start column, i32 end column
//!   string new text
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::binary::{BinaryRead, BinaryWrite};
use crate::{Result, TransportError};

/// Record type 1, format version 1.
pub const FILE_CHANGE_TYPE_AND_VERSION: i16 = 0x0101;

/// An edit to a range of lines in an open script buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChange {
    pub start_line: i32,
    pub end_line: i32,
    pub start_column: i32,
    pub end_column: i32,
    pub new_text: String,
}

/// A change to a script file, either a full buffer or incremental line edits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    /// The server should reload the file from disk instead of using `buffer`.
    pub from_disk: bool,
    pub buffer: String,
    pub file_name: String,
    pub line_changes: Vec<LineChange>,
}

impl FileChange {
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_i16(FILE_CHANGE_TYPE_AND_VERSION)?;
        writer.write_bool(self.from_disk)?;
        writer.write_string(&self.buffer)?;
        writer.write_string(&self.file_name)?;

        let count = i32::try_from(self.line_changes.len()).map_err(|_| {
            TransportError::InvalidLength(format!("{} line changes", self.line_changes.len()))
        })?;
        writer.write_i32(count)?;
        for change in &self.line_changes {
            writer.write_i32(change.start_line)?;
            writer.write_i32(change.end_line)?;
            writer.write_i32(change.start_column)?;
            writer.write_i32(change.end_column)?;
            writer.write_string(&change.new_text)?;
        }

        tracing::trace!(
            file = %self.file_name,
            line_changes = count,
            "serialized file change"
        );
        Ok(())
    }

    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let type_and_version = reader.read_i16()?;
        if type_and_version != FILE_CHANGE_TYPE_AND_VERSION {
            return Err(TransportError::TypeAndVersionMismatch {
                expected: FILE_CHANGE_TYPE_AND_VERSION,
                actual: type_and_version,
            });
        }

        let from_disk = reader.read_bool()?;
        let buffer = reader.read_string()?;
        let file_name = reader.read_string()?;

        let count = reader.read_i32()?;
        let count = usize::try_from(count)
            .map_err(|_| TransportError::InvalidLength(format!("line change count {count}")))?;

        // The count comes off the wire; cap the preallocation.
        let mut line_changes = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            line_changes.push(LineChange {
                start_line: reader.read_i32()?,
                end_line: reader.read_i32()?,
                start_column: reader.read_i32()?,
                end_column: reader.read_i32()?,
                new_text: reader.read_string()?,
            });
        }

        Ok(FileChange {
            from_disk,
            buffer,
            file_name,
            line_changes,
        })
    }

    /// Encode into a fresh byte buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        Self::read_from(&mut bytes)
    }
}
