//! Wire format for editor file-change events.
//!
//! A script-authoring client streams buffer edits to the script server as
//! `FileChange` records. The encoding is little endian and matches the
//! primitives of .NET's `BinaryWriter`, so either side may be implemented
//! on that platform.

pub mod binary;
pub mod file_change;

pub use file_change::{FILE_CHANGE_TYPE_AND_VERSION, FileChange, LineChange};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("type and version does not match: expected {expected:#06x}, found {actual:#06x}")]
    TypeAndVersionMismatch { expected: i16, actual: i16 },

    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error("string is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
