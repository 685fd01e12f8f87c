//! Common types and utilities for the scriptalias generator.
//!
//! This crate provides the foundational types shared by every scriptalias crate:
//! - The alias descriptor model (`AliasDescriptor`, `TypeRef`, `Parameter`, ...)
//! - The generation error type (`GenerateError`)
//! - Output formatting enums (`NewLineKind`)
//! - An in-memory script file (`BufferedFile`)

// Alias descriptor model - the unit of generation input
pub mod model;
pub use model::{
    AliasDescriptor, AliasKind, DefaultValue, GenericParameter, ObsoleteInfo, Parameter,
    ParameterModifier, TypeRef,
};

// Generation errors
pub mod error;
pub use error::GenerateError;

// Common enums shared by the writer and the CLI
pub mod common;
pub use common::NewLineKind;

// Virtual files for fabricated script content
pub mod buffered_file;
pub use buffered_file::{BufferedFile, FileAttributes};
