//! Alias definition emitter for scriptalias.
//!
//! Turns an [`AliasDescriptor`] into a script-dialect definition that calls the
//! underlying library function with the invocation context filled in:
//!
//! ```text
//! public void CopyFile(Path source, Path dest)
//! {
//!     FileAliases.CopyFile(Context, source, dest);
//! }
//! ```
//!
//! The crate is organised leaves first:
//! - [`source_writer`]: indentation-aware output with scoped blocks
//! - [`type_emitter`] and [`parameter_emitter`]: pluggable renderers
//! - [`generators`]: the method and property alias strategies
//! - [`caching`]: a memoizing decorator over any generator

pub mod caching;
pub mod generators;
pub mod options;
pub mod parameter_emitter;
pub mod source_writer;
pub mod tokens;
pub mod type_emitter;

pub use caching::CachingAliasGenerator;
pub use generators::{
    AliasGenerator, MethodAliasGenerator, PropertyAliasGenerator, ScriptAliasGenerator,
    generate_all, generate_to_string, join_definitions,
};
pub use options::GeneratorOptions;
pub use parameter_emitter::{CSharpParameterEmitter, EmitMode, ParameterEmitter};
pub use source_writer::{IndentScope, SourceWriter};
pub use type_emitter::{CSharpTypeEmitter, TypeEmitter};

pub use scriptalias_common::{AliasDescriptor, GenerateError};
