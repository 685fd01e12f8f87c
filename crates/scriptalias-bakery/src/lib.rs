//! Script server plumbing around the alias generator.
//!
//! The script server repeatedly re-evaluates the same build script while the
//! user edits it. Installing addins, discovering aliases, and generating alias
//! definitions are all pure functions of their inputs for the lifetime of the
//! server, so each is wrapped in a memoizing decorator:
//!
//! - [`CachingScriptProcessor`]: one install per addin package
//! - [`CachingScriptAliasFinder`]: one discovery per assembly
//! - [`CachingLoadDirectiveProvider`]: one resolution per `#load` directive
//! - [`scriptalias_emitter::CachingAliasGenerator`]: one render per descriptor
//!
//! [`CacheModule`] wires the four together and [`CachedServices`] turns a set
//! of addins into an in-memory alias script.

pub mod alias_finder;
pub mod load_directive;
pub mod module;
pub mod package;
pub mod processor;

pub use alias_finder::{CachingScriptAliasFinder, ScriptAliasFinder};
pub use load_directive::{CachingLoadDirectiveProvider, LoadDirectiveProvider, LoadReference};
pub use module::{CacheModule, CachedServices};
pub use package::PackageReference;
pub use processor::{CachingScriptProcessor, ScriptProcessor};
