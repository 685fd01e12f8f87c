//! Alias Generators
//!
//! Each generator renders one kind of alias target. Generators hold no state
//! across calls, so one instance can be shared by many threads.
//!
//! - [`MethodAliasGenerator`]: a method forwarding to the target function
//! - [`PropertyAliasGenerator`]: a read-only property, optionally memoized
//! - [`ScriptAliasGenerator`]: dispatches on [`AliasKind`]

mod helpers;
mod method;
mod property;

pub use method::MethodAliasGenerator;
pub use property::PropertyAliasGenerator;

use std::sync::Arc;

use rayon::prelude::*;
use scriptalias_common::{AliasDescriptor, AliasKind, GenerateError, NewLineKind};

use crate::options::GeneratorOptions;
use crate::parameter_emitter::{CSharpParameterEmitter, ParameterEmitter};
use crate::source_writer::SourceWriter;
use crate::type_emitter::{CSharpTypeEmitter, TypeEmitter};

/// Renders an alias descriptor as dialect source text.
pub trait AliasGenerator: Send + Sync {
    /// Write the definition of `alias` to `writer`.
    ///
    /// On `Err` nothing has been written.
    fn generate(&self, writer: &mut SourceWriter, alias: &AliasDescriptor)
    -> Result<(), GenerateError>;
}

impl<G: AliasGenerator + ?Sized> AliasGenerator for Arc<G> {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        (**self).generate(writer, alias)
    }
}

impl<G: AliasGenerator + ?Sized> AliasGenerator for Box<G> {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        (**self).generate(writer, alias)
    }
}

/// Generator for every alias kind, routing on the descriptor's `kind`.
pub struct ScriptAliasGenerator {
    method: MethodAliasGenerator,
    property: PropertyAliasGenerator,
}

impl ScriptAliasGenerator {
    /// Build a generator with the default C# renderers for `options`.
    pub fn new(options: &GeneratorOptions) -> Self {
        let type_emitter: Arc<dyn TypeEmitter> =
            Arc::new(CSharpTypeEmitter::with_keywords(options.use_type_keywords));
        let parameter_emitter: Arc<dyn ParameterEmitter> =
            Arc::new(CSharpParameterEmitter::new(Arc::clone(&type_emitter)));
        Self::with_emitters(type_emitter, parameter_emitter)
    }

    pub fn with_emitters(
        type_emitter: Arc<dyn TypeEmitter>,
        parameter_emitter: Arc<dyn ParameterEmitter>,
    ) -> Self {
        Self {
            method: MethodAliasGenerator::new(
                Arc::clone(&type_emitter),
                Arc::clone(&parameter_emitter),
            ),
            property: PropertyAliasGenerator::new(type_emitter, parameter_emitter),
        }
    }
}

impl Default for ScriptAliasGenerator {
    fn default() -> Self {
        Self::new(&GeneratorOptions::default())
    }
}

impl AliasGenerator for ScriptAliasGenerator {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        match alias.kind {
            AliasKind::Method => self.method.generate(writer, alias),
            AliasKind::Property { .. } => self.property.generate(writer, alias),
        }
    }
}

/// Render one alias into a fresh writer.
pub fn generate_to_string<G: AliasGenerator + ?Sized>(
    generator: &G,
    alias: &AliasDescriptor,
    options: &GeneratorOptions,
) -> Result<String, GenerateError> {
    let mut writer = SourceWriter::from_options(options);
    generator.generate(&mut writer, alias)?;
    Ok(writer.finish())
}

/// Render many aliases in parallel.
///
/// Output order matches input order. If several aliases fail, the error of
/// the first failing alias (in input order) is returned.
pub fn generate_all<G: AliasGenerator + ?Sized>(
    generator: &G,
    aliases: &[AliasDescriptor],
    options: &GeneratorOptions,
) -> Result<Vec<String>, GenerateError> {
    let _span = tracing::debug_span!("generate_all", count = aliases.len()).entered();

    let results: Vec<Result<String, GenerateError>> = aliases
        .par_iter()
        .map(|alias| generate_to_string(generator, alias, options))
        .collect();

    results.into_iter().collect()
}

/// Join rendered definitions into one source unit, separated by blank lines.
pub fn join_definitions(definitions: &[String], new_line: NewLineKind) -> String {
    let separator = new_line.as_str().repeat(2);
    let mut joined = definitions.join(&separator);
    if !joined.is_empty() {
        joined.push_str(new_line.as_str());
    }
    joined
}
