//! Property aliases.
//!
//! A property alias exposes a context-only target as a read-only property:
//!
//! ```text
//! public Cake.Core.ICakeEnvironment Environment
//! {
//!     get
//!     {
//!         return EnvironmentAliases.Environment(Context);
//!     }
//! }
//! ```
//!
//! Cached properties store the first result in a backing field and guard it
//! with an initialization flag, so value types are cached too.

use std::sync::Arc;

use scriptalias_common::{AliasDescriptor, AliasKind, GenerateError};

use super::AliasGenerator;
use super::helpers::{write_documentation, write_guarded_body, write_parameters};
use crate::parameter_emitter::{EmitMode, ParameterEmitter};
use crate::source_writer::SourceWriter;
use crate::tokens;
use crate::type_emitter::TypeEmitter;

pub struct PropertyAliasGenerator {
    type_emitter: Arc<dyn TypeEmitter>,
    parameter_emitter: Arc<dyn ParameterEmitter>,
}

impl PropertyAliasGenerator {
    pub fn new(
        type_emitter: Arc<dyn TypeEmitter>,
        parameter_emitter: Arc<dyn ParameterEmitter>,
    ) -> Self {
        Self {
            type_emitter,
            parameter_emitter,
        }
    }

    fn check(alias: &AliasDescriptor) -> Result<bool, GenerateError> {
        let AliasKind::Property { cached } = alias.kind else {
            return Err(GenerateError::invalid_argument(
                "alias",
                format!("`{}` is not a property alias", alias.name),
            ));
        };
        if !alias.has_return_value() {
            return Err(GenerateError::invalid_argument(
                "alias",
                format!("property alias `{}` must return a value", alias.name),
            ));
        }
        if !alias.generic_parameters.is_empty() {
            return Err(GenerateError::invalid_argument(
                "alias",
                format!("property alias `{}` cannot be generic", alias.name),
            ));
        }
        if !alias.visible_parameters().is_empty() {
            return Err(GenerateError::invalid_argument(
                "alias",
                format!(
                    "property alias `{}` can only take the context parameter",
                    alias.name
                ),
            ));
        }
        Ok(cached)
    }

    fn write_call(&self, writer: &mut SourceWriter, alias: &AliasDescriptor) {
        self.type_emitter.write_type(writer, &alias.declaring_type);
        writer.write(".");
        writer.write(&alias.name);
        writer.write("(");
        write_parameters(
            writer,
            self.parameter_emitter.as_ref(),
            alias,
            EmitMode::Invocation,
        );
        writer.write(")");
    }

    fn write_getter_body(&self, writer: &mut SourceWriter, alias: &AliasDescriptor, cached: bool) {
        if !cached {
            writer.write("return ");
            self.write_call(writer, alias);
            writer.write(";");
            return;
        }

        let field = backing_field_name(&alias.name);
        writer.write("if (!");
        writer.write(&field);
        writer.write("Initialized)");
        writer.write_line();
        writer.write("{");
        {
            let mut block = writer.begin_scope();
            block.write(&field);
            block.write(" = ");
            self.write_call(&mut block, alias);
            block.write(";");
            block.write_line();
            block.write(&field);
            block.write("Initialized = true;");
        }
        writer.write("}");
        writer.write_line();
        writer.write("return ");
        writer.write(&field);
        writer.write(";");
    }
}

fn backing_field_name(name: &str) -> String {
    format!("_{name}")
}

impl AliasGenerator for PropertyAliasGenerator {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        let cached = Self::check(alias)?;
        tracing::debug!(alias = %alias.name, cached, "emitting property alias");

        let return_type = self.type_emitter.emit_type(&alias.return_type);

        if cached {
            let field = backing_field_name(&alias.name);
            writer.write(tokens::PRIVATE);
            writer.write_space();
            writer.write(&return_type);
            writer.write_space();
            writer.write(&field);
            writer.write(";");
            writer.write_line();
            writer.write(tokens::PRIVATE);
            writer.write(" bool ");
            writer.write(&field);
            writer.write("Initialized;");
            writer.write_line();
        }

        write_documentation(writer, &alias.documentation);

        writer.write(tokens::PUBLIC);
        writer.write_space();
        writer.write(&return_type);
        writer.write_space();
        writer.write(&alias.name);
        writer.write_line();
        writer.write("{");
        {
            let mut property = writer.begin_scope();
            property.write("get");
            property.write_line();
            property.write("{");
            {
                let mut getter = property.begin_scope();
                write_guarded_body(&mut getter, self.type_emitter.as_ref(), alias, |w| {
                    self.write_getter_body(w, alias, cached)
                });
            }
            property.write("}");
        }
        writer.write("}");

        Ok(())
    }
}
