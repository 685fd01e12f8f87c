//! Method aliases.
//!
//! ```text
//! /// <summary>Copies a file.</summary>
//! public void CopyFile(Path source, Path dest)
//! {
//!     FileAliases.CopyFile(Context, source, dest);
//! }
//! ```

use std::sync::Arc;

use scriptalias_common::{AliasDescriptor, AliasKind, GenerateError};

use super::AliasGenerator;
use super::helpers::{
    write_documentation, write_generic_arguments, write_generic_constraints, write_guarded_body,
    write_parameters, write_return_type,
};
use crate::parameter_emitter::{EmitMode, ParameterEmitter};
use crate::source_writer::SourceWriter;
use crate::tokens;
use crate::type_emitter::TypeEmitter;

pub struct MethodAliasGenerator {
    type_emitter: Arc<dyn TypeEmitter>,
    parameter_emitter: Arc<dyn ParameterEmitter>,
}

impl MethodAliasGenerator {
    pub fn new(
        type_emitter: Arc<dyn TypeEmitter>,
        parameter_emitter: Arc<dyn ParameterEmitter>,
    ) -> Self {
        Self {
            type_emitter,
            parameter_emitter,
        }
    }

    fn write_invocation(&self, writer: &mut SourceWriter, alias: &AliasDescriptor) {
        if alias.has_return_value() {
            writer.write("return ");
        }

        self.type_emitter.write_type(writer, &alias.declaring_type);
        writer.write(".");
        writer.write(&alias.name);
        write_generic_arguments(writer, &alias.generic_parameters);

        writer.write("(");
        write_parameters(
            writer,
            self.parameter_emitter.as_ref(),
            alias,
            EmitMode::Invocation,
        );
        writer.write(");");
    }
}

impl AliasGenerator for MethodAliasGenerator {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        if alias.kind != AliasKind::Method {
            return Err(GenerateError::invalid_argument(
                "alias",
                format!("`{}` is not a method alias", alias.name),
            ));
        }
        tracing::debug!(alias = %alias.name, obsolete = alias.obsolete.is_some(), "emitting method alias");

        write_documentation(writer, &alias.documentation);

        writer.write(tokens::PUBLIC);
        writer.write_space();
        write_return_type(writer, self.type_emitter.as_ref(), &alias.return_type);
        writer.write_space();
        writer.write(&alias.name);
        write_generic_arguments(writer, &alias.generic_parameters);

        writer.write("(");
        write_parameters(
            writer,
            self.parameter_emitter.as_ref(),
            alias,
            EmitMode::Declaration,
        );
        writer.write(")");
        write_generic_constraints(writer, &alias.generic_parameters);

        writer.write_line();
        writer.write("{");
        {
            let mut body = writer.begin_scope();
            write_guarded_body(&mut body, self.type_emitter.as_ref(), alias, |w| {
                self.write_invocation(w, alias)
            });
        }
        writer.write("}");

        Ok(())
    }
}
