//! Emission helpers shared by the method and property generators.

use scriptalias_common::{AliasDescriptor, GenericParameter, ObsoleteInfo, TypeRef};

use crate::parameter_emitter::{EmitMode, ParameterEmitter};
use crate::source_writer::SourceWriter;
use crate::tokens;
use crate::type_emitter::TypeEmitter;

/// Write the documentation blob verbatim, one line per source line.
///
/// Only an empty blob is skipped. Line terminators follow the writer and every
/// line is indented at the current level.
pub(super) fn write_documentation(writer: &mut SourceWriter, documentation: &str) {
    if documentation.is_empty() {
        return;
    }
    writer.write_lines(documentation);
    writer.write_line();
}

/// `void` for the "no value" marker, otherwise the rendered type.
pub(super) fn write_return_type(
    writer: &mut SourceWriter,
    type_emitter: &dyn TypeEmitter,
    return_type: &TypeRef,
) {
    if return_type.is_void() {
        writer.write(tokens::VOID);
    } else {
        type_emitter.write_type(writer, return_type);
    }
}

/// `<T,U>` suffix; nothing when there are no generic parameters.
pub(super) fn write_generic_arguments(writer: &mut SourceWriter, generics: &[GenericParameter]) {
    if generics.is_empty() {
        return;
    }
    writer.write("<");
    for (i, generic) in generics.iter().enumerate() {
        if i > 0 {
            writer.write(",");
        }
        writer.write(&generic.name);
    }
    writer.write(">");
}

/// One ` where T : A,B` clause per constrained generic parameter.
pub(super) fn write_generic_constraints(writer: &mut SourceWriter, generics: &[GenericParameter]) {
    for generic in generics.iter().filter(|g| !g.constraints.is_empty()) {
        writer.write(" where ");
        writer.write(&generic.name);
        writer.write(" : ");
        writer.write(&generic.constraints.join(","));
    }
}

/// Render the parameter list with the receiver hidden.
///
/// The first parameter is the receiver. Declarations drop it; invocations put
/// the context token in its place. An empty list stays empty in both modes.
pub(super) fn write_parameters(
    writer: &mut SourceWriter,
    parameter_emitter: &dyn ParameterEmitter,
    alias: &AliasDescriptor,
    mode: EmitMode,
) {
    if alias.parameters.is_empty() {
        return;
    }

    let mut fragments = parameter_emitter.emit_parameters(alias.visible_parameters(), mode);
    if mode == EmitMode::Invocation {
        fragments.insert(0, tokens::CONTEXT.to_string());
    }
    writer.write(&fragments.join(", "));
}

/// Deprecation message naming the alias by its declaring type.
pub(super) fn obsolete_message(
    type_emitter: &dyn TypeEmitter,
    alias: &AliasDescriptor,
    obsolete: &ObsoleteInfo,
) -> String {
    let mut message = format!(
        "The alias {}.{} has been made obsolete.",
        type_emitter.emit_type(&alias.declaring_type),
        alias.name
    );
    let detail = obsolete.message.trim();
    if !detail.is_empty() {
        message.push(' ');
        message.push_str(detail);
    }
    tokens::escape_string_literal(&message)
}

/// Write a body that honours the alias's deprecation state.
///
/// - error: a single throw, `invocation` is never written
/// - warning: log, suppression begin, `invocation`, suppression end
/// - none: only `invocation`
pub(super) fn write_guarded_body(
    writer: &mut SourceWriter,
    type_emitter: &dyn TypeEmitter,
    alias: &AliasDescriptor,
    invocation: impl FnOnce(&mut SourceWriter),
) {
    let Some(obsolete) = &alias.obsolete else {
        invocation(writer);
        return;
    };

    let message = obsolete_message(type_emitter, alias, obsolete);
    if obsolete.is_error {
        writer.write("throw new ");
        writer.write(tokens::OBSOLETE_EXCEPTION);
        writer.write("(\"");
        writer.write(&message);
        writer.write("\");");
        return;
    }

    writer.write(tokens::LOG_WARNING);
    writer.write("(\"");
    writer.write(tokens::WARNING_PREFIX);
    writer.write(&message);
    writer.write("\");");
    writer.write_line();
    writer.write(tokens::PRAGMA_DISABLE_OBSOLETE);
    writer.write_line();
    invocation(writer);
    writer.write_line();
    writer.write(tokens::PRAGMA_RESTORE_OBSOLETE);
}
