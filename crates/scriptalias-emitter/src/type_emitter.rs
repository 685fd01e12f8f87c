//! Type Emitter - Convert `TypeRef` to dialect syntax
//!
//! Renders the semantic type references produced by metadata extraction as
//! C# script type names.
//!
//! # Examples
//!
//! ```
//! use scriptalias_common::TypeRef;
//! use scriptalias_emitter::{CSharpTypeEmitter, TypeEmitter};
//!
//! let emitter = CSharpTypeEmitter::new();
//! let list = TypeRef::generic(
//!     "System.Collections.Generic",
//!     "List`1",
//!     vec![TypeRef::named("System", "String")],
//! );
//! assert_eq!(
//!     emitter.emit_type(&list),
//!     "System.Collections.Generic.List<System.String>"
//! );
//! ```

use scriptalias_common::TypeRef;

use crate::source_writer::SourceWriter;

/// Renders a type reference as text.
///
/// Implementations must be deterministic, free of side effects, and total
/// over every `TypeRef` the metadata layer can produce.
pub trait TypeEmitter: Send + Sync {
    fn emit_type(&self, type_ref: &TypeRef) -> String;

    fn write_type(&self, writer: &mut SourceWriter, type_ref: &TypeRef) {
        writer.write(&self.emit_type(type_ref));
    }
}

/// Default emitter producing fully qualified C# type names.
#[derive(Clone, Debug, Default)]
pub struct CSharpTypeEmitter {
    use_keywords: bool,
}

impl CSharpTypeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render well-known `System` types with their C# keyword.
    pub fn with_keywords(use_keywords: bool) -> Self {
        Self { use_keywords }
    }

    fn print(&self, type_ref: &TypeRef, out: &mut String) {
        match type_ref {
            TypeRef::Named {
                namespace,
                name,
                arguments,
            } => {
                if self.use_keywords
                    && arguments.is_empty()
                    && let Some(keyword) = keyword_for(namespace, name)
                {
                    out.push_str(keyword);
                    return;
                }
                if !namespace.is_empty() {
                    out.push_str(namespace);
                    out.push('.');
                }
                push_metadata_name(name, out);
                if !arguments.is_empty() {
                    out.push('<');
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.print(argument, out);
                    }
                    out.push('>');
                }
            }
            TypeRef::GenericParameter { name } => out.push_str(name),
            TypeRef::Array { element, rank } => {
                self.print(element, out);
                out.push('[');
                for _ in 1..*rank {
                    out.push(',');
                }
                out.push(']');
            }
        }
    }
}

impl TypeEmitter for CSharpTypeEmitter {
    fn emit_type(&self, type_ref: &TypeRef) -> String {
        let mut out = String::new();
        self.print(type_ref, &mut out);
        out
    }
}

/// Strip the metadata arity suffix (`` List`1 ``) and turn nested-type
/// separators (`Outer+Inner`) into dots.
fn push_metadata_name(name: &str, out: &mut String) {
    for (i, segment) in name.split('+').enumerate() {
        if i > 0 {
            out.push('.');
        }
        let plain = segment.split('`').next().unwrap_or(segment);
        out.push_str(plain);
    }
}

fn keyword_for(namespace: &str, name: &str) -> Option<&'static str> {
    if namespace != "System" {
        return None;
    }
    let keyword = match name {
        "Void" => "void",
        "Object" => "object",
        "String" => "string",
        "Boolean" => "bool",
        "Char" => "char",
        "Byte" => "byte",
        "SByte" => "sbyte",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Single" => "float",
        "Double" => "double",
        "Decimal" => "decimal",
        _ => return None,
    };
    Some(keyword)
}

#[cfg(test)]
#[path = "tests/type_emitter_tests.rs"]
mod tests;
