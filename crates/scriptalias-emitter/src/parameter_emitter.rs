//! Parameter Emitter
//!
//! Renders parameter lists in one of two modes:
//!
//! - [`EmitMode::Declaration`]: `[modifier ]Type name[ = default]`
//! - [`EmitMode::Invocation`]: `[ref|out|in ]name`
//!
//! Each parameter becomes one fragment; callers join fragments with `, `.

use std::borrow::Cow;
use std::sync::Arc;

use scriptalias_common::{DefaultValue, Parameter, ParameterModifier};

use crate::tokens::{escape_char_literal, escape_string_literal};
use crate::type_emitter::{CSharpTypeEmitter, TypeEmitter};

/// Whether parameters are being declared or passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitMode {
    Declaration,
    Invocation,
}

/// Renders parameters as text fragments.
pub trait ParameterEmitter: Send + Sync {
    /// The space-separated tokens of a single parameter.
    fn parameter_tokens(&self, parameter: &Parameter, mode: EmitMode) -> Vec<String>;

    /// One fragment per parameter, in order.
    fn emit_parameters(&self, parameters: &[Parameter], mode: EmitMode) -> Vec<String> {
        parameters
            .iter()
            .map(|parameter| self.parameter_tokens(parameter, mode).join(" "))
            .collect()
    }
}

/// Default C# parameter emitter.
#[derive(Clone)]
pub struct CSharpParameterEmitter {
    type_emitter: Arc<dyn TypeEmitter>,
}

impl CSharpParameterEmitter {
    pub fn new(type_emitter: Arc<dyn TypeEmitter>) -> Self {
        Self { type_emitter }
    }
}

impl Default for CSharpParameterEmitter {
    fn default() -> Self {
        Self::new(Arc::new(CSharpTypeEmitter::new()))
    }
}

impl ParameterEmitter for CSharpParameterEmitter {
    fn parameter_tokens(&self, parameter: &Parameter, mode: EmitMode) -> Vec<String> {
        let mut tokens = Vec::with_capacity(5);
        let name = escape_identifier(&parameter.name).into_owned();

        match mode {
            EmitMode::Declaration => {
                if let Some(modifier) = modifier_keyword(parameter.modifier, mode) {
                    tokens.push(modifier.to_string());
                }
                tokens.push(self.type_emitter.emit_type(&parameter.type_ref));
                tokens.push(name);
                if let Some(value) = &parameter.default_value {
                    tokens.push("=".to_string());
                    tokens.push(default_value_text(value));
                }
            }
            EmitMode::Invocation => {
                if let Some(modifier) = modifier_keyword(parameter.modifier, mode) {
                    tokens.push(modifier.to_string());
                }
                tokens.push(name);
            }
        }

        tokens
    }
}

fn modifier_keyword(modifier: ParameterModifier, mode: EmitMode) -> Option<&'static str> {
    match (modifier, mode) {
        (ParameterModifier::None, _) => None,
        (ParameterModifier::Ref, _) => Some("ref"),
        (ParameterModifier::Out, _) => Some("out"),
        (ParameterModifier::In, _) => Some("in"),
        (ParameterModifier::Params, EmitMode::Declaration) => Some("params"),
        (ParameterModifier::Params, EmitMode::Invocation) => None,
    }
}

fn default_value_text(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Null => "null".to_string(),
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Integer(n) => n.to_string(),
        DefaultValue::Text(text) => format!("\"{}\"", escape_string_literal(text)),
        DefaultValue::Char(ch) => format!("'{}'", escape_char_literal(*ch)),
        DefaultValue::Raw(expression) => expression.clone(),
    }
}

/// Prefix reserved words with `@` so they are valid identifiers.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if RESERVED_KEYWORDS.binary_search(&name).is_ok() {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

// Sorted for binary search.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

#[cfg(test)]
#[path = "tests/parameter_emitter_tests.rs"]
mod tests;
