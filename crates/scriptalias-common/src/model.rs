//! Alias Descriptor Model
//!
//! An alias descriptor is the metadata describing one library function (the
//! "alias target") that should be exposed to build scripts as if it were a
//! native command. Descriptors are produced by an upstream metadata-extraction
//! stage, usually delivered as JSON:
//!
//! ```json
//! {
//!   "name": "CopyFile",
//!   "returnType": { "kind": "named", "namespace": "System", "name": "Void" },
//!   "declaringType": { "kind": "named", "namespace": "", "name": "FileAliases" },
//!   "parameters": [
//!     { "name": "context", "typeRef": { "kind": "named", "namespace": "Cake.Core", "name": "ICakeContext" } },
//!     { "name": "source", "typeRef": { "kind": "named", "namespace": "", "name": "Path" } }
//!   ]
//! }
//! ```
//!
//! All types are immutable inputs to generation. They implement `Hash + Eq` so
//! memoizing layers can key caches on a whole descriptor.

use serde::{Deserialize, Serialize};

/// Namespace of the dialect's "no value" type.
pub const VOID_NAMESPACE: &str = "System";
/// Name of the dialect's "no value" type.
pub const VOID_NAME: &str = "Void";

// =============================================================================
// Type references
// =============================================================================

/// A semantic reference to a type, as produced by metadata extraction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeRef {
    /// A named type such as `System.Collections.Generic.List<T>`.
    #[serde(rename_all = "camelCase")]
    Named {
        #[serde(default)]
        namespace: String,
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<TypeRef>,
    },
    /// A reference to a generic parameter in scope (`T`).
    GenericParameter { name: String },
    /// An array of `element` with the given rank (`T[]`, `T[,]`).
    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: u32,
    },
}

fn default_rank() -> u32 {
    1
}

impl TypeRef {
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Named {
            namespace: namespace.into(),
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// A named type without a namespace.
    pub fn simple(name: impl Into<String>) -> Self {
        Self::named(String::new(), name)
    }

    /// A named type with generic arguments.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        arguments: Vec<TypeRef>,
    ) -> Self {
        TypeRef::Named {
            namespace: namespace.into(),
            name: name.into(),
            arguments,
        }
    }

    pub fn generic_parameter(name: impl Into<String>) -> Self {
        TypeRef::GenericParameter { name: name.into() }
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    /// The explicit "no value" marker (`System.Void`).
    pub fn void() -> Self {
        Self::named(VOID_NAMESPACE, VOID_NAME)
    }

    /// Whether this reference identifies the "no value" type.
    ///
    /// This is an identity check on namespace and name only; generic
    /// arguments are not compared.
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            TypeRef::Named { namespace, name, .. }
                if namespace == VOID_NAMESPACE && name == VOID_NAME
        )
    }
}

// =============================================================================
// Generic parameters
// =============================================================================

/// A generic parameter of the alias target and its constraint expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericParameter {
    pub name: String,
    /// Constraint expressions, kept in declaration order for stable output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }
}

// =============================================================================
// Parameters
// =============================================================================

/// Passing convention of a parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterModifier {
    #[default]
    None,
    Ref,
    Out,
    In,
    /// A trailing variadic array (`params T[]`).
    Params,
}

/// A compile-time default value for an optional parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Integer(i64),
    Text(String),
    Char(char),
    /// An expression emitted verbatim, e.g. an enum member or `default(T)`.
    Raw(String),
}

/// One parameter of the alias target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(default)]
    pub modifier: ParameterModifier,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            default_value: None,
            modifier: ParameterModifier::None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: ParameterModifier) -> Self {
        self.modifier = modifier;
        self
    }
}

// =============================================================================
// Alias descriptor
// =============================================================================

/// Deprecation state of an alias.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObsoleteInfo {
    #[serde(default)]
    pub message: String,
    /// When set, calling the alias raises instead of warning.
    #[serde(default)]
    pub is_error: bool,
}

impl ObsoleteInfo {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// What kind of definition an alias is exposed as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AliasKind {
    #[default]
    Method,
    /// A read-only property; `cached` keeps the first result in a backing field.
    Property {
        #[serde(default)]
        cached: bool,
    },
}

/// Everything a generator needs to emit one alias definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: AliasKind,
    pub return_type: TypeRef,
    pub declaring_type: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<GenericParameter>,
    /// Full parameter list of the target. When non-empty, the first entry is
    /// the receiver that accepts the invocation context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Documentation blob, emitted as-is above the definition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub documentation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsolete: Option<ObsoleteInfo>,
}

impl AliasDescriptor {
    /// A method alias with no generics, parameters, docs, or deprecation.
    pub fn method(name: impl Into<String>, return_type: TypeRef, declaring_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: AliasKind::Method,
            return_type,
            declaring_type,
            generic_parameters: Vec::new(),
            parameters: Vec::new(),
            documentation: String::new(),
            obsolete: None,
        }
    }

    /// A property alias; `parameters` holds only the receiver.
    pub fn property(
        name: impl Into<String>,
        return_type: TypeRef,
        declaring_type: TypeRef,
        cached: bool,
    ) -> Self {
        Self {
            kind: AliasKind::Property { cached },
            ..Self::method(name, return_type, declaring_type)
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_generic_parameter(mut self, parameter: GenericParameter) -> Self {
        self.generic_parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    #[must_use]
    pub fn with_obsolete(mut self, obsolete: ObsoleteInfo) -> Self {
        self.obsolete = Some(obsolete);
        self
    }

    pub fn has_return_value(&self) -> bool {
        !self.return_type.is_void()
    }

    /// Parameters visible to script authors (everything after the receiver).
    pub fn visible_parameters(&self) -> &[Parameter] {
        self.parameters.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
