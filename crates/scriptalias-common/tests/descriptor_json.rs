//! Integration tests for the JSON form of alias descriptors

use scriptalias_common::{
    AliasDescriptor, AliasKind, DefaultValue, GenericParameter, ObsoleteInfo, Parameter,
    ParameterModifier, TypeRef,
};

#[test]
fn test_minimal_descriptor_uses_defaults() {
    let json = r#"{
        "name": "CopyFile",
        "returnType": { "kind": "named", "namespace": "System", "name": "Void" },
        "declaringType": { "kind": "named", "name": "FileAliases" }
    }"#;

    let alias: AliasDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(alias.name, "CopyFile");
    assert_eq!(alias.kind, AliasKind::Method);
    assert!(alias.return_type.is_void());
    assert_eq!(alias.declaring_type, TypeRef::simple("FileAliases"));
    assert!(alias.parameters.is_empty());
    assert!(alias.generic_parameters.is_empty());
    assert!(alias.documentation.is_empty());
    assert!(alias.obsolete.is_none());
}

#[test]
fn test_full_descriptor_parses_every_field() {
    let json = r#"{
        "name": "Select",
        "kind": { "type": "method" },
        "returnType": { "kind": "array", "element": { "kind": "genericParameter", "name": "T" } },
        "declaringType": { "kind": "named", "namespace": "Cake.Common", "name": "SelectAliases" },
        "genericParameters": [
            { "name": "T", "constraints": ["class", "new()"] }
        ],
        "parameters": [
            { "name": "context", "typeRef": { "kind": "named", "namespace": "Cake.Core", "name": "ICakeContext" } },
            { "name": "count", "typeRef": { "kind": "named", "namespace": "System", "name": "Int32" },
              "defaultValue": { "kind": "integer", "value": 3 } },
            { "name": "items", "typeRef": { "kind": "array", "element": { "kind": "named", "namespace": "System", "name": "String" } },
              "modifier": "params" }
        ],
        "documentation": "/// <summary>Select.</summary>",
        "obsolete": { "message": "Use Pick.", "isError": false }
    }"#;

    let alias: AliasDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(
        alias.return_type,
        TypeRef::array_of(TypeRef::generic_parameter("T"))
    );
    assert_eq!(
        alias.generic_parameters,
        vec![
            GenericParameter::new("T")
                .with_constraint("class")
                .with_constraint("new()")
        ]
    );
    assert_eq!(alias.parameters.len(), 3);
    assert_eq!(
        alias.parameters[1].default_value,
        Some(DefaultValue::Integer(3))
    );
    assert_eq!(alias.parameters[2].modifier, ParameterModifier::Params);
    assert_eq!(alias.obsolete, Some(ObsoleteInfo::warning("Use Pick.")));
}

#[test]
fn test_property_kind_round_trips_through_json() {
    let alias = AliasDescriptor::property(
        "Environment",
        TypeRef::named("Cake.Core", "ICakeEnvironment"),
        TypeRef::simple("EnvironmentAliases"),
        true,
    )
    .with_parameter(Parameter::new(
        "context",
        TypeRef::named("Cake.Core", "ICakeContext"),
    ));

    let json = serde_json::to_string(&alias).unwrap();
    assert!(json.contains(r#""kind":{"type":"property","cached":true}"#), "{json}");

    let back: AliasDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, alias);
}

#[test]
fn test_null_default_value_is_distinct_from_missing() {
    let json = r#"{ "name": "path", "typeRef": { "kind": "named", "name": "Path" },
                    "defaultValue": { "kind": "null" } }"#;
    let parameter: Parameter = serde_json::from_str(json).unwrap();
    assert_eq!(parameter.default_value, Some(DefaultValue::Null));
}
