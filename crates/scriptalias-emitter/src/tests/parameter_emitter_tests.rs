use super::*;
use scriptalias_common::TypeRef;

fn emitter() -> CSharpParameterEmitter {
    CSharpParameterEmitter::default()
}

#[test]
fn test_declaration_and_invocation_fragments() {
    let parameters = vec![
        Parameter::new("a", TypeRef::simple("Integer")),
        Parameter::new("b", TypeRef::simple("Text")),
    ];

    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Declaration),
        vec!["Integer a", "Text b"]
    );
    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Invocation),
        vec!["a", "b"]
    );
}

#[test]
fn test_modifiers() {
    let int = TypeRef::named("System", "Int32");
    let parameters = vec![
        Parameter::new("count", int.clone()).with_modifier(ParameterModifier::Ref),
        Parameter::new("result", int.clone()).with_modifier(ParameterModifier::Out),
        Parameter::new("value", int.clone()).with_modifier(ParameterModifier::In),
        Parameter::new("rest", TypeRef::array_of(int)).with_modifier(ParameterModifier::Params),
    ];

    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Declaration),
        vec![
            "ref System.Int32 count",
            "out System.Int32 result",
            "in System.Int32 value",
            "params System.Int32[] rest",
        ]
    );
    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Invocation),
        vec!["ref count", "out result", "in value", "rest"]
    );
}

#[test]
fn test_default_values_only_in_declarations() {
    let parameters = vec![
        Parameter::new("path", TypeRef::simple("Path")).with_default(DefaultValue::Null),
        Parameter::new("force", TypeRef::simple("Boolean")).with_default(DefaultValue::Bool(true)),
        Parameter::new("retries", TypeRef::simple("Int32")).with_default(DefaultValue::Integer(-1)),
        Parameter::new("label", TypeRef::simple("String"))
            .with_default(DefaultValue::Text("say \"x\"".to_string())),
        Parameter::new("sep", TypeRef::simple("Char")).with_default(DefaultValue::Char('\'')),
        Parameter::new("mode", TypeRef::simple("FileMode"))
            .with_default(DefaultValue::Raw("FileMode.Open".to_string())),
    ];

    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Declaration),
        vec![
            "Path path = null",
            "Boolean force = true",
            "Int32 retries = -1",
            "String label = \"say \\\"x\\\"\"",
            "Char sep = '\\''",
            "FileMode mode = FileMode.Open",
        ]
    );
    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Invocation),
        vec!["path", "force", "retries", "label", "sep", "mode"]
    );
}

#[test]
fn test_keyword_names_are_escaped() {
    let parameters = vec![
        Parameter::new("object", TypeRef::simple("Object")),
        Parameter::new("objects", TypeRef::simple("Object")),
    ];

    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Declaration),
        vec!["Object @object", "Object objects"]
    );
    assert_eq!(
        emitter().emit_parameters(&parameters, EmitMode::Invocation),
        vec!["@object", "objects"]
    );
}

#[test]
fn test_reserved_keywords_are_sorted() {
    let mut sorted = RESERVED_KEYWORDS.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, RESERVED_KEYWORDS);
}

#[test]
fn test_empty_list() {
    assert!(emitter().emit_parameters(&[], EmitMode::Declaration).is_empty());
    assert!(emitter().emit_parameters(&[], EmitMode::Invocation).is_empty());
}
