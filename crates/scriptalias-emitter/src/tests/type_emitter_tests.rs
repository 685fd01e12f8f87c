use super::*;

#[test]
fn test_named_types() {
    let emitter = CSharpTypeEmitter::new();
    assert_eq!(emitter.emit_type(&TypeRef::simple("Path")), "Path");
    assert_eq!(
        emitter.emit_type(&TypeRef::named("Cake.Core.IO", "FilePath")),
        "Cake.Core.IO.FilePath"
    );
    assert_eq!(
        emitter.emit_type(&TypeRef::named("System", "Int32")),
        "System.Int32"
    );
}

#[test]
fn test_nested_and_generic_names() {
    let emitter = CSharpTypeEmitter::new();
    let nested = TypeRef::named("Cake.Common", "Settings+Verbosity");
    assert_eq!(emitter.emit_type(&nested), "Cake.Common.Settings.Verbosity");

    let dictionary = TypeRef::generic(
        "System.Collections.Generic",
        "IDictionary`2",
        vec![
            TypeRef::named("System", "String"),
            TypeRef::generic_parameter("TValue"),
        ],
    );
    assert_eq!(
        emitter.emit_type(&dictionary),
        "System.Collections.Generic.IDictionary<System.String, TValue>"
    );
}

#[test]
fn test_arrays() {
    let emitter = CSharpTypeEmitter::new();
    let strings = TypeRef::array_of(TypeRef::named("System", "String"));
    assert_eq!(emitter.emit_type(&strings), "System.String[]");

    let grid = TypeRef::Array {
        element: Box::new(TypeRef::generic_parameter("T")),
        rank: 3,
    };
    assert_eq!(emitter.emit_type(&grid), "T[,,]");
}

#[test]
fn test_keywords_when_enabled() {
    let emitter = CSharpTypeEmitter::with_keywords(true);
    assert_eq!(emitter.emit_type(&TypeRef::named("System", "Int32")), "int");
    assert_eq!(
        emitter.emit_type(&TypeRef::array_of(TypeRef::named("System", "String"))),
        "string[]"
    );
    assert_eq!(
        emitter.emit_type(&TypeRef::named("System", "DateTime")),
        "System.DateTime"
    );
    assert_eq!(emitter.emit_type(&TypeRef::named("Other", "String")), "Other.String");
}

#[test]
fn test_write_type_goes_through_writer() {
    let emitter = CSharpTypeEmitter::new();
    let mut writer = SourceWriter::new();
    writer.increase_indent();
    emitter.write_type(&mut writer, &TypeRef::simple("Path"));
    assert_eq!(writer.as_str(), "    Path");
}
