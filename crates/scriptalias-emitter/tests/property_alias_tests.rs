//! Integration tests for property alias generation

use scriptalias_common::{
    AliasDescriptor, GenerateError, GenericParameter, ObsoleteInfo, Parameter, TypeRef,
};
use scriptalias_emitter::{
    AliasGenerator, GeneratorOptions, ScriptAliasGenerator, SourceWriter, generate_to_string,
};

fn receiver() -> Parameter {
    Parameter::new("context", TypeRef::named("Cake.Core", "ICakeContext"))
}

fn environment(cached: bool) -> AliasDescriptor {
    AliasDescriptor::property(
        "Environment",
        TypeRef::named("Cake.Core", "ICakeEnvironment"),
        TypeRef::simple("EnvironmentAliases"),
        cached,
    )
    .with_parameter(receiver())
}

fn generate(alias: &AliasDescriptor) -> Result<String, GenerateError> {
    let generator = ScriptAliasGenerator::default();
    generate_to_string(&generator, alias, &GeneratorOptions::default())
}

#[test]
fn test_uncached_property() {
    let output = generate(&environment(false)).unwrap();
    assert_eq!(
        output,
        "public Cake.Core.ICakeEnvironment Environment\n\
         {\n\
         \x20   get\n\
         \x20   {\n\
         \x20       return EnvironmentAliases.Environment(Context);\n\
         \x20   }\n\
         }"
    );
}

#[test]
fn test_cached_property_uses_backing_field_and_flag() {
    let alias = environment(true).with_documentation("/// <summary>The environment.</summary>");
    let output = generate(&alias).unwrap();
    assert_eq!(
        output,
        "private Cake.Core.ICakeEnvironment _Environment;\n\
         private bool _EnvironmentInitialized;\n\
         /// <summary>The environment.</summary>\n\
         public Cake.Core.ICakeEnvironment Environment\n\
         {\n\
         \x20   get\n\
         \x20   {\n\
         \x20       if (!_EnvironmentInitialized)\n\
         \x20       {\n\
         \x20           _Environment = EnvironmentAliases.Environment(Context);\n\
         \x20           _EnvironmentInitialized = true;\n\
         \x20       }\n\
         \x20       return _Environment;\n\
         \x20   }\n\
         }"
    );
}

#[test]
fn test_obsolete_property_warning_and_error() {
    let warned = environment(false).with_obsolete(ObsoleteInfo::warning("Use Env."));
    let output = generate(&warned).unwrap();
    assert!(
        output.contains(
            "        Context.Log.Warning(\"Warning: The alias EnvironmentAliases.Environment has been made obsolete. Use Env.\");\n\
             \x20       #pragma warning disable 0618\n\
             \x20       return EnvironmentAliases.Environment(Context);\n\
             \x20       #pragma warning restore 0618\n"
        ),
        "{output}"
    );

    let failed = environment(true).with_obsolete(ObsoleteInfo::error("Use Env."));
    let output = generate(&failed).unwrap();
    assert!(
        output.contains("        throw new Cake.ScriptServer.CakeException("),
        "{output}"
    );
    assert!(!output.contains("_Environment = "), "{output}");
}

#[test]
fn test_invalid_property_shapes_are_rejected() {
    let void = AliasDescriptor::property(
        "Nothing",
        TypeRef::void(),
        TypeRef::simple("Aliases"),
        false,
    );
    let generic = environment(false).with_generic_parameter(GenericParameter::new("T"));
    let extra = environment(false).with_parameter(Parameter::new("x", TypeRef::simple("Int32")));

    for alias in [void, generic, extra] {
        let generator = ScriptAliasGenerator::default();
        let mut writer = SourceWriter::new();
        let result = generator.generate(&mut writer, &alias);
        assert!(
            matches!(result, Err(GenerateError::InvalidArgument { .. })),
            "{}: {result:?}",
            alias.name
        );
        assert!(writer.is_empty());
    }
}

#[test]
fn test_property_without_receiver_calls_with_no_arguments() {
    let alias = AliasDescriptor::property(
        "Now",
        TypeRef::named("System", "DateTime"),
        TypeRef::simple("Clock"),
        false,
    );
    let output = generate(&alias).unwrap();
    assert!(output.contains("return Clock.Now();"), "{output}");
}

#[test]
fn test_dispatcher_routes_by_kind() {
    let method = AliasDescriptor::method("Run", TypeRef::void(), TypeRef::simple("Aliases"))
        .with_parameter(receiver());
    let property = environment(false);

    let generator = ScriptAliasGenerator::default();
    let mut writer = SourceWriter::new();
    generator.generate(&mut writer, &method).unwrap();
    writer.write_line();
    generator.generate(&mut writer, &property).unwrap();

    let output = writer.finish();
    assert!(output.contains("public void Run()"));
    assert!(output.contains("public Cake.Core.ICakeEnvironment Environment\n"));
}
