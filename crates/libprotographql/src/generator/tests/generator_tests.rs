use crate::generator::GenerateError;
use crate::generator::Generator;
use crate::generator::graphql_file_name;
use crate::parameters::Parameters;
use crate::test::fixtures;
use prost_types::FileDescriptorProto;
use prost_types::field_descriptor_proto::Type;

fn user_file(name: &str, package: &str) -> FileDescriptorProto {
    fixtures::file(
        name,
        package,
        vec![fixtures::message("User", vec![fixtures::scalar_field("id", Type::String)])],
        vec![],
        vec![],
    )
}

#[test]
fn output_names_replace_the_proto_extension() {
    assert_eq!(graphql_file_name("foo/bar.proto"), "foo/bar_pb.graphql");
    assert_eq!(graphql_file_name("no_extension"), "no_extension_pb.graphql");
}

#[test]
fn content_starts_with_the_header() {
    let generated = fixtures::generate(&[user_file("users/user.proto", "users")], "");

    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].name(), "users/user_pb.graphql");
    assert_eq!(generated[0].proto_file_name(), "users/user.proto");
    assert_eq!(
        generated[0].content(),
        "# DO NOT EDIT! Generated by protoc-gen-graphql.\n\n\
        type Users_User {\n  id: String!\n}\n",
    );
}

#[test]
fn files_without_declarations_are_omitted() {
    let empty = fixtures::file(
        "empty.proto",
        "pkg",
        vec![fixtures::message("Nothing", vec![])],
        vec![],
        vec![],
    );

    let generated = fixtures::generate(&[empty, user_file("user.proto", "pkg")], "");

    let names: Vec<&str> = generated.iter().map(|file| file.name()).collect();
    assert_eq!(names, vec!["user_pb.graphql"]);
}

#[test]
fn output_is_deterministic() {
    let files = [
        user_file("a.proto", "a"),
        user_file("b.proto", "b"),
    ];

    let first: Vec<String> = fixtures::generate(&files, "input_mode=all").iter().map(|f| f.content()).collect();
    let second: Vec<String> = fixtures::generate(&files, "input_mode=all").iter().map(|f| f.content()).collect();

    assert_eq!(first, second);
}

#[test]
fn duplicate_type_names_fail_the_run() {
    let graph = fixtures::graph(&[user_file("a.proto", "a"), user_file("b.proto", "b")]);
    let params = Parameters::parse("disable_all_prefixes").expect("parameters should parse");

    let result = Generator::new(&graph, &params).generate(&["a.proto", "b.proto"]);

    assert_eq!(result, Err(GenerateError::DuplicateTypeDefinition {
        type_name: "User".to_string(),
        def1: "Object in `a.proto`".to_string(),
        def2: "Object in `b.proto`".to_string(),
    }));
}

#[test]
fn builtin_scalar_names_fail_the_run() {
    let file = fixtures::file(
        "scalars.proto",
        "pkg",
        vec![fixtures::message("String", vec![fixtures::scalar_field("value", Type::String)])],
        vec![],
        vec![],
    );
    let graph = fixtures::graph(&[file]);
    let params = Parameters::parse("disable_all_prefixes").expect("parameters should parse");

    let result = Generator::new(&graph, &params).generate(&["scalars.proto"]);

    assert_eq!(result, Err(GenerateError::BuiltinTypeRedefinition {
        file_name: "scalars.proto".to_string(),
        type_name: "String".to_string(),
    }));
}

#[test]
fn unknown_files_to_generate_fail_the_run() {
    let graph = fixtures::graph(&[user_file("user.proto", "pkg")]);
    let params = Parameters::default();

    let result = Generator::new(&graph, &params).generate(&["missing.proto"]);

    assert_eq!(result, Err(GenerateError::UnknownFileToGenerate {
        file_name: "missing.proto".to_string(),
    }));
}

#[test]
fn only_requested_files_are_generated() {
    let files = [user_file("a.proto", "a"), user_file("b.proto", "b")];

    let generated = fixtures::generate_only(&files, &["b.proto"], "");

    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].proto_file_name(), "b.proto");
}
