use crate::descriptor::DescriptorError;
use crate::descriptor::FieldKind;
use crate::descriptor::FileOperationAnnotations;
use crate::descriptor::ProtoFile;
use crate::test::fixtures;
use prost_types::field_descriptor_proto::Type;

type Result<T> = std::result::Result<T, DescriptorError>;

#[test]
fn nested_types_are_flattened_in_pre_order() -> Result<()> {
    let outer = fixtures::with_nested(
        fixtures::message("Outer", vec![
            fixtures::message_field("inner", ".pkg.Outer.Inner"),
        ]),
        vec![
            fixtures::with_nested(
                fixtures::message("Inner", vec![
                    fixtures::scalar_field("name", Type::String),
                ]),
                vec![fixtures::message("Deepest", vec![
                    fixtures::scalar_field("id", Type::Int32),
                ])],
                vec![],
            ),
        ],
        vec![fixtures::enum_type("Kind", &["KIND_A", "KIND_B"])],
    );
    let file_proto = fixtures::file(
        "pkg/outer.proto",
        "pkg",
        vec![outer, fixtures::message("Sibling", vec![])],
        vec![fixtures::enum_type("TopLevel", &["TOP"])],
        vec![],
    );

    let file = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default())?;

    let message_names: Vec<&str> =
        file.messages().iter().map(|m| m.full_name()).collect();
    assert_eq!(message_names, vec![
        ".pkg.Outer",
        ".pkg.Outer.Inner",
        ".pkg.Outer.Inner.Deepest",
        ".pkg.Sibling",
    ]);

    let enum_names: Vec<&str> =
        file.enums().iter().map(|e| e.full_name()).collect();
    assert_eq!(enum_names, vec![".pkg.TopLevel", ".pkg.Outer.Kind"]);

    let deepest = &file.messages()[2];
    assert_eq!(deepest.type_path(), &["Outer", "Inner", "Deepest"]);
    assert_eq!(deepest.package(), "pkg");
    assert!(file.messages()[3].is_empty());

    Ok(())
}

#[test]
fn empty_package_qualifies_names_with_a_single_dot() -> Result<()> {
    let file_proto = fixtures::file(
        "hello.proto",
        "",
        vec![fixtures::message("HelloRequest", vec![
            fixtures::scalar_field("name", Type::String),
        ])],
        vec![],
        vec![],
    );

    let file = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default())?;

    assert_eq!(file.package(), "");
    assert_eq!(file.messages()[0].full_name(), ".HelloRequest");

    Ok(())
}

#[test]
fn map_entries_and_field_shapes_are_recorded() -> Result<()> {
    let holder = fixtures::with_nested(
        fixtures::message("Holder", vec![
            fixtures::repeated(fixtures::message_field("labels", ".pkg.Holder.LabelsEntry")),
            fixtures::repeated(fixtures::scalar_field("tags", Type::String)),
            fixtures::enum_field("color", ".pkg.Color"),
        ]),
        vec![fixtures::map_entry(
            "LabelsEntry",
            Type::String,
            fixtures::scalar_field("", Type::Int64),
        )],
        vec![],
    );
    let file_proto = fixtures::file("pkg/holder.proto", "pkg", vec![holder], vec![], vec![]);

    let file = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default())?;

    let holder = &file.messages()[0];
    assert!(!holder.is_map_entry());
    let labels = &holder.fields()[0];
    assert!(labels.repeated());
    assert_eq!(labels.kind(), FieldKind::Message);
    assert_eq!(labels.type_name(), Some(".pkg.Holder.LabelsEntry"));
    let tags = &holder.fields()[1];
    assert!(tags.repeated());
    assert_eq!(tags.type_name(), None);
    assert_eq!(holder.fields()[2].kind(), FieldKind::Enum);

    let entry = &file.messages()[1];
    assert!(entry.is_map_entry());
    let field_names: Vec<&str> = entry.fields().iter().map(|f| f.name()).collect();
    assert_eq!(field_names, vec!["key", "value"]);

    Ok(())
}

#[test]
fn proto3_optional_oneofs_are_synthetic() -> Result<()> {
    let message = fixtures::with_oneofs(
        fixtures::message("Profile", vec![
            fixtures::proto3_optional(fixtures::scalar_field("nickname", Type::String), 0),
            fixtures::in_oneof(fixtures::scalar_field("email", Type::String), 1),
            fixtures::in_oneof(fixtures::scalar_field("phone", Type::String), 1),
        ]),
        &["_nickname", "contact"],
    );
    let file_proto = fixtures::file("profile.proto", "pkg", vec![message], vec![], vec![]);

    let file = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default())?;

    let profile = &file.messages()[0];
    assert!(profile.oneofs()[0].synthetic());
    assert!(!profile.oneofs()[1].synthetic());
    assert!(profile.fields()[0].proto3_optional());
    assert_eq!(profile.fields()[0].oneof_index(), Some(0));
    assert_eq!(profile.fields()[2].oneof_index(), Some(1));

    Ok(())
}

#[test]
fn group_fields_are_rejected() {
    let file_proto = fixtures::file(
        "legacy.proto",
        "legacy",
        vec![fixtures::message("Legacy", vec![
            fixtures::scalar_field("result", Type::Group),
        ])],
        vec![],
        vec![],
    );

    let result = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default());

    assert_eq!(result, Err(DescriptorError::UnsupportedFieldKind {
        field_name: "result".to_string(),
        kind: "TYPE_GROUP".to_string(),
        message_name: ".legacy.Legacy".to_string(),
    }));
}

#[test]
fn message_fields_without_a_type_name_are_rejected() {
    let mut field = fixtures::message_field("broken", "");
    field.type_name = None;
    let file_proto = fixtures::file(
        "broken.proto",
        "pkg",
        vec![fixtures::message("Broken", vec![field])],
        vec![],
        vec![],
    );

    let result = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default());

    assert_eq!(result, Err(DescriptorError::MissingTypeName {
        field_name: "broken".to_string(),
        message_name: ".pkg.Broken".to_string(),
    }));
}

#[test]
fn out_of_range_oneof_index_is_rejected() {
    let file_proto = fixtures::file(
        "broken.proto",
        "pkg",
        vec![fixtures::message("Broken", vec![
            fixtures::in_oneof(fixtures::scalar_field("choice", Type::Bool), 3),
        ])],
        vec![],
        vec![],
    );

    let result = ProtoFile::from_proto(&file_proto, &FileOperationAnnotations::default());

    assert!(matches!(
        result,
        Err(DescriptorError::InvalidOneofIndex { oneof_count: 0, oneof_index: 3, .. }),
    ));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let result = ProtoFile::from_encoded(&[0xff, 0xff, 0xff]);
    assert!(matches!(result, Err(DescriptorError::Decode(_))));
}
