use crate::test::fixtures;
use prost_types::FileDescriptorProto;
use prost_types::field_descriptor_proto::Type;

fn scalars_file() -> FileDescriptorProto {
    fixtures::file(
        "scalars.proto",
        "pkg",
        vec![fixtures::message("Scalars", vec![
            fixtures::scalar_field("f_double", Type::Double),
            fixtures::scalar_field("f_float", Type::Float),
            fixtures::scalar_field("f_uint32", Type::Uint32),
            fixtures::scalar_field("f_sint32", Type::Sint32),
            fixtures::scalar_field("f_fixed32", Type::Fixed32),
            fixtures::scalar_field("f_sfixed32", Type::Sfixed32),
            fixtures::scalar_field("f_int32", Type::Int32),
            fixtures::scalar_field("f_int64", Type::Int64),
            fixtures::scalar_field("f_uint64", Type::Uint64),
            fixtures::scalar_field("f_fixed64", Type::Fixed64),
            fixtures::scalar_field("f_bool", Type::Bool),
            fixtures::scalar_field("f_string", Type::String),
            fixtures::scalar_field("f_bytes", Type::Bytes),
        ])],
        vec![],
        vec![],
    )
}

#[test]
fn scalar_kinds_map_to_builtin_scalars() {
    assert_eq!(
        fixtures::render(&[scalars_file()], ""),
        "type Pkg_Scalars {\n  \
            fDouble: Float!\n  \
            fFloat: Float!\n  \
            fUint32: Float!\n  \
            fSint32: Float!\n  \
            fFixed32: Float!\n  \
            fSfixed32: Float!\n  \
            fInt32: Int!\n  \
            fInt64: String!\n  \
            fUint64: String!\n  \
            fFixed64: String!\n  \
            fBool: Boolean!\n  \
            fString: String!\n  \
            fBytes: String!\n\
        }",
    );
}

#[test]
fn int64_number_mode_uses_float() {
    let rendered = fixtures::render(&[scalars_file()], "js_64bit_type=number");

    assert!(rendered.contains("fInt64: Float!"), "{rendered}");
    assert!(rendered.contains("fUint64: Float!"), "{rendered}");
    assert!(rendered.contains("fFixed64: Float!"), "{rendered}");
}

fn lists_file() -> FileDescriptorProto {
    fixtures::file(
        "lists.proto",
        "pkg",
        vec![
            fixtures::message("Lists", vec![
                fixtures::repeated(fixtures::scalar_field("tags", Type::String)),
                fixtures::repeated(fixtures::scalar_field("weights", Type::Double)),
                fixtures::repeated(fixtures::message_field("points", ".pkg.Point")),
            ]),
            fixtures::message("Point", vec![fixtures::scalar_field("x", Type::Double)]),
        ],
        vec![],
        vec![],
    )
}

#[test]
fn repeated_fields_lower_to_lists() {
    assert_eq!(
        fixtures::find_type(&[lists_file()], "", "Pkg_Lists").as_deref(),
        Some("type Pkg_Lists {\n  tags: [String!]!\n  weights: [Float!]!\n  points: [Pkg_Point]\n}"),
    );
}

#[test]
fn nullable_list_types_relax_list_elements() {
    assert_eq!(
        fixtures::find_type(&[lists_file()], "nullable_list_types", "Pkg_Lists").as_deref(),
        Some("type Pkg_Lists {\n  tags: [String]!\n  weights: [Float]!\n  points: [Pkg_Point]\n}"),
    );
}

fn wrapped_file() -> FileDescriptorProto {
    fixtures::file(
        "account.proto",
        "acct",
        vec![fixtures::message("Account", vec![
            fixtures::message_field("nickname", ".google.protobuf.StringValue"),
            fixtures::message_field("balance", ".google.protobuf.Int64Value"),
            fixtures::message_field("verified", ".google.protobuf.BoolValue"),
            fixtures::message_field("created", ".google.protobuf.Timestamp"),
            fixtures::repeated(fixtures::message_field("history", ".google.protobuf.Timestamp")),
            fixtures::message_field("ttl", ".google.protobuf.Duration"),
        ])],
        vec![],
        vec![],
    )
}

fn wrapped_account(parameter: &str) -> Option<String> {
    let mut files = fixtures::well_known_files();
    files.push(wrapped_file());
    fixtures::generate_only(&files, &["account.proto"], parameter).iter()
        .flat_map(|file| file.types().iter())
        .find(|type_| type_.name() == "Acct_Account")
        .map(|type_| type_.to_graphql_string())
}

#[test]
fn well_known_messages_are_plain_objects_by_default() {
    assert_eq!(
        wrapped_account("").as_deref(),
        Some(
            "type Acct_Account {\n  \
                nickname: GoogleProtobuf_StringValue\n  \
                balance: GoogleProtobuf_Int64Value\n  \
                verified: GoogleProtobuf_BoolValue\n  \
                created: GoogleProtobuf_Timestamp\n  \
                history: [GoogleProtobuf_Timestamp]\n  \
                ttl: GoogleProtobuf_Duration\n\
            }",
        ),
    );
}

#[test]
fn null_wrappers_unbox_to_nullable_scalars() {
    assert_eq!(
        wrapped_account("null_wrappers,js_64bit_type=number").as_deref(),
        Some(
            "type Acct_Account {\n  \
                nickname: String\n  \
                balance: Float\n  \
                verified: Boolean\n  \
                created: GoogleProtobuf_Timestamp\n  \
                history: [GoogleProtobuf_Timestamp]\n  \
                ttl: GoogleProtobuf_Duration\n\
            }",
        ),
    );
}

#[test]
fn type_name_overrides_keep_modifiers() {
    assert_eq!(
        wrapped_account(
            "timestamp_type_name=Timestamp,duration_type_name=Duration,\
            map_wellknown_type=google.protobuf.Timestamp=DateTime",
        ).as_deref(),
        Some(
            "type Acct_Account {\n  \
                nickname: GoogleProtobuf_StringValue\n  \
                balance: GoogleProtobuf_Int64Value\n  \
                verified: GoogleProtobuf_BoolValue\n  \
                created: DateTime\n  \
                history: [DateTime]\n  \
                ttl: Duration\n\
            }",
        ),
    );
}

#[test]
fn enum_fields_are_nullable_on_optional_fields_only() {
    let file = fixtures::file(
        "status.proto",
        "pkg",
        vec![fixtures::with_oneofs(
            fixtures::message("Job", vec![
                fixtures::enum_field("state", ".pkg.State"),
                fixtures::proto3_optional(fixtures::enum_field("previous", ".pkg.State"), 0),
                fixtures::repeated(fixtures::enum_field("history", ".pkg.State")),
            ]),
            &["_previous"],
        )],
        vec![fixtures::enum_type("State", &["PENDING", "DONE"])],
        vec![],
    );

    assert_eq!(
        fixtures::find_type(&[file], "", "Pkg_Job").as_deref(),
        Some("type Pkg_Job {\n  state: Pkg_State!\n  previous: Pkg_State\n  history: [Pkg_State!]!\n}"),
    );
}
