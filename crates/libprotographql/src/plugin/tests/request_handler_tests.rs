use crate::plugin::PluginError;
use crate::plugin::RawCodeGeneratorRequest;
use crate::plugin::RawFileDescriptorSet;
use crate::plugin::decode_file_descriptor_set;
use crate::plugin::handle_request_bytes;
use crate::test::fixtures;
use prost::Message;
use prost_types::FileDescriptorProto;
use prost_types::compiler::code_generator_response::Feature;
use prost_types::field_descriptor_proto::Type;

type Result<T> = std::result::Result<T, PluginError>;

fn greeter_file() -> FileDescriptorProto {
    fixtures::file(
        "greeter/greeter.proto",
        "greeter",
        vec![
            fixtures::message("HelloRequest", vec![fixtures::scalar_field("name", Type::String)]),
            fixtures::message("HelloReply", vec![fixtures::scalar_field("message", Type::String)]),
        ],
        vec![],
        vec![fixtures::service("Greeter", vec![
            fixtures::method("SayHello", ".greeter.HelloRequest", ".greeter.HelloReply"),
            fixtures::method("Shout", ".greeter.HelloRequest", ".greeter.HelloReply"),
        ])],
    )
}

fn request_bytes(parameter: Option<&str>, files_to_generate: &[&str]) -> Vec<u8> {
    RawCodeGeneratorRequest {
        file_to_generate: files_to_generate.iter().map(|name| name.to_string()).collect(),
        parameter: parameter.map(|p| p.to_string()),
        proto_file: vec![fixtures::encode_file(
            &greeter_file(),
            &[("Greeter", "Shout", "mutation")],
        )],
    }.encode_to_vec()
}

#[test]
fn request_produces_one_file_per_proto_file() -> Result<()> {
    let response = handle_request_bytes(&request_bytes(None, &["greeter/greeter.proto"]))?;

    assert_eq!(response.error, None);
    assert_eq!(response.supported_features, Some(Feature::Proto3Optional as u64));
    assert_eq!(response.file.len(), 1);

    let file = &response.file[0];
    assert_eq!(file.name.as_deref(), Some("greeter/greeter_pb.graphql"));
    let content = file.content.as_deref().unwrap_or_default();
    assert!(content.starts_with("# DO NOT EDIT! Generated by protoc-gen-graphql.\n\n"));
    assert!(content.contains(
        "type Greeter_Greeter_Query {\n  \
            sayHello(input: Greeter_HelloRequest_Input!): Greeter_HelloReply!\n\
        }",
    ));
    assert!(content.contains(
        "type Greeter_Greeter_Mutation {\n  \
            shout(input: Greeter_HelloRequest_Input!): Greeter_HelloReply!\n\
        }",
    ));

    Ok(())
}

#[test]
fn parameters_are_applied() -> Result<()> {
    let response = handle_request_bytes(&request_bytes(
        Some("input_mode=none,disable_all_prefixes"),
        &["greeter/greeter.proto"],
    ))?;

    let content = response.file[0].content.as_deref().unwrap_or_default();
    assert!(content.contains("type Greeter_Query {\n  sayHello: HelloReply!\n}"), "{content}");
    assert!(!content.contains("input "), "{content}");

    Ok(())
}

#[test]
fn invalid_parameters_are_reported_in_the_response() -> Result<()> {
    let response = handle_request_bytes(&request_bytes(
        Some("input_mode=sometimes"),
        &["greeter/greeter.proto"],
    ))?;

    assert!(response.file.is_empty());
    assert_eq!(
        response.error.as_deref(),
        Some(
            "Invalid value `sometimes` for option `input_mode`: expected one of \
            `none`, `service`, `all`",
        ),
    );

    Ok(())
}

#[test]
fn generation_errors_are_reported_in_the_response() -> Result<()> {
    let response = handle_request_bytes(&request_bytes(None, &["other.proto"]))?;

    assert!(response.file.is_empty());
    assert!(
        response.error.as_deref().is_some_and(|error| error.contains("other.proto")),
        "{:?}",
        response.error,
    );

    Ok(())
}

#[test]
fn undecodable_requests_are_errors() {
    let result = handle_request_bytes(&[0x0a, 0xff]);
    assert!(matches!(result, Err(PluginError::RequestDecode(_))));
}

#[test]
fn descriptor_sets_split_into_encoded_files() -> Result<()> {
    let encoded = fixtures::encode_file(&greeter_file(), &[]);
    let set = RawFileDescriptorSet {
        file: vec![encoded.clone(), encoded.clone()],
    };

    let files = decode_file_descriptor_set(&set.encode_to_vec())?;

    assert_eq!(files, vec![encoded.clone(), encoded]);

    Ok(())
}
