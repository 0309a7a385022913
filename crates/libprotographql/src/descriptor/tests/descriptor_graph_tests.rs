use crate::descriptor::DescriptorError;
use crate::descriptor::DescriptorGraph;
use crate::test::fixtures;
use prost::Message;
use prost_types::field_descriptor_proto::Type;

#[test]
fn files_keep_their_supplied_order() -> Result<(), DescriptorError> {
    let dependency = fixtures::file(
        "common.proto",
        "common",
        vec![fixtures::message("Id", vec![fixtures::scalar_field("value", Type::String)])],
        vec![],
        vec![],
    );
    let dependent = fixtures::file(
        "user.proto",
        "user",
        vec![fixtures::message("User", vec![fixtures::message_field("id", ".common.Id")])],
        vec![],
        vec![],
    );

    let graph = DescriptorGraph::from_encoded_files([
        dependency.encode_to_vec(),
        dependent.encode_to_vec(),
    ])?;

    let file_names: Vec<&str> = graph.files().map(|file| file.name()).collect();
    assert_eq!(file_names, vec!["common.proto", "user.proto"]);
    assert_eq!(graph.len(), 2);
    assert!(graph.file("user.proto").is_some());
    assert!(graph.file("missing.proto").is_none());

    Ok(())
}

#[test]
fn first_file_wins_on_duplicate_names() {
    let first = fixtures::file(
        "dup.proto",
        "first",
        vec![fixtures::message("A", vec![fixtures::scalar_field("a", Type::Bool)])],
        vec![],
        vec![],
    );
    let second = fixtures::file("dup.proto", "second", vec![], vec![], vec![]);

    let graph = fixtures::graph(&[first, second]);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.file("dup.proto").map(|file| file.package()), Some("first"));
}

#[test]
fn empty_input_gives_an_empty_graph() -> Result<(), DescriptorError> {
    let graph = DescriptorGraph::from_encoded_files(Vec::<Vec<u8>>::new())?;
    assert!(graph.is_empty());
    Ok(())
}
