use crate::types::GraphQLType;

pub const HEADER: &str = "# DO NOT EDIT! Generated by protoc-gen-graphql.";

const PROTO_FILE_EXTENSION: &str = ".proto";
const GRAPHQL_FILE_SUFFIX: &str = "_pb.graphql";

/// `foo/bar.proto` -> `foo/bar_pb.graphql`.
pub fn graphql_file_name(proto_file_name: &str) -> String {
    let stem =
        proto_file_name.strip_suffix(PROTO_FILE_EXTENSION)
            .unwrap_or(proto_file_name);
    format!("{stem}{GRAPHQL_FILE_SUFFIX}")
}

/// The GraphQL schema fragment generated for one `.proto` file.
///
/// A fragment may reference types declared in the fragments of other files.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GeneratedFile {
    pub(crate) name: String,
    pub(crate) proto_file_name: String,
    pub(crate) types: Vec<GraphQLType>,
}
impl GeneratedFile {
    pub(crate) fn new(proto_file_name: &str, types: Vec<GraphQLType>) -> Self {
        Self {
            name: graphql_file_name(proto_file_name),
            proto_file_name: proto_file_name.to_string(),
            types,
        }
    }

    /// The header line followed by every declaration, each preceded by a
    /// blank line.
    pub fn content(&self) -> String {
        let mut content = String::from(HEADER);
        for type_ in &self.types {
            content.push_str("\n\n");
            content.push_str(type_.to_graphql_string().as_str());
        }
        content.push('\n');
        content
    }

    /// Output path, relative to the output directory.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn proto_file_name(&self) -> &str {
        self.proto_file_name.as_str()
    }

    /// The declarations of this file, in emission order.
    pub fn types(&self) -> &[GraphQLType] {
        self.types.as_slice()
    }
}
