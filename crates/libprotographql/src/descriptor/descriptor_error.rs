use thiserror::Error;

/// Ways a protobuf file descriptor can fail to convert into the
/// [`DescriptorGraph`](crate::descriptor::DescriptorGraph).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DescriptorError {
    #[error("Failed to decode a protobuf file descriptor: {0}")]
    Decode(String),

    #[error(
        "Field `{field_name}` on message `{message_name}` declares oneof index \
        {oneof_index}, but the message only declares {oneof_count} oneofs"
    )]
    InvalidOneofIndex {
        field_name: String,
        message_name: String,
        oneof_count: usize,
        oneof_index: i32,
    },

    #[error(
        "Field `{field_name}` on message `{message_name}` is a message or enum \
        field but does not name the type it references"
    )]
    MissingTypeName {
        field_name: String,
        message_name: String,
    },

    #[error(
        "Field `{field_name}` on message `{message_name}` has a field kind that \
        cannot be represented in GraphQL: {kind}"
    )]
    UnsupportedFieldKind {
        field_name: String,
        kind: String,
        message_name: String,
    },
}
impl std::convert::From<prost::DecodeError> for DescriptorError {
    fn from(value: prost::DecodeError) -> Self {
        Self::Decode(value.to_string())
    }
}
