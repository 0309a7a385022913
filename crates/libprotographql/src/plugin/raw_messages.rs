/// `google.protobuf.compiler.CodeGeneratorRequest`, with each file descriptor
/// kept as encoded bytes.
///
/// The file bytes are decoded twice later on (see
/// [`ProtoFile::from_encoded`](crate::descriptor::ProtoFile::from_encoded)),
/// once of which recovers the method-option extensions `prost-types` would
/// otherwise drop.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawCodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(bytes, repeated, tag = "15")]
    pub proto_file: Vec<Vec<u8>>,
}

/// `google.protobuf.FileDescriptorSet` (as written by
/// `protoc --include_imports -o <file>`), with each file kept as encoded
/// bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawFileDescriptorSet {
    #[prost(bytes, repeated, tag = "1")]
    pub file: Vec<Vec<u8>>,
}
