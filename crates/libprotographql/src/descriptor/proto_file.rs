use crate::descriptor::EnumDescriptor;
use crate::descriptor::FileOperationAnnotations;
use crate::descriptor::MessageDescriptor;
use crate::descriptor::Result;
use crate::descriptor::ServiceDescriptor;
use prost::Message;
use prost_types::FileDescriptorProto;

/// One `.proto` file with every message and enum it declares flattened into
/// ordered lists.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ProtoFile {
    pub(crate) enums: Vec<EnumDescriptor>,
    pub(crate) messages: Vec<MessageDescriptor>,
    pub(crate) name: String,
    pub(crate) package: String,
    pub(crate) services: Vec<ServiceDescriptor>,
}
impl ProtoFile {
    /// Decodes an encoded `FileDescriptorProto`, including the
    /// `graphql.operation` annotations on its service methods.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let proto = FileDescriptorProto::decode(bytes)?;
        let annotations = FileOperationAnnotations::decode(bytes)?;
        Self::from_proto(&proto, &annotations)
    }

    pub fn from_proto(
        proto: &FileDescriptorProto,
        annotations: &FileOperationAnnotations,
    ) -> Result<Self> {
        let package = proto.package().to_string();

        let mut enums: Vec<EnumDescriptor> =
            proto.enum_type.iter()
                .map(|enum_proto| EnumDescriptor::from_proto(
                    package.as_str(),
                    &[],
                    enum_proto,
                ))
                .collect();

        let mut messages = vec![];
        for message_proto in &proto.message_type {
            MessageDescriptor::collect_from_proto(
                package.as_str(),
                &[],
                message_proto,
                &mut messages,
                &mut enums,
            )?;
        }

        let services =
            proto.service.iter()
                .enumerate()
                .map(|(index, service_proto)| ServiceDescriptor::from_proto(
                    package.as_str(),
                    index,
                    service_proto,
                    annotations,
                ))
                .collect();

        Ok(Self {
            enums,
            messages,
            name: proto.name().to_string(),
            package,
            services,
        })
    }

    /// Every enum declared in this file: file-scoped enums first, then enums
    /// nested in messages in message order.
    pub fn enums(&self) -> &[EnumDescriptor] {
        self.enums.as_slice()
    }

    /// Every message declared in this file (nested messages and synthetic
    /// map-entry types included), in pre-order.
    pub fn messages(&self) -> &[MessageDescriptor] {
        self.messages.as_slice()
    }

    /// The file's path as protoc knows it (e.g. `foo/bar.proto`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    pub fn services(&self) -> &[ServiceDescriptor] {
        self.services.as_slice()
    }
}
