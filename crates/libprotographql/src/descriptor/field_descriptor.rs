use crate::descriptor::DescriptorError;
use crate::descriptor::Result;
use prost_types::FieldDescriptorProto;
use prost_types::field_descriptor_proto;

/// The protobuf wire kinds that can be expressed in GraphQL.
///
/// This is [`field_descriptor_proto::Type`] minus the proto2 `group` kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum FieldKind {
    Bool,
    Bytes,
    Double,
    Enum,
    Fixed32,
    Fixed64,
    Float,
    Int32,
    Int64,
    Message,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    String,
    Uint32,
    Uint64,
}
impl FieldKind {
    fn from_proto_type(proto_type: field_descriptor_proto::Type) -> Option<Self> {
        use field_descriptor_proto::Type;
        Some(match proto_type {
            Type::Bool => Self::Bool,
            Type::Bytes => Self::Bytes,
            Type::Double => Self::Double,
            Type::Enum => Self::Enum,
            Type::Fixed32 => Self::Fixed32,
            Type::Fixed64 => Self::Fixed64,
            Type::Float => Self::Float,
            Type::Group => return None,
            Type::Int32 => Self::Int32,
            Type::Int64 => Self::Int64,
            Type::Message => Self::Message,
            Type::Sfixed32 => Self::Sfixed32,
            Type::Sfixed64 => Self::Sfixed64,
            Type::Sint32 => Self::Sint32,
            Type::Sint64 => Self::Sint64,
            Type::String => Self::String,
            Type::Uint32 => Self::Uint32,
            Type::Uint64 => Self::Uint64,
        })
    }

    /// Indicates if fields of this kind reference another named protobuf type.
    pub fn references_type(&self) -> bool {
        matches!(self, Self::Enum | Self::Message)
    }
}

/// A single field declared on a
/// [`MessageDescriptor`](crate::descriptor::MessageDescriptor).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDescriptor {
    pub(crate) kind: FieldKind,
    pub(crate) name: String,
    pub(crate) oneof_index: Option<usize>,
    pub(crate) proto3_optional: bool,
    pub(crate) repeated: bool,
    pub(crate) type_name: Option<String>,
}
impl FieldDescriptor {
    pub(super) fn from_proto(
        message_name: &str,
        oneof_count: usize,
        proto: &FieldDescriptorProto,
    ) -> Result<Self> {
        let field_name = proto.name().to_string();

        let raw_type = proto.r#type.unwrap_or_default();
        let kind = field_descriptor_proto::Type::try_from(raw_type)
            .ok()
            .and_then(FieldKind::from_proto_type)
            .ok_or_else(|| DescriptorError::UnsupportedFieldKind {
                field_name: field_name.to_owned(),
                kind: field_descriptor_proto::Type::try_from(raw_type)
                    .map(|t| t.as_str_name().to_string())
                    .unwrap_or_else(|_| format!("unknown type number {raw_type}")),
                message_name: message_name.to_string(),
            })?;

        let type_name =
            if kind.references_type() {
                match proto.type_name.as_deref() {
                    Some(type_name) if !type_name.is_empty() =>
                        Some(type_name.to_string()),
                    _ => return Err(DescriptorError::MissingTypeName {
                        field_name,
                        message_name: message_name.to_string(),
                    }),
                }
            } else {
                None
            };

        let oneof_index =
            match proto.oneof_index {
                Some(index) if index >= 0 && (index as usize) < oneof_count =>
                    Some(index as usize),
                Some(index) => return Err(DescriptorError::InvalidOneofIndex {
                    field_name,
                    message_name: message_name.to_string(),
                    oneof_count,
                    oneof_index: index,
                }),
                None => None,
            };

        Ok(Self {
            kind,
            name: field_name,
            oneof_index,
            proto3_optional: proto.proto3_optional(),
            repeated: proto.label() == field_descriptor_proto::Label::Repeated,
            type_name,
        })
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The field's name exactly as written in the `.proto` file.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Index into the owning message's oneof list when this field is a member
    /// of a oneof group (including the synthetic groups of proto3 `optional`
    /// fields).
    pub fn oneof_index(&self) -> Option<usize> {
        self.oneof_index
    }

    pub fn proto3_optional(&self) -> bool {
        self.proto3_optional
    }

    pub fn repeated(&self) -> bool {
        self.repeated
    }

    /// The fully-qualified (leading-dot) name of the referenced message or enum
    /// type. Always `Some` for [`FieldKind::Message`] and [`FieldKind::Enum`].
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}
