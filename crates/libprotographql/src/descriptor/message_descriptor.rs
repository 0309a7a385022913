use crate::descriptor::EnumDescriptor;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::Result;
use crate::descriptor::qualified_proto_name;
use prost_types::DescriptorProto;

/// A oneof group declared on a [`MessageDescriptor`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OneofDescriptor {
    pub(crate) name: String,
    pub(crate) synthetic: bool,
}
impl OneofDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Synthetic oneofs are the single-member groups protoc generates to track
    /// presence of proto3 `optional` fields. They are not real tagged unions.
    pub fn synthetic(&self) -> bool {
        self.synthetic
    }
}

/// A protobuf message type, possibly nested inside other message types.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MessageDescriptor {
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) full_name: String,
    pub(crate) is_map_entry: bool,
    pub(crate) oneofs: Vec<OneofDescriptor>,
    pub(crate) package: String,
    pub(crate) type_path: Vec<String>,
}
impl MessageDescriptor {
    /// Converts `proto` and, recursively, every message and enum nested in it.
    ///
    /// Messages are appended to `messages` in pre-order (a message precedes
    /// the messages nested inside it) and nested enums to `enums`.
    pub(super) fn collect_from_proto(
        package: &str,
        parent_path: &[String],
        proto: &DescriptorProto,
        messages: &mut Vec<MessageDescriptor>,
        enums: &mut Vec<EnumDescriptor>,
    ) -> Result<()> {
        let mut type_path = parent_path.to_vec();
        type_path.push(proto.name().to_string());
        let full_name = qualified_proto_name(package, &type_path);

        let mut oneofs: Vec<OneofDescriptor> =
            proto.oneof_decl.iter()
                .map(|oneof| OneofDescriptor {
                    name: oneof.name().to_string(),
                    synthetic: false,
                })
                .collect();

        let fields =
            proto.field.iter()
                .map(|field| FieldDescriptor::from_proto(
                    full_name.as_str(),
                    oneofs.len(),
                    field,
                ))
                .collect::<Result<Vec<_>>>()?;

        for (index, oneof) in oneofs.iter_mut().enumerate() {
            let mut members =
                fields.iter().filter(|f| f.oneof_index == Some(index));
            oneof.synthetic = match (members.next(), members.next()) {
                (Some(only_member), None) => only_member.proto3_optional,
                _ => false,
            };
        }

        messages.push(MessageDescriptor {
            fields,
            full_name,
            is_map_entry: proto.options.as_ref().is_some_and(|opts| opts.map_entry()),
            oneofs,
            package: package.to_string(),
            type_path: type_path.to_owned(),
        });

        for nested_message in &proto.nested_type {
            Self::collect_from_proto(
                package,
                &type_path,
                nested_message,
                messages,
                enums,
            )?;
        }
        for nested_enum in &proto.enum_type {
            enums.push(EnumDescriptor::from_proto(
                package,
                &type_path,
                nested_enum,
            ));
        }

        Ok(())
    }

    /// The ordered list of fields declared on this message, including the
    /// members of every oneof group.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_slice()
    }

    /// Fully-qualified name in protoc's reference form (e.g. `.pkg.Outer.Inner`).
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Messages with no fields at all are erased to a placeholder scalar at
    /// every use site.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Indicates that protoc synthesized this type to represent the entries of
    /// a `map<K, V>` field. Such types always have exactly a `key` and a
    /// `value` field.
    pub fn is_map_entry(&self) -> bool {
        self.is_map_entry
    }

    pub fn oneofs(&self) -> &[OneofDescriptor] {
        self.oneofs.as_slice()
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    /// The names of every enclosing message type followed by this message's
    /// own name, outermost first.
    pub fn type_path(&self) -> &[String] {
        self.type_path.as_slice()
    }
}
