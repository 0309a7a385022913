use crate::descriptor::qualified_proto_name;
use prost_types::EnumDescriptorProto;

/// A protobuf enum type, declared at file scope or nested inside a message.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumDescriptor {
    pub(crate) full_name: String,
    pub(crate) package: String,
    pub(crate) type_path: Vec<String>,
    pub(crate) values: Vec<String>,
}
impl EnumDescriptor {
    pub(super) fn from_proto(
        package: &str,
        parent_path: &[String],
        proto: &EnumDescriptorProto,
    ) -> Self {
        let mut type_path = parent_path.to_vec();
        type_path.push(proto.name().to_string());

        Self {
            full_name: qualified_proto_name(package, &type_path),
            package: package.to_string(),
            type_path,
            values: proto.value.iter()
                .map(|value| value.name().to_string())
                .collect(),
        }
    }

    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    pub fn type_path(&self) -> &[String] {
        self.type_path.as_slice()
    }

    /// Value names in declaration order.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}
