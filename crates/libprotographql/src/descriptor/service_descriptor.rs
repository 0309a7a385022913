use crate::descriptor::FileOperationAnnotations;
use crate::descriptor::OperationKind;
use crate::descriptor::qualified_proto_name;
use prost_types::ServiceDescriptorProto;

/// A protobuf `service` declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServiceDescriptor {
    pub(crate) full_name: String,
    pub(crate) methods: Vec<MethodDescriptor>,
    pub(crate) package: String,
    pub(crate) type_path: Vec<String>,
}
impl ServiceDescriptor {
    pub(super) fn from_proto(
        package: &str,
        service_index: usize,
        proto: &ServiceDescriptorProto,
        annotations: &FileOperationAnnotations,
    ) -> Self {
        let type_path = vec![proto.name().to_string()];
        Self {
            full_name: qualified_proto_name(package, &type_path),
            methods: proto.method.iter()
                .enumerate()
                .map(|(method_index, method)| MethodDescriptor {
                    input_type: method.input_type().to_string(),
                    name: method.name().to_string(),
                    operation: annotations.operation(service_index, method_index),
                    output_type: method.output_type().to_string(),
                })
                .collect(),
            package: package.to_string(),
            type_path,
        }
    }

    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        self.methods.as_slice()
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    pub fn type_path(&self) -> &[String] {
        self.type_path.as_slice()
    }
}

/// A single rpc method of a [`ServiceDescriptor`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MethodDescriptor {
    pub(crate) input_type: String,
    pub(crate) name: String,
    pub(crate) operation: OperationKind,
    pub(crate) output_type: String,
}
impl MethodDescriptor {
    /// Fully-qualified (leading-dot) name of the request message.
    pub fn input_type(&self) -> &str {
        self.input_type.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The root operation this method is exposed under, as decoded from the
    /// `graphql.operation` method option.
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Fully-qualified (leading-dot) name of the response message.
    pub fn output_type(&self) -> &str {
        self.output_type.as_str()
    }
}
