//! A normalized, cross-linked view of the protobuf files handed to a
//! generation run.
//!
//! Everything in here is built once, up front, from `prost-types` descriptor
//! messages and is read-only afterwards.

mod descriptor_error;
mod descriptor_graph;
mod enum_descriptor;
mod field_descriptor;
mod message_descriptor;
mod operation_kind;
mod proto_file;
mod service_descriptor;

pub use descriptor_error::DescriptorError;
pub use descriptor_graph::DescriptorGraph;
pub use enum_descriptor::EnumDescriptor;
pub use field_descriptor::FieldDescriptor;
pub use field_descriptor::FieldKind;
pub use message_descriptor::MessageDescriptor;
pub use message_descriptor::OneofDescriptor;
pub use operation_kind::FileOperationAnnotations;
pub use operation_kind::MethodOperationAnnotations;
pub use operation_kind::MethodOperationOptions;
pub use operation_kind::OPERATION_EXTENSION_FIELD_NUMBER;
pub use operation_kind::OperationKind;
pub use operation_kind::ServiceOperationAnnotations;
pub use proto_file::ProtoFile;
pub use service_descriptor::MethodDescriptor;
pub use service_descriptor::ServiceDescriptor;

type Result<T> = std::result::Result<T, DescriptorError>;

/// Builds the leading-dot fully-qualified name protoc uses in field and method
/// type references (e.g. `.pkg.Outer.Inner`).
pub(crate) fn qualified_proto_name(package: &str, type_path: &[String]) -> String {
    let mut name = String::from(".");
    if !package.is_empty() {
        name.push_str(package);
        name.push('.');
    }
    name.push_str(type_path.join(".").as_str());
    name
}

#[cfg(test)]
mod tests;
