use crate::parameters::Int64Type;
use crate::parameters::Parameters;
use crate::types::BuiltinScalar;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Fixed substitutions for well-known protobuf types, applied to a field's
/// lowered type after the regular scalar/message mapping.
///
/// Substitutions only swap the type name. Nullability and list modifiers
/// computed by the regular mapping are kept, so a substituted message field
/// stays nullable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellKnownTypes {
    int64_type: Int64Type,
    overrides: IndexMap<String, String>,
    wrappers_as_null: bool,
}
impl WellKnownTypes {
    pub fn new(params: &Parameters) -> Self {
        Self {
            int64_type: params.int64_type(),
            overrides: params.well_known_type_overrides(),
            wrappers_as_null: params.wrappers_as_null(),
        }
    }

    /// `annotation` with its type name substituted when `proto_type_name`
    /// (a fully-qualified, leading-dot protobuf name) has a substitution.
    pub fn apply(
        &self,
        proto_type_name: Option<&str>,
        annotation: TypeAnnotation,
    ) -> TypeAnnotation {
        let Some(proto_type_name) = proto_type_name else {
            return annotation;
        };

        let mut annotation = annotation;
        if let Some(graphql_name) = self.overrides.get(proto_type_name) {
            annotation = annotation.with_type_name(graphql_name.as_str());
        }
        if self.wrappers_as_null
            && let Some(scalar) = self.wrapper_scalar(proto_type_name) {
            annotation = annotation.with_type_name(scalar.name());
        }
        annotation
    }

    /// The scalar a `google.protobuf.*Value` wrapper unboxes to.
    fn wrapper_scalar(&self, proto_type_name: &str) -> Option<BuiltinScalar> {
        match proto_type_name {
            ".google.protobuf.DoubleValue"
            | ".google.protobuf.FloatValue"
            | ".google.protobuf.UInt32Value" => Some(BuiltinScalar::Float),
            ".google.protobuf.BytesValue"
            | ".google.protobuf.StringValue" => Some(BuiltinScalar::String),
            ".google.protobuf.Int64Value"
            | ".google.protobuf.UInt64Value" => Some(int64_scalar(self.int64_type)),
            ".google.protobuf.Int32Value" => Some(BuiltinScalar::Int),
            ".google.protobuf.BoolValue" => Some(BuiltinScalar::Boolean),
            _ => None,
        }
    }
}

pub(super) fn int64_scalar(int64_type: Int64Type) -> BuiltinScalar {
    match int64_type {
        Int64Type::Number => BuiltinScalar::Float,
        Int64Type::String => BuiltinScalar::String,
    }
}
