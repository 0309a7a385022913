use crate::descriptor::FieldDescriptor;
use crate::descriptor::FieldKind;
use crate::generator::GenerateError;
use crate::lowering::TypeLowerer;
use crate::lowering::type_lowerer::Result;
use crate::lowering::well_known_types::int64_scalar;
use crate::types::BuiltinScalar;
use crate::types::TypeAnnotation;

/// Per-use-site switches for [`TypeLowerer::field_type`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FieldOptions {
    /// Reference input-object names instead of object names.
    pub input: bool,
    /// Emit string, int, bool and enum scalars as nullable.
    pub nullable_scalars: bool,
}

impl TypeLowerer<'_> {
    /// The GraphQL type of a single protobuf field.
    ///
    /// | protobuf kind                         | GraphQL            | non-null           |
    /// |---------------------------------------|--------------------|--------------------|
    /// | double, float, (s/u)int32, (s)fixed32 | `Float`            | always             |
    /// | string, bytes                         | `String`           | unless nullable    |
    /// | 64-bit integers                       | `String`/`Float`   | unless nullable    |
    /// | int32                                 | `Int`              | unless nullable    |
    /// | bool                                  | `Boolean`          | unless nullable    |
    /// | enum                                  | the enum           | unless nullable    |
    /// | empty message                         | `Boolean`          | never              |
    /// | map entry                             | the entry type     | always             |
    /// | other message                         | object or input    | never              |
    ///
    /// Repeated fields wrap that in a list which is itself non-null exactly
    /// when the element is. Well-known type substitutions apply last.
    pub(crate) fn field_type(
        &self,
        field: &FieldDescriptor,
        options: FieldOptions,
    ) -> Result<TypeAnnotation> {
        let scalar_non_null = !options.nullable_scalars;

        let (type_name, non_null): (String, bool) =
            match field.kind() {
                FieldKind::Double
                | FieldKind::Fixed32
                | FieldKind::Float
                | FieldKind::Sfixed32
                | FieldKind::Sint32
                | FieldKind::Uint32 =>
                    (BuiltinScalar::Float.name().to_string(), true),

                FieldKind::Bytes
                | FieldKind::String =>
                    (BuiltinScalar::String.name().to_string(), scalar_non_null),

                FieldKind::Fixed64
                | FieldKind::Int64
                | FieldKind::Sfixed64
                | FieldKind::Sint64
                | FieldKind::Uint64 =>
                    (int64_scalar(self.params.int64_type()).name().to_string(), scalar_non_null),

                FieldKind::Int32 =>
                    (BuiltinScalar::Int.name().to_string(), scalar_non_null),

                FieldKind::Bool =>
                    (BuiltinScalar::Boolean.name().to_string(), scalar_non_null),

                FieldKind::Enum => {
                    let enum_name = referenced_type_name(field)?;
                    let graphql_name =
                        self.names.output_name(enum_name)
                            .ok_or_else(|| unresolved(enum_name, "enum"))?;
                    (graphql_name.to_string(), scalar_non_null)
                },

                FieldKind::Message => {
                    let message_name = referenced_type_name(field)?;
                    if self.names.is_erased(message_name) {
                        (BuiltinScalar::Boolean.name().to_string(), false)
                    } else {
                        let message =
                            self.names.message(message_name).ok_or_else(
                                || GenerateError::UndefinedTypeReference {
                                    referenced_by: field.name().to_string(),
                                    type_name: message_name.to_string(),
                                }
                            )?;
                        let graphql_name =
                            if options.input {
                                self.names.input_name(message_name)
                                    .ok_or_else(|| unresolved(message_name, "input"))?
                            } else {
                                self.names.output_name(message_name)
                                    .ok_or_else(|| unresolved(message_name, "output"))?
                            };
                        // Map entries are never absent.
                        (graphql_name.to_string(), message.is_map_entry())
                    }
                },
            };

        let type_annotation =
            if field.repeated() {
                let element_nullable = !non_null || self.params.nullable_list_types();
                TypeAnnotation::list(
                    TypeAnnotation::named(type_name, element_nullable),
                    !non_null,
                )
            } else {
                TypeAnnotation::named(type_name, !non_null)
            };

        Ok(self.well_known_types.apply(field.type_name(), type_annotation))
    }
}

fn referenced_type_name(field: &FieldDescriptor) -> Result<&str> {
    field.type_name().ok_or_else(|| GenerateError::UnresolvedTypeName {
        representation: "field",
        type_name: field.name().to_string(),
    })
}

fn unresolved(type_name: &str, representation: &'static str) -> GenerateError {
    GenerateError::UnresolvedTypeName {
        representation,
        type_name: type_name.to_string(),
    }
}
