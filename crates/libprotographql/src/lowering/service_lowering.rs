use crate::descriptor::MethodDescriptor;
use crate::descriptor::MessageDescriptor;
use crate::descriptor::OperationKind;
use crate::descriptor::ServiceDescriptor;
use crate::generator::GenerateError;
use crate::lowering::TypeLowerer;
use crate::lowering::type_lowerer::Result;
use crate::parameters::InputMode;
use crate::types::BuiltinScalar;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

const INPUT_ARGUMENT_NAME: &str = "input";

const ROOT_OPERATION_KINDS: [OperationKind; 3] = [
    OperationKind::Query,
    OperationKind::Mutation,
    OperationKind::Subscription,
];

impl TypeLowerer<'_> {
    /// One `<Service>_Query`, `<Service>_Mutation` and/or
    /// `<Service>_Subscription` object, each holding one field per method of
    /// that operation kind. Empty groups produce no type.
    ///
    /// A single method annotated with operation `none` suppresses every root
    /// type of its service, not just that method's field.
    pub fn lower_service(&self, service: &ServiceDescriptor) -> Result<Vec<GraphQLType>> {
        if let Some(method) =
            service.methods().iter().find(|m| m.operation() == OperationKind::None) {
            log::debug!(
                "Skipping service `{}`: method `{}` is annotated with operation \
                `none`.",
                service.full_name(),
                method.name(),
            );
            return Ok(vec![]);
        }

        let service_name =
            self.names.output_name(service.full_name()).ok_or_else(
                || GenerateError::UnresolvedTypeName {
                    representation: "service",
                    type_name: service.full_name().to_string(),
                }
            )?;
        let prefix = self.params.root_type_prefix().unwrap_or_default();

        let mut types: Vec<GraphQLType> = vec![];
        for operation in ROOT_OPERATION_KINDS {
            let Some(suffix) = operation.root_type_suffix() else {
                continue;
            };

            let mut root_type = ObjectType::new(format!("{prefix}{service_name}_{suffix}"));
            for method in service.methods().iter().filter(|m| m.operation() == operation) {
                self.add_object_field(&mut root_type, self.method_field(method)?)?;
            }

            if !root_type.fields().is_empty() {
                types.push(root_type.into());
            }
        }

        Ok(types)
    }

    /// The request becomes a single non-null `input` argument unless it has
    /// no fields. An empty response becomes a nullable `Boolean`; it is up to
    /// the resolver whether to return a value or null.
    fn method_field(&self, method: &MethodDescriptor) -> Result<Field> {
        let field_name = self.namer.field_name(method.name());

        let request = self.method_message(method, method.input_type())?;
        let response = self.method_message(method, method.output_type())?;

        let mut field =
            if response.is_empty() {
                Field::new(
                    field_name,
                    TypeAnnotation::named(BuiltinScalar::Boolean.name(), true),
                )
            } else {
                let response_name =
                    self.names.output_name(response.full_name()).ok_or_else(
                        || GenerateError::UnresolvedTypeName {
                            representation: "output",
                            type_name: response.full_name().to_string(),
                        }
                    )?;
                Field::new(field_name, TypeAnnotation::named(response_name, false))
            };

        if !request.is_empty() && self.params.input_mode() != InputMode::None {
            let request_name =
                self.names.input_name(request.full_name()).ok_or_else(
                    || GenerateError::UnresolvedTypeName {
                        representation: "input",
                        type_name: request.full_name().to_string(),
                    }
                )?;
            field = field.with_parameter(Parameter::new(
                INPUT_ARGUMENT_NAME,
                TypeAnnotation::named(request_name, false),
            ));
        }

        Ok(field)
    }

    fn method_message(
        &self,
        method: &MethodDescriptor,
        type_name: &str,
    ) -> Result<&MessageDescriptor> {
        self.names.message(type_name).ok_or_else(
            || GenerateError::UndefinedTypeReference {
                referenced_by: method.name().to_string(),
                type_name: type_name.to_string(),
            }
        )
    }
}
