use crate::descriptor::EnumDescriptor;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::MessageDescriptor;
use crate::descriptor::OneofDescriptor;
use crate::descriptor::ProtoFile;
use crate::generator::GenerateError;
use crate::lowering::WellKnownTypes;
use crate::lowering::field_type::FieldOptions;
use crate::naming::TypeNameParts;
use crate::naming::TypeNamer;
use crate::parameters::Parameters;
use crate::resolver::ResolvedNames;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use std::collections::HashSet;

pub(super) type Result<T> = std::result::Result<T, GenerateError>;

/// Converts protobuf declarations into GraphQL type declarations.
///
/// Borrows the [`ResolvedNames`] of the run and never mutates them, so one
/// lowerer can be shared across every file of the run.
#[derive(Debug)]
pub struct TypeLowerer<'run> {
    pub(super) names: &'run ResolvedNames<'run>,
    pub(super) namer: TypeNamer,
    pub(super) params: &'run Parameters,
    pub(super) well_known_types: WellKnownTypes,
}
impl<'run> TypeLowerer<'run> {
    pub fn new(names: &'run ResolvedNames<'run>, params: &'run Parameters) -> Self {
        Self {
            names,
            namer: TypeNamer::new(params),
            params,
            well_known_types: WellKnownTypes::new(params),
        }
    }

    /// Every declaration for `file`: services first, then messages, then
    /// enums, each in declaration order.
    pub fn lower_file(&self, file: &ProtoFile) -> Result<Vec<GraphQLType>> {
        let mut types: Vec<GraphQLType> = vec![];
        for service in file.services() {
            types.append(&mut self.lower_service(service)?);
        }
        for message in file.messages() {
            types.append(&mut self.lower_message(message)?);
        }
        for enum_ in file.enums() {
            types.extend(self.lower_enum(enum_));
        }
        Ok(types)
    }

    /// The object type (plus one union and one object per variant for each
    /// oneof) if the message has an output name, followed by the input type
    /// (plus one input type per oneof) if it has an input name.
    pub fn lower_message(&self, message: &MessageDescriptor) -> Result<Vec<GraphQLType>> {
        let mut types: Vec<GraphQLType> = vec![];

        if let Some(type_name) = self.names.output_name(message.full_name()) {
            let mut object_type = ObjectType::new(type_name);
            for (field_name, type_annotation) in self.field_list(message, false)? {
                self.add_object_field(&mut object_type, Field::new(field_name, type_annotation))?;
            }
            types.push(object_type.into());

            for (index, oneof) in real_oneofs(message) {
                types.append(&mut self.oneof_union(message, index, oneof)?);
            }
        }

        if let Some(type_name) = self.names.input_name(message.full_name()) {
            let mut input_type = InputObjectType::new(type_name);
            for (field_name, type_annotation) in self.field_list(message, true)? {
                self.add_input_field(&mut input_type, InputField::new(field_name, type_annotation))?;
            }
            types.push(input_type.into());

            for (index, oneof) in real_oneofs(message) {
                types.push(self.oneof_input(message, index, oneof)?.into());
            }
        }

        Ok(types)
    }

    /// Nothing when the enum was never reached; otherwise a single enum type
    /// with the protobuf value names unchanged.
    pub fn lower_enum(&self, enum_: &EnumDescriptor) -> Option<GraphQLType> {
        let type_name = self.names.output_name(enum_.full_name())?;
        Some(EnumType::new(type_name, enum_.values().to_vec()).into())
    }

    /// Fields of the object or input representation of `message`, in
    /// declaration order.
    ///
    /// Members of a oneof collapse into a single nullable field named after
    /// the group and typed as the group's own union (or input type). Members
    /// of the synthetic oneof of a proto3 `optional` field are ordinary
    /// fields with nullable scalars.
    fn field_list(
        &self,
        message: &MessageDescriptor,
        input: bool,
    ) -> Result<Vec<(String, TypeAnnotation)>> {
        let mut fields = vec![];
        let mut seen_oneofs = HashSet::new();

        for field in message.fields() {
            let oneof =
                field.oneof_index()
                    .map(|index| (index, &message.oneofs()[index]))
                    .filter(|(_, oneof)| !oneof.synthetic());

            match oneof {
                Some((index, oneof)) => {
                    if !seen_oneofs.insert(index) {
                        continue;
                    }
                    let oneof_type_name = self.namer.type_name(
                        &message_name_parts(message)
                            .segment(oneof.name())
                            .input(input),
                    );
                    fields.push((
                        self.namer.field_name(oneof.name()),
                        TypeAnnotation::named(oneof_type_name, true),
                    ));
                },

                None => fields.push((
                    self.namer.field_name(field.name()),
                    self.field_type(field, FieldOptions {
                        input,
                        nullable_scalars: field.proto3_optional(),
                    })?,
                )),
            }
        }

        Ok(fields)
    }

    /// A union named after the oneof whose members are one single-field
    /// object per variant.
    fn oneof_union(
        &self,
        message: &MessageDescriptor,
        oneof_index: usize,
        oneof: &OneofDescriptor,
    ) -> Result<Vec<GraphQLType>> {
        let mut union_type = UnionType::new(self.namer.type_name(
            &message_name_parts(message).segment(oneof.name()),
        ));
        let mut variant_types: Vec<GraphQLType> = vec![];

        for field in oneof_members(message, oneof_index) {
            let variant_name = self.namer.type_name(
                &message_name_parts(message)
                    .segment(oneof.name())
                    .segment(field.name()),
            );
            union_type.add_member(variant_name.as_str());

            let mut variant_type = ObjectType::new(variant_name);
            variant_type.add_field(Field::new(
                self.namer.field_name(field.name()),
                self.field_type(field, FieldOptions::default())?,
            ));
            variant_types.push(variant_type.into());
        }

        let mut types: Vec<GraphQLType> = vec![union_type.into()];
        types.append(&mut variant_types);
        Ok(types)
    }

    /// GraphQL input types have no disjoint-union form, so a oneof becomes
    /// one input type whose fields are all the variants, each optional.
    fn oneof_input(
        &self,
        message: &MessageDescriptor,
        oneof_index: usize,
        oneof: &OneofDescriptor,
    ) -> Result<InputObjectType> {
        let mut input_type = InputObjectType::new(self.namer.type_name(
            &message_name_parts(message)
                .segment(oneof.name())
                .input(true),
        ));
        for field in oneof_members(message, oneof_index) {
            self.add_input_field(&mut input_type, InputField::new(
                self.namer.field_name(field.name()),
                self.field_type(field, FieldOptions {
                    input: true,
                    nullable_scalars: true,
                })?,
            ))?;
        }
        Ok(input_type)
    }

    /// Fails if a field of the same name was already added, e.g. `foo_bar` and
    /// `fooBar` both lower-camel-cased to `fooBar`.
    pub(super) fn add_object_field(
        &self,
        object_type: &mut ObjectType,
        field: Field,
    ) -> Result<()> {
        if object_type.fields().contains_key(field.name()) {
            return Err(GenerateError::DuplicateFieldDefinition {
                type_name: object_type.name().to_string(),
                field_name: field.name().to_string(),
            });
        }
        object_type.add_field(field);
        Ok(())
    }

    fn add_input_field(
        &self,
        input_type: &mut InputObjectType,
        field: InputField,
    ) -> Result<()> {
        if input_type.fields().contains_key(field.name()) {
            return Err(GenerateError::DuplicateFieldDefinition {
                type_name: input_type.name().to_string(),
                field_name: field.name().to_string(),
            });
        }
        input_type.add_field(field);
        Ok(())
    }
}

fn message_name_parts(message: &MessageDescriptor) -> TypeNameParts<'_> {
    TypeNameParts::new(
        message.package(),
        message.type_path().iter().map(String::as_str),
    )
}

fn oneof_members(
    message: &MessageDescriptor,
    oneof_index: usize,
) -> impl Iterator<Item = &FieldDescriptor> {
    message.fields().iter()
        .filter(move |field| field.oneof_index() == Some(oneof_index))
}

fn real_oneofs(
    message: &MessageDescriptor,
) -> impl Iterator<Item = (usize, &OneofDescriptor)> {
    message.oneofs().iter()
        .enumerate()
        .filter(|(_, oneof)| !oneof.synthetic())
}
