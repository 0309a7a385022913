//! The GraphQL type declarations a generation run produces, and their
//! rendering to GraphQL schema definition language.

mod builtin_scalar;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_type;
mod parameter;
mod type_annotation;
mod types_map_builder;
mod union_type;

pub use builtin_scalar::BuiltinScalar;
pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;

/// Indentation used for fields and enum values in rendered SDL.
const INDENT: &str = "  ";
