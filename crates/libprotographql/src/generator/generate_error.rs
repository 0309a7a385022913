use thiserror::Error;

/// A schema-consistency violation that aborts a generation run.
///
/// Generation is all-or-nothing: any of these means no files are produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error(
        "Generated type `{type_name}` would redefine the built-in GraphQL \
        scalar of the same name (in `{file_name}`)"
    )]
    BuiltinTypeRedefinition {
        file_name: String,
        type_name: String,
    },

    #[error(
        "Multiple fields named `{field_name}` were generated on `{type_name}`"
    )]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
    },

    #[error(
        "Multiple GraphQL types with the name `{type_name}` were generated: \
        {def1} and {def2}"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: String,
        def2: String,
    },

    #[error(
        "`{referenced_by}` references `{type_name}`, which is not declared in \
        any file that precedes it"
    )]
    UndefinedTypeReference {
        referenced_by: String,
        type_name: String,
    },

    #[error("Requested to generate `{file_name}`, which is not among the supplied files")]
    UnknownFileToGenerate {
        file_name: String,
    },

    #[error("No {representation} type name was resolved for `{type_name}`")]
    UnresolvedTypeName {
        representation: &'static str,
        type_name: String,
    },
}
