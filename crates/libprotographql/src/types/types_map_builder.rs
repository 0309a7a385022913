use crate::generator::GenerateError;
use crate::types::BuiltinScalar;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

/// Tracks every type name declared during one generation run, across all
/// generated files, so that no two declarations share a name.
#[derive(Debug, Default)]
pub struct TypesMapBuilder {
    /// Declared name -> (kind, name of the file that declared it).
    types: IndexMap<String, (GraphQLTypeKind, String)>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    pub fn add_new_type(
        &mut self,
        file_name: &str,
        type_: &GraphQLType,
    ) -> Result<()> {
        let type_name = type_.name();

        let is_builtin = [
            BuiltinScalar::Boolean,
            BuiltinScalar::Float,
            BuiltinScalar::Int,
            BuiltinScalar::String,
        ].iter().any(|scalar| scalar.name() == type_name);
        if is_builtin {
            return Err(GenerateError::BuiltinTypeRedefinition {
                file_name: file_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        if let Some((conflicting_kind, conflicting_file)) = self.types.get(type_name) {
            return Err(GenerateError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: format!("{conflicting_kind} in `{conflicting_file}`"),
                def2: format!("{} in `{file_name}`", type_.kind()),
            });
        }

        self.types.insert(
            type_name.to_string(),
            (type_.kind(), file_name.to_string()),
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}
