use crate::types::Field;
use crate::types::INDENT;
use indexmap::IndexMap;

/// An [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Appends `field`. If a field with the same name was already added, it
    /// is replaced in place and returned.
    pub fn add_field(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.name().to_string(), field)
    }

    /// The fields of this type in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "type {} {{", self.name)?;
        for field in self.fields.values() {
            writeln!(f, "{INDENT}{field}")?;
        }
        f.write_str("}")
    }
}
