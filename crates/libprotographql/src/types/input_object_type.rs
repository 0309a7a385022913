use crate::types::INDENT;
use crate::types::InputField;
use indexmap::IndexMap;

/// An
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Appends `field`. If a field with the same name was already added, it
    /// is replaced in place and returned.
    pub fn add_field(&mut self, field: InputField) -> Option<InputField> {
        self.fields.insert(field.name().to_string(), field)
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "input {} {{", self.name)?;
        for field in self.fields.values() {
            writeln!(f, "{INDENT}{field}")?;
        }
        f.write_str("}")
    }
}
