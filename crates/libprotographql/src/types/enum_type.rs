use crate::types::INDENT;

/// An [enum type](https://spec.graphql.org/October2021/#sec-Enums)
/// declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Value names in declaration order.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}
impl std::fmt::Display for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "enum {} {{", self.name)?;
        for value in &self.values {
            writeln!(f, "{INDENT}{value}")?;
        }
        f.write_str("}")
    }
}
