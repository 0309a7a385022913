use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field defined on an [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
            type_annotation,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter.name().to_string(), parameter);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments of this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())?;
        if !self.parameters.is_empty() {
            let params: Vec<String> =
                self.parameters.values()
                    .map(|param| param.to_string())
                    .collect();
            write!(f, "({})", params.join(", "))?;
        }
        write!(f, ": {}", self.type_annotation)
    }
}
