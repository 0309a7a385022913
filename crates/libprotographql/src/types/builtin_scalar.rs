/// The built-in GraphQL scalars protobuf scalar kinds are lowered to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    Int,
    String,
}
impl BuiltinScalar {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::fmt::Display for BuiltinScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
