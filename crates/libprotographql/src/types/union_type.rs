use indexmap::IndexSet;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions)
/// declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) members: IndexSet<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            members: IndexSet::new(),
            name: name.into(),
        }
    }

    pub fn add_member(&mut self, type_name: impl Into<String>) {
        self.members.insert(type_name.into());
    }

    /// An ordered list of the names of each object type that is a member of
    /// this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Display for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "union {} = {}", self.name, self.member_type_names().join(" | "))
    }
}
