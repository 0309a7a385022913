use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::UnionType;

/// A single generated GraphQL type declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Object(ObjectType),
    Union(UnionType),
}
impl GraphQLType {
    /// If this [`GraphQLType`] is a [`GraphQLType::Enum`], unwrap and return a
    /// reference to the inner [`EnumType`].
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::InputObject`], unwrap and
    /// return a reference to the inner [`InputObjectType`].
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Object`], unwrap and return
    /// a reference to the inner [`ObjectType`].
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// If this [`GraphQLType`] is a [`GraphQLType::Union`], unwrap and return
    /// a reference to the inner [`UnionType`].
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Renders this declaration as GraphQL schema definition language.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(t) => t.fmt(f),
            Self::InputObject(t) => t.fmt(f),
            Self::Object(t) => t.fmt(f),
            Self::Union(t) => t.fmt(f),
        }
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
