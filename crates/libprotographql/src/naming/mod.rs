//! Construction of GraphQL type and field names from protobuf names.

mod camel_case;
mod type_namer;

pub use camel_case::camel_case;
pub use camel_case::lower_camel_case;
pub use type_namer::TypeNameParts;
pub use type_namer::TypeNamer;
