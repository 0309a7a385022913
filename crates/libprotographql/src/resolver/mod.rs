//! The type-classification pass of a generation run.
//!
//! Decides, for every protobuf message and enum, whether it needs an output
//! (object) representation, an input (input object) representation, both, or
//! neither, and assigns each representation its GraphQL name exactly once.

mod name_resolver;
mod resolved_names;

pub use name_resolver::NameResolver;
pub use resolved_names::ResolvedNames;
