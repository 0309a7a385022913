//! Translates a graph of protobuf file descriptors (messages, enums, services)
//! into GraphQL schema type definitions.
//!
//! A generation run has two phases: the [`resolver`] decides which
//! protobuf types need an output and/or an input GraphQL representation and
//! assigns each a unique name, then [`lowering`] turns every message, enum and
//! service of a requested file into [`types::GraphQLType`] declarations.
//! [`generator::Generator`] drives both phases and [`plugin`] adapts the whole
//! thing to the protoc plugin protocol.

pub mod descriptor;
pub mod generator;
pub mod lowering;
pub mod naming;
pub mod parameters;
pub mod plugin;
pub mod resolver;
pub mod types;

pub use generator::GeneratedFile;
pub use generator::GenerateError;
pub use generator::Generator;
pub use parameters::Parameters;

#[cfg(test)]
mod test;
