//! The generation pass of a run: lowers protobuf messages, enums and services
//! into GraphQL type declarations, using the names assigned by the
//! [`resolver`](crate::resolver).

mod field_type;
mod service_lowering;
mod type_lowerer;
mod well_known_types;

pub use type_lowerer::TypeLowerer;
pub use well_known_types::WellKnownTypes;

#[cfg(test)]
mod tests;
