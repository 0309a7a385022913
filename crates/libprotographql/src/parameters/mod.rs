//! Generation options, parsed from the protoc plugin parameter string.

mod field_naming;
mod input_mode;
mod int64_type;
#[allow(clippy::module_inception)]
mod parameters;
mod parameters_error;

pub use field_naming::FieldNaming;
pub use input_mode::InputMode;
pub use int64_type::Int64Type;
pub use parameters::Parameters;
pub use parameters_error::ParametersError;

type Result<T> = std::result::Result<T, ParametersError>;

#[cfg(test)]
mod tests;
