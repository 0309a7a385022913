//! Drives a full generation run: name resolution over the whole descriptor
//! graph, then lowering of each requested file.

mod generate_error;
mod generated_file;
#[allow(clippy::module_inception)]
mod generator;

pub use generate_error::GenerateError;
pub use generated_file::GeneratedFile;
pub use generated_file::graphql_file_name;
pub use generator::Generator;

#[cfg(test)]
mod tests;
