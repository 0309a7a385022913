use crate::descriptor::DescriptorError;
use crate::generator::GenerateError;
use crate::parameters::ParametersError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PluginError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("Failed to decode a FileDescriptorSet: {0}")]
    DescriptorSetDecode(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Parameters(#[from] ParametersError),

    #[error("Failed to decode the CodeGeneratorRequest: {0}")]
    RequestDecode(String),
}
