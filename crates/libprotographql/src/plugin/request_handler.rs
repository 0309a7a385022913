use crate::descriptor::DescriptorGraph;
use crate::generator::GeneratedFile;
use crate::generator::Generator;
use crate::parameters::Parameters;
use crate::plugin::PluginError;
use crate::plugin::RawCodeGeneratorRequest;
use crate::plugin::RawFileDescriptorSet;
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response;

type Result<T> = std::result::Result<T, PluginError>;

/// Decodes an encoded `CodeGeneratorRequest` and runs generation over it.
///
/// Only a request that cannot be decoded at all is an `Err`. Configuration
/// and schema errors are reported through the response's `error` field, which
/// protoc prints before failing.
pub fn handle_request_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse> {
    let request = RawCodeGeneratorRequest::decode(bytes)
        .map_err(|err| PluginError::RequestDecode(err.to_string()))?;
    Ok(handle_request(&request))
}

pub fn handle_request(request: &RawCodeGeneratorRequest) -> CodeGeneratorResponse {
    let supported_features =
        Some(code_generator_response::Feature::Proto3Optional as u64);

    let generated = generate_from_encoded_files(
        &request.proto_file,
        &request.file_to_generate,
        request.parameter.as_deref().unwrap_or_default(),
    );

    match generated {
        Ok(files) => CodeGeneratorResponse {
            file: files.iter()
                .map(|file| code_generator_response::File {
                    content: Some(file.content()),
                    name: Some(file.name().to_string()),
                    ..Default::default()
                })
                .collect(),
            supported_features,
            ..Default::default()
        },

        Err(err) => {
            log::error!("Generation failed: {err}");
            CodeGeneratorResponse {
                error: Some(err.to_string()),
                supported_features,
                ..Default::default()
            }
        },
    }
}

/// Parses `parameter`, builds the descriptor graph from the encoded file
/// descriptors (in dependency order), and generates every file in
/// `files_to_generate`.
pub fn generate_from_encoded_files<B: AsRef<[u8]>, S: AsRef<str>>(
    encoded_files: &[B],
    files_to_generate: &[S],
    parameter: &str,
) -> Result<Vec<GeneratedFile>> {
    let params = Parameters::parse(parameter)?;
    let graph = DescriptorGraph::from_encoded_files(encoded_files)?;
    log::debug!(
        "Loaded {} file descriptors, generating {} of them.",
        graph.len(),
        files_to_generate.len(),
    );
    Ok(Generator::new(&graph, &params).generate(files_to_generate)?)
}

/// Splits an encoded `FileDescriptorSet` into its encoded files.
pub fn decode_file_descriptor_set(bytes: &[u8]) -> Result<Vec<Vec<u8>>> {
    RawFileDescriptorSet::decode(bytes)
        .map(|set| set.file)
        .map_err(|err| PluginError::DescriptorSetDecode(err.to_string()))
}
