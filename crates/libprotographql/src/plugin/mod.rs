//! The protoc plugin boundary: decoding `CodeGeneratorRequest`s and
//! `FileDescriptorSet`s, and building `CodeGeneratorResponse`s.

mod plugin_error;
mod raw_messages;
mod request_handler;

pub use plugin_error::PluginError;
pub use raw_messages::RawCodeGeneratorRequest;
pub use raw_messages::RawFileDescriptorSet;
pub use request_handler::decode_file_descriptor_set;
pub use request_handler::generate_from_encoded_files;
pub use request_handler::handle_request;
pub use request_handler::handle_request_bytes;

#[cfg(test)]
mod tests;
