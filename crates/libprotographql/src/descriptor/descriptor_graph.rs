use crate::descriptor::ProtoFile;
use crate::descriptor::Result;
use indexmap::IndexMap;

/// Every protobuf file of a generation run, keyed by file name and kept in
/// the order they were supplied.
///
/// protoc supplies files in dependency order: a file never precedes a file it
/// imports. Name resolution relies on that ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescriptorGraph {
    files: IndexMap<String, ProtoFile>,
}
impl DescriptorGraph {
    /// Decodes each encoded `FileDescriptorProto` in order.
    pub fn from_encoded_files<B: AsRef<[u8]>>(
        encoded_files: impl IntoIterator<Item = B>,
    ) -> Result<Self> {
        let files =
            encoded_files.into_iter()
                .map(|bytes| ProtoFile::from_encoded(bytes.as_ref()))
                .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_files(files))
    }

    /// Builds a graph from already-converted files. When two files share a
    /// name, the first one wins.
    pub fn from_files(files: impl IntoIterator<Item = ProtoFile>) -> Self {
        let mut files_map = IndexMap::new();
        for file in files {
            if files_map.contains_key(file.name()) {
                log::debug!("Skipping duplicate file descriptor `{}`.", file.name());
                continue;
            }
            files_map.insert(file.name().to_string(), file);
        }
        Self { files: files_map }
    }

    pub fn file(&self, name: &str) -> Option<&ProtoFile> {
        self.files.get(name)
    }

    /// All files in dependency order.
    pub fn files(&self) -> impl Iterator<Item = &ProtoFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
