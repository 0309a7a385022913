use crate::descriptor::DescriptorGraph;
use crate::generator::GenerateError;
use crate::generator::GeneratedFile;
use crate::lowering::TypeLowerer;
use crate::parameters::Parameters;
use crate::resolver::NameResolver;
use crate::types::TypesMapBuilder;

type Result<T> = std::result::Result<T, GenerateError>;

/// One generation run over a [`DescriptorGraph`].
#[derive(Debug)]
pub struct Generator<'a> {
    graph: &'a DescriptorGraph,
    params: &'a Parameters,
}
impl<'a> Generator<'a> {
    pub fn new(graph: &'a DescriptorGraph, params: &'a Parameters) -> Self {
        Self { graph, params }
    }

    /// Resolves names across the whole graph, then lowers each file in
    /// `files_to_generate` (in that order).
    ///
    /// Files that produce no declarations are left out of the result. Every
    /// declared type name must be unique across the whole run.
    pub fn generate<S: AsRef<str>>(
        &self,
        files_to_generate: &[S],
    ) -> Result<Vec<GeneratedFile>> {
        let names = NameResolver::resolve_graph(self.graph, self.params)?;
        let lowerer = TypeLowerer::new(&names, self.params);
        let mut types_map_builder = TypesMapBuilder::new();

        let mut generated_files = vec![];
        for file_name in files_to_generate {
            let file_name = file_name.as_ref();
            let file = self.graph.file(file_name).ok_or_else(
                || GenerateError::UnknownFileToGenerate {
                    file_name: file_name.to_string(),
                }
            )?;

            let types = lowerer.lower_file(file)?;
            if types.is_empty() {
                log::debug!("No GraphQL types for `{file_name}`, skipping it.");
                continue;
            }
            for type_ in &types {
                types_map_builder.add_new_type(file_name, type_)?;
            }

            log::debug!(
                "Generated {} GraphQL types for `{file_name}`.",
                types.len(),
            );
            generated_files.push(GeneratedFile::new(file_name, types));
        }

        log::debug!(
            "Generated {} files declaring {} GraphQL types.",
            generated_files.len(),
            types_map_builder.len(),
        );
        Ok(generated_files)
    }
}
