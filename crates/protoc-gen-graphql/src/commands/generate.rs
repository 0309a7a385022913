use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libprotographql::Generator;
use libprotographql::Parameters;
use libprotographql::descriptor::DescriptorGraph;
use libprotographql::plugin;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_values_t=[
            "binpb".to_string(),
            "desc".to_string(),
            "pb".to_string(),
            "protoset".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             descriptor set files within a directory.",
        long,
        value_delimiter = ',',
    )]
    descriptor_set_exts: Vec<String>,

    #[arg(
        help="Proto file (as named inside the descriptor sets, e.g. \
             `foo/bar.proto`) to generate. May be repeated. Defaults to every \
             file in the descriptor sets.",
        long="file",
        short='f',
    )]
    files: Vec<String>,

    #[arg(
        default_value=".",
        help="Directory the generated `_pb.graphql` files are written under.",
        long,
        short='o',
    )]
    out_dir: PathBuf,

    #[arg(
        default_value="",
        help="Generation options, in the same comma-separated form protoc \
             passes to the plugin (e.g. `input_mode=all,null_wrappers`).",
        long,
        short='p',
    )]
    param: String,

    #[arg(
        help="Paths to one or more encoded FileDescriptorSet files, or \
             directories containing them.",
        name="DESCRIPTOR_SET_PATHS",
        required=true,
    )]
    descriptor_set_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let set_paths = match self.find_descriptor_sets() {
            Ok(set_paths) => set_paths,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Errors while searching for descriptor sets: {errors:#?}",
                output_utils::RED_X,
            )),
        };
        if set_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No descriptor set files found.",
                output_utils::RED_X,
            ));
        }

        match self.generate(&set_paths).await {
            Ok(stats) => CommandResult::stdout(format_args!(
                concat!(
                    "{} GraphQL generated successfully:\n",
                    "  * Loaded {} descriptor sets.\n",
                    "  * Wrote {} GraphQL files under {:#?}.\n",
                    "  * Declared {} GraphQL types.",
                ),
                output_utils::GREEN_CHECK,
                set_paths.len(),
                stats.num_files,
                self.out_dir,
                stats.num_types,
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors generating GraphQL: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
impl GenerateCmd {
    /// Every file at or under each path argument whose extension is one of
    /// `descriptor_set_exts`.
    fn find_descriptor_sets(&self) -> Result<Vec<PathBuf>, Vec<Box<dyn Error>>> {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        let set_exts: HashSet<String> =
            self.descriptor_set_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.descriptor_set_paths.len(),
        );
        let mut set_paths = vec![];
        for path in &self.descriptor_set_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && set_exts.contains(&*ext) {
                            set_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        // A single explicitly named file is loaded whatever its extension.
        if set_paths.is_empty()
            && self.descriptor_set_paths.len() == 1
            && let Some(first_arg_path) = self.descriptor_set_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it doesn't \
                match any of the --descriptor-set-exts ({}).",
                set_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            set_paths.push(first_arg_path.to_owned());
        }

        if errors.is_empty() {
            Ok(set_paths)
        } else {
            Err(errors)
        }
    }

    async fn generate(&self, set_paths: &[PathBuf]) -> anyhow::Result<GenerateStats> {
        let params = Parameters::parse(self.param.as_str())?;

        let mut encoded_files = vec![];
        for set_path in set_paths {
            let bytes = tokio::fs::read(set_path).await?;
            let mut files = plugin::decode_file_descriptor_set(&bytes)?;
            log::debug!("Loaded {} file descriptors from {set_path:#?}.", files.len());
            encoded_files.append(&mut files);
        }
        let graph = DescriptorGraph::from_encoded_files(&encoded_files)?;

        let files_to_generate: Vec<String> =
            if self.files.is_empty() {
                graph.files().map(|file| file.name().to_string()).collect()
            } else {
                self.files.clone()
            };

        let generated = Generator::new(&graph, &params).generate(&files_to_generate)?;

        let mut stats = GenerateStats::default();
        for file in &generated {
            let out_path = self.out_dir.join(file.name());
            write_file(out_path.as_path(), file.content()).await?;
            log::info!("Wrote {out_path:#?}.");
            stats.num_files += 1;
            stats.num_types += file.types().len();
        }
        Ok(stats)
    }
}

#[derive(Debug, Default)]
struct GenerateStats {
    num_files: usize,
    num_types: usize,
}

async fn write_file(path: &Path, content: String) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}
