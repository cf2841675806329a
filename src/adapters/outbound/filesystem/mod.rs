/// Filesystem adapters for discovering packages and writing output
mod conda_registry;
mod dist_info_walker;
mod file_writer;
mod metadata_reader;

pub use conda_registry::{parse_registry, CondaRegistryReader};
pub use dist_info_walker::{FileSystemWalker, DIST_INFO_SUFFIX, METADATA_FILE};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use metadata_reader::MetadataFileReader;
