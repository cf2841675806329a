pub mod environment_key;
pub mod metadata_parser;
pub mod path_resolver;
pub mod result_aggregator;

pub use environment_key::{EnvironmentKeyDeriver, UNKNOWN_ENVIRONMENT};
pub use metadata_parser::{MetadataParser, ParsedMetadata};
pub use path_resolver::{DistributionFamily, PathResolver, PathTemplates};
pub use result_aggregator::ResultAggregator;
