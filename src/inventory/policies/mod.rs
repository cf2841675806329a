mod package_cache_policy;

pub use package_cache_policy::{CacheDecision, PackageCachePolicy};
