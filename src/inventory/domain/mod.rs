pub mod environment_inventory;
pub mod package_manager;
pub mod package_record;
pub mod scan_metadata;
pub mod version_bucket;

pub use environment_inventory::{EnvironmentInventory, EnvironmentMap, ManagerInventory};
pub use package_manager::PackageManager;
pub use package_record::{Ecosystem, PackageName, PackageRecord, Version};
pub use scan_metadata::ScanMetadata;
pub use version_bucket::VersionBucket;
