//! site-inventory - installed Python package inventory
//!
//! This library discovers the Python distributions installed on a host
//! (`*.dist-info` directories) for the system interpreter, pip user
//! installs, poetry and pipenv virtualenvs and conda environments, and
//! groups them per package manager, environment and interpreter version.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Pure domain model, services and policies
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use site_inventory::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = ScanInventoryUseCase::new(
//!     SystemHost::new(),
//!     CondaRegistryReader::new(),
//!     FileSystemWalker::new(),
//!     StderrProgressReporter::new(),
//!     ScannerConfig::default(),
//! );
//!
//! let result = use_case.execute(ScanRequest::all()).await?;
//! println!("{}", result.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CondaRegistryReader, FileSystemWalker, FileSystemWriter, MetadataFileReader,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::system::SystemHost;
    pub use crate::application::dto::{ScanRequest, ScanResult};
    pub use crate::application::use_cases::ScanInventoryUseCase;
    pub use crate::application::ScannerConfig;
    pub use crate::inventory::domain::{
        Ecosystem, EnvironmentInventory, EnvironmentMap, ManagerInventory, PackageManager,
        PackageRecord, ScanMetadata, VersionBucket,
    };
    pub use crate::inventory::policies::PackageCachePolicy;
    pub use crate::inventory::services::{
        DistributionFamily, EnvironmentKeyDeriver, MetadataParser, PathResolver, PathTemplates,
        ResultAggregator,
    };
    pub use crate::ports::inbound::InventoryScanPort;
    pub use crate::ports::outbound::{
        CondaEnvironmentSource, HostEnvironment, OutputPresenter, PackageTreeWalker,
        ProgressReporter, RootScan, WalkRequest,
    };
    pub use crate::shared::error::{ExitCode, InventoryError, SoftError, SoftErrorKind};
    pub use crate::shared::Result;
}
