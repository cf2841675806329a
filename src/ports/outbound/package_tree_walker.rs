use crate::inventory::domain::{Ecosystem, EnvironmentMap, PackageManager};
use crate::inventory::policies::PackageCachePolicy;
use crate::shared::error::SoftErrorKind;
use std::path::PathBuf;

/// One root to walk, with everything the walk needs to build records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRequest {
    pub manager: PackageManager,
    pub root: PathBuf,
    /// Subtrees below `root` that are scanned as roots of their own
    pub excluded_subtrees: Vec<PathBuf>,
    pub ecosystem: Ecosystem,
    pub cache_policy: PackageCachePolicy,
}

impl WalkRequest {
    pub fn new(
        manager: PackageManager,
        root: PathBuf,
        ecosystem: Ecosystem,
        cache_policy: PackageCachePolicy,
    ) -> Self {
        Self {
            manager,
            root,
            excluded_subtrees: Vec::new(),
            ecosystem,
            cache_policy,
        }
    }

    pub fn with_excluded_subtrees(mut self, excluded_subtrees: Vec<PathBuf>) -> Self {
        self.excluded_subtrees = excluded_subtrees;
        self
    }
}

/// Outcome of walking one root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootScan {
    pub environments: EnvironmentMap,
    /// Soft errors that cost part of this root (unreadable subtrees, bad metadata)
    pub issues: Vec<SoftErrorKind>,
}

impl RootScan {
    pub fn package_count(&self) -> usize {
        self.environments
            .values()
            .map(|inventory| inventory.package_count())
            .sum()
    }
}

/// PackageTreeWalker port for discovering installed packages under a root
///
/// Walks are blocking and run on worker threads, one per root.
pub trait PackageTreeWalker: Send + Sync {
    /// Walks `request.root` and collects every package found below it
    ///
    /// # Errors
    /// Returns [`SoftErrorKind::MissingRoot`] if the root does not exist, is
    /// not a directory, or cannot be listed at all
    fn walk(&self, request: &WalkRequest) -> Result<RootScan, SoftErrorKind>;
}
