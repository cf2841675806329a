use crate::inventory::domain::PackageManager;
use crate::shared::error::InventoryError;
use std::path::{Component, Path};
use std::str::FromStr;

/// Decision for one metadata directory found under a conda root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    /// Not inside a package cache; derive the environment key normally
    Regular,
    /// Inside the package cache and dropped
    Skip,
    /// Inside the package cache and filed under this pseudo-environment
    PseudoEnvironment(&'static str),
}

/// PackageCachePolicy for conda's shared package cache (`<root>/pkgs`)
///
/// Extracted packages in the cache are not installed anywhere by themselves;
/// counting them as environment packages would double every record that
/// also lives in a real environment.
///
/// Only a `pkgs` directory directly below the scanned root matches, so a
/// home directory such as `/home/pkgs` or an environment named `pkgs`
/// never triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageCachePolicy {
    /// Drop cache entries (default)
    #[default]
    Exclude,
    /// Keep cache entries under [`PackageCachePolicy::CACHE_ENVIRONMENT`]
    Separate,
}

impl PackageCachePolicy {
    /// Directory name of conda's package cache
    pub const CACHE_DIR: &'static str = "pkgs";

    /// Pseudo-environment used by [`PackageCachePolicy::Separate`]
    pub const CACHE_ENVIRONMENT: &'static str = "conda-package-cache";

    /// Decides what to do with a metadata directory
    ///
    /// # Arguments
    /// * `manager` - Manager being scanned; only conda has a package cache
    /// * `relative_path` - Metadata directory path relative to the scanned root
    pub fn decide(&self, manager: PackageManager, relative_path: &Path) -> CacheDecision {
        if manager != PackageManager::Conda || !Self::is_in_package_cache(relative_path) {
            return CacheDecision::Regular;
        }

        match self {
            PackageCachePolicy::Exclude => CacheDecision::Skip,
            PackageCachePolicy::Separate => {
                CacheDecision::PseudoEnvironment(Self::CACHE_ENVIRONMENT)
            }
        }
    }

    /// Whether `relative_path` starts with the cache directory
    pub fn is_in_package_cache(relative_path: &Path) -> bool {
        matches!(
            relative_path.components().next(),
            Some(Component::Normal(name)) if name == Self::CACHE_DIR
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCachePolicy::Exclude => "exclude",
            PackageCachePolicy::Separate => "separate",
        }
    }
}

impl FromStr for PackageCachePolicy {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclude" => Ok(PackageCachePolicy::Exclude),
            "separate" => Ok(PackageCachePolicy::Separate),
            other => Err(InventoryError::InvalidConfig {
                field: "conda_package_cache".to_string(),
                reason: format!("'{}' is not one of: exclude, separate", other),
            }),
        }
    }
}
