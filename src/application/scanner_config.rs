use crate::inventory::domain::Ecosystem;
use crate::inventory::policies::PackageCachePolicy;
use crate::inventory::services::PathTemplates;
use std::time::Duration;

/// Default per-root walk limit in seconds
pub const DEFAULT_ROOT_TIMEOUT_SECS: u64 = 60;

/// ScannerConfig - fixed settings of one scanner instance
///
/// Built once from defaults, the config file and CLI flags, then handed to
/// the use case and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    pub ecosystem: Ecosystem,
    pub templates: PathTemplates,
    pub root_timeout: Duration,
    pub cache_policy: PackageCachePolicy,
}

impl ScannerConfig {
    pub fn with_ecosystem(mut self, ecosystem: Ecosystem) -> Self {
        self.ecosystem = ecosystem;
        self
    }

    pub fn with_templates(mut self, templates: PathTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_root_timeout(mut self, root_timeout: Duration) -> Self {
        self.root_timeout = root_timeout;
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: PackageCachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            ecosystem: Ecosystem::pypi(),
            templates: PathTemplates::default(),
            root_timeout: Duration::from_secs(DEFAULT_ROOT_TIMEOUT_SECS),
            cache_policy: PackageCachePolicy::default(),
        }
    }
}
