use site_inventory::prelude::*;
use std::path::{Path, PathBuf};

/// Mock HostEnvironment with a fixed home directory and distribution family
#[derive(Clone)]
pub struct MockHostEnvironment {
    home: Option<PathBuf>,
    family: DistributionFamily,
}

impl MockHostEnvironment {
    pub fn new(home: &Path) -> Self {
        Self {
            home: Some(home.to_path_buf()),
            family: DistributionFamily::Unknown,
        }
    }

    pub fn without_home() -> Self {
        Self {
            home: None,
            family: DistributionFamily::Unknown,
        }
    }

    pub fn with_family(mut self, family: DistributionFamily) -> Self {
        self.family = family;
        self
    }
}

impl HostEnvironment for MockHostEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn distribution_family(&self) -> DistributionFamily {
        self.family
    }
}
