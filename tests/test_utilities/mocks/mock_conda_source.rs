use site_inventory::prelude::*;
use std::path::{Path, PathBuf};

/// Mock CondaEnvironmentSource returning a canned outcome
#[derive(Clone)]
pub struct MockCondaSource {
    outcome: std::result::Result<Vec<PathBuf>, SoftErrorKind>,
}

impl MockCondaSource {
    pub fn empty() -> Self {
        Self {
            outcome: Ok(Vec::new()),
        }
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { outcome: Ok(roots) }
    }

    pub fn failing(cause: SoftErrorKind) -> Self {
        Self {
            outcome: Err(cause),
        }
    }
}

impl CondaEnvironmentSource for MockCondaSource {
    fn list_environments(&self, _conda_base: &Path) -> std::result::Result<Vec<PathBuf>, SoftErrorKind> {
        self.outcome.clone()
    }
}
