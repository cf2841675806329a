use crate::shared::error::SoftErrorKind;
use std::path::{Path, PathBuf};

/// CondaEnvironmentSource port for enumerating conda environment roots
pub trait CondaEnvironmentSource: Send + Sync {
    /// Lists the environment roots registered under `conda_base`
    ///
    /// # Returns
    /// The registered roots in registry order with duplicates removed. An
    /// absent base directory yields an empty list.
    ///
    /// # Errors
    /// Returns [`SoftErrorKind::RegistryRead`] when the base directory exists
    /// but its registry is missing, unreadable or not UTF-8.
    fn list_environments(&self, conda_base: &Path) -> Result<Vec<PathBuf>, SoftErrorKind>;
}
