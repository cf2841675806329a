use crate::application::dto::{ScanRequest, ScanResult};
use crate::shared::Result;
use async_trait::async_trait;

/// InventoryScanPort - Inbound port for the inventory scan use case
///
/// This is the application's public entry point: one call scans every
/// requested package manager and returns a best-effort result.
#[async_trait]
pub trait InventoryScanPort: Send + Sync {
    /// Scans the package managers selected by `request`
    ///
    /// # Returns
    /// A result holding one inventory per requested manager plus every soft
    /// error encountered on the way
    ///
    /// # Errors
    /// Returns an error only for fatal conditions, such as an unknown home
    /// directory. Problems with individual roots or packages are soft errors
    /// inside the returned result.
    async fn scan(&self, request: ScanRequest) -> Result<ScanResult>;
}
