use crate::inventory::services::DistributionFamily;
use std::path::PathBuf;

/// HostEnvironment port for facts about the machine being scanned
///
/// Kept behind a trait so scans can run against a fake home directory.
pub trait HostEnvironment: Send + Sync {
    /// Home directory of the invoking user, `None` when it cannot be determined
    fn home_dir(&self) -> Option<PathBuf>;

    /// Distribution family of the host OS
    ///
    /// Only consulted when the system interpreter is scanned.
    fn distribution_family(&self) -> DistributionFamily;
}
