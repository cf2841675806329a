use crate::inventory::domain::PackageManager;
use crate::shared::Result;
use std::collections::BTreeSet;

/// ScanRequest - which package managers to scan
///
/// `virtualenv` is an alias of `pipenv`, so asking for both still scans the
/// shared root once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    pub requested_managers: BTreeSet<PackageManager>,
    pub scan_all: bool,
}

impl ScanRequest {
    pub fn new<I>(requested_managers: I, scan_all: bool) -> Self
    where
        I: IntoIterator<Item = PackageManager>,
    {
        Self {
            requested_managers: requested_managers.into_iter().collect(),
            scan_all,
        }
    }

    /// Request covering every supported manager
    pub fn all() -> Self {
        Self::new([], true)
    }

    /// Builds a request from user-supplied manager names
    ///
    /// # Errors
    /// Returns an error for the first name that is not a known manager
    pub fn from_names<I, S>(names: I, scan_all: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested_managers = names
            .into_iter()
            .map(|name| name.as_ref().parse::<PackageManager>())
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            requested_managers,
            scan_all,
        })
    }

    /// Managers to scan, in stable order
    pub fn managers(&self) -> Vec<PackageManager> {
        if self.scan_all {
            return PackageManager::ALL.to_vec();
        }
        self.requested_managers.iter().copied().collect()
    }
}
