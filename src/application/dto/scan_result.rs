use crate::inventory::domain::{ManagerInventory, PackageManager, ScanMetadata};
use crate::shared::error::SoftError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// ScanResult - best-effort inventory of one scan
///
/// Holds exactly one inventory per requested manager, even when that manager
/// contributed nothing, and every soft error in the order it was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub metadata: ScanMetadata,
    pub inventories: BTreeMap<PackageManager, ManagerInventory>,
    pub soft_errors: Vec<SoftError>,
}

impl ScanResult {
    pub fn new(metadata: ScanMetadata) -> Self {
        Self {
            metadata,
            inventories: BTreeMap::new(),
            soft_errors: Vec::new(),
        }
    }

    pub fn inventory(&self, manager: PackageManager) -> Option<&ManagerInventory> {
        self.inventories.get(&manager)
    }

    pub fn package_count(&self) -> usize {
        self.inventories
            .values()
            .map(ManagerInventory::package_count)
            .sum()
    }

    pub fn has_soft_errors(&self) -> bool {
        !self.soft_errors.is_empty()
    }

    pub fn soft_errors_for(&self, manager: PackageManager) -> Vec<&SoftError> {
        self.soft_errors
            .iter()
            .filter(|error| error.manager == manager)
            .collect()
    }

    /// Pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize scan result: {}", e))
    }
}
