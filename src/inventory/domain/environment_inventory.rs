use super::{PackageManager, PackageRecord, VersionBucket};
use serde::Serialize;
use std::collections::BTreeMap;

/// Environment name → inventory, for one root or one merged manager
pub type EnvironmentMap = BTreeMap<String, EnvironmentInventory>;

/// Packages of one logical environment, grouped by interpreter version
///
/// Records inside a bucket keep insertion order. Records are only ever
/// appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentInventory {
    buckets: BTreeMap<VersionBucket, Vec<PackageRecord>>,
}

impl EnvironmentInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the given bucket
    pub fn push(&mut self, bucket: VersionBucket, record: PackageRecord) {
        self.buckets.entry(bucket).or_default().push(record);
    }

    /// Concatenates every bucket of `other` after the matching bucket of `self`
    pub fn append(&mut self, other: EnvironmentInventory) {
        for (bucket, mut records) in other.buckets {
            self.buckets.entry(bucket).or_default().append(&mut records);
        }
    }

    pub fn bucket(&self, bucket: &str) -> Option<&[PackageRecord]> {
        self.buckets
            .get(&VersionBucket::new(bucket))
            .map(Vec::as_slice)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&VersionBucket, &[PackageRecord])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn package_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Everything found for one package manager
///
/// System and pip have a single implicit environment and serialize as a
/// bare bucket map; the others serialize as environment name → buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ManagerInventory {
    Flat(EnvironmentInventory),
    PerEnvironment(EnvironmentMap),
}

impl ManagerInventory {
    /// Empty inventory of the right shape for `manager`
    pub fn empty_for(manager: PackageManager) -> Self {
        if manager.has_named_environments() {
            ManagerInventory::PerEnvironment(EnvironmentMap::new())
        } else {
            ManagerInventory::Flat(EnvironmentInventory::new())
        }
    }

    /// Shapes a (merged) environment map for `manager`
    ///
    /// For flat managers every environment is folded into one inventory, in
    /// key order. The key deriver only ever produces the manager's own name
    /// for those, so in practice there is a single entry.
    pub fn from_environments(manager: PackageManager, environments: EnvironmentMap) -> Self {
        if manager.has_named_environments() {
            return ManagerInventory::PerEnvironment(environments);
        }

        let mut flat = EnvironmentInventory::new();
        for (_, inventory) in environments {
            flat.append(inventory);
        }
        ManagerInventory::Flat(flat)
    }

    /// Looks up a named environment; flat inventories have none, use [`Self::as_flat`]
    pub fn environment(&self, name: &str) -> Option<&EnvironmentInventory> {
        match self {
            ManagerInventory::Flat(_) => None,
            ManagerInventory::PerEnvironment(map) => map.get(name),
        }
    }

    pub fn as_flat(&self) -> Option<&EnvironmentInventory> {
        match self {
            ManagerInventory::Flat(inventory) => Some(inventory),
            ManagerInventory::PerEnvironment(_) => None,
        }
    }

    pub fn environment_names(&self) -> Vec<&str> {
        match self {
            ManagerInventory::Flat(_) => Vec::new(),
            ManagerInventory::PerEnvironment(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Every record, in environment then bucket order
    pub fn records(&self) -> Vec<&PackageRecord> {
        match self {
            ManagerInventory::Flat(inventory) => inventory
                .buckets()
                .flat_map(|(_, records)| records.iter())
                .collect(),
            ManagerInventory::PerEnvironment(map) => map
                .values()
                .flat_map(|inventory| inventory.buckets().flat_map(|(_, r)| r.iter()))
                .collect(),
        }
    }

    pub fn package_count(&self) -> usize {
        match self {
            ManagerInventory::Flat(inventory) => inventory.package_count(),
            ManagerInventory::PerEnvironment(map) => {
                map.values().map(EnvironmentInventory::package_count).sum()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.package_count() == 0
    }
}
