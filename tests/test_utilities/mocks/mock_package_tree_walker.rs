use site_inventory::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock PackageTreeWalker returning canned scans per root
///
/// Roots without a canned scan are reported as missing.
#[derive(Default, Clone)]
pub struct MockPackageTreeWalker {
    scans: HashMap<PathBuf, RootScan>,
    delays: HashMap<PathBuf, Duration>,
    pub walked: Arc<Mutex<Vec<WalkRequest>>>,
}

impl MockPackageTreeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record to the canned scan of `root`
    pub fn with_record(
        mut self,
        root: &str,
        environment: &str,
        bucket: &str,
        name: &str,
        version: &str,
    ) -> Self {
        let record =
            PackageRecord::new(name.to_string(), version.to_string(), Ecosystem::pypi()).unwrap();
        self.scans
            .entry(PathBuf::from(root))
            .or_default()
            .environments
            .entry(environment.to_string())
            .or_default()
            .push(VersionBucket::new(bucket), record);
        self
    }

    pub fn with_issue(mut self, root: &str, issue: SoftErrorKind) -> Self {
        self.scans
            .entry(PathBuf::from(root))
            .or_default()
            .issues
            .push(issue);
        self
    }

    pub fn with_delay(mut self, root: &str, delay: Duration) -> Self {
        self.delays.insert(PathBuf::from(root), delay);
        self
    }

    pub fn walked_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = self
            .walked
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.root.clone())
            .collect();
        roots.sort();
        roots
    }
}

impl PackageTreeWalker for MockPackageTreeWalker {
    fn walk(&self, request: &WalkRequest) -> std::result::Result<RootScan, SoftErrorKind> {
        self.walked.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delays.get(&request.root) {
            std::thread::sleep(*delay);
        }
        self.scans
            .get(&request.root)
            .cloned()
            .ok_or_else(|| SoftErrorKind::MissingRoot {
                path: request.root.clone(),
            })
    }
}
