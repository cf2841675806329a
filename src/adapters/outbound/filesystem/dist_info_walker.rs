use super::MetadataFileReader;
use crate::inventory::domain::VersionBucket;
use crate::inventory::policies::CacheDecision;
use crate::inventory::services::EnvironmentKeyDeriver;
use crate::ports::outbound::{PackageTreeWalker, RootScan, WalkRequest};
use crate::shared::error::SoftErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name suffix of an installed distribution
pub const DIST_INFO_SUFFIX: &str = ".dist-info";

/// Core metadata file inside a `.dist-info` directory
pub const METADATA_FILE: &str = "METADATA";

/// FileSystemWalker adapter - finds `.dist-info` directories under a root
///
/// Pre-order, depth-first, entries in file-name order. Symbolic links are
/// never followed, and a matched `.dist-info` directory is a leaf.
#[derive(Debug, Clone, Default)]
pub struct FileSystemWalker {
    metadata_reader: MetadataFileReader,
}

impl FileSystemWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata_reader(metadata_reader: MetadataFileReader) -> Self {
        Self { metadata_reader }
    }
}

impl PackageTreeWalker for FileSystemWalker {
    fn walk(&self, request: &WalkRequest) -> Result<RootScan, SoftErrorKind> {
        let root = &request.root;
        if root.as_os_str().is_empty() || !root.is_dir() {
            return Err(SoftErrorKind::MissingRoot { path: root.clone() });
        }

        let mut walk = RootWalk {
            request,
            reader: &self.metadata_reader,
            scan: RootScan::default(),
        };

        // Only directories are yielded; symlinks report their own type and drop out here
        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| {
                entry.file_type().is_dir() && !is_excluded(&request.excluded_subtrees, entry.path())
            });

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(e) => {
                    walk.record_unreadable(e);
                    continue;
                }
            };

            if is_dist_info_dir(entry.path()) {
                entries.skip_current_dir();
                walk.visit_candidate(entry.path());
            }
        }

        tracing::debug!(
            manager = %request.manager,
            root = %root.display(),
            packages = walk.scan.package_count(),
            issues = walk.scan.issues.len(),
            "Finished walking root"
        );
        Ok(walk.scan)
    }
}

/// State of a single root walk
struct RootWalk<'a> {
    request: &'a WalkRequest,
    reader: &'a MetadataFileReader,
    scan: RootScan,
}

impl RootWalk<'_> {
    fn record_unreadable(&mut self, error: walkdir::Error) {
        let path = error
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.request.root.clone());
        let details = match error.io_error() {
            Some(io_error) => io_error.to_string(),
            None => error.to_string(),
        };

        tracing::debug!(dir = %path.display(), error = %details, "Skipping unreadable directory");
        self.scan
            .issues
            .push(SoftErrorKind::UnreadableDirectory { path, details });
    }

    fn visit_candidate(&mut self, dist_info_dir: &Path) {
        let metadata_path = dist_info_dir.join(METADATA_FILE);
        if !metadata_path.is_file() {
            tracing::debug!(dir = %dist_info_dir.display(), "No METADATA file, skipping");
            return;
        }

        let manager = self.request.manager;
        let relative = dist_info_dir
            .strip_prefix(&self.request.root)
            .unwrap_or(dist_info_dir);

        let environment = match self.request.cache_policy.decide(manager, relative) {
            CacheDecision::Skip => {
                tracing::debug!(dir = %dist_info_dir.display(), "Skipping conda package cache entry");
                return;
            }
            CacheDecision::PseudoEnvironment(name) => name.to_string(),
            CacheDecision::Regular => EnvironmentKeyDeriver::derive(manager, dist_info_dir),
        };

        let bucket = VersionBucket::from_path(dist_info_dir);
        if bucket.is_unknown() {
            tracing::debug!(
                dir = %dist_info_dir.display(),
                "No interpreter version in path, filing under '{}'",
                VersionBucket::UNKNOWN
            );
        }

        match self
            .reader
            .read_record(&metadata_path, &self.request.ecosystem)
        {
            Ok(record) => self
                .scan
                .environments
                .entry(environment)
                .or_default()
                .push(bucket, record),
            Err(e) => self.scan.issues.push(SoftErrorKind::MetadataRead {
                path: metadata_path,
                details: format!("{:#}", e),
            }),
        }
    }
}

/// Nested roots are walked on their own, so the enclosing walk prunes them
fn is_excluded(excluded_subtrees: &[PathBuf], dir: &Path) -> bool {
    excluded_subtrees
        .iter()
        .any(|excluded| excluded.as_path() == dir)
}

fn is_dist_info_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DIST_INFO_SUFFIX))
}
