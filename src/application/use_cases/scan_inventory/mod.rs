use crate::application::dto::{ScanRequest, ScanResult};
use crate::application::ScannerConfig;
use crate::inventory::domain::{EnvironmentMap, ManagerInventory, PackageManager, ScanMetadata};
use crate::inventory::services::{DistributionFamily, PathResolver, ResultAggregator};
use crate::ports::inbound::InventoryScanPort;
use crate::ports::outbound::{
    CondaEnvironmentSource, HostEnvironment, PackageTreeWalker, ProgressReporter, RootScan,
    WalkRequest,
};
use crate::shared::error::{InventoryError, SoftError, SoftErrorKind};
use crate::shared::Result;
use async_trait::async_trait;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Roots and up-front soft errors of one manager
#[derive(Debug)]
struct ManagerPlan {
    manager: PackageManager,
    planning_errors: Vec<SoftErrorKind>,
    walks: Vec<WalkRequest>,
}

impl ManagerPlan {
    fn new(manager: PackageManager) -> Self {
        Self {
            manager,
            planning_errors: Vec::new(),
            walks: Vec::new(),
        }
    }
}

type WalkOutcome = std::result::Result<RootScan, SoftErrorKind>;

/// ScanInventoryUseCase - Core use case for inventory scans
///
/// Resolves the roots of every requested manager, walks all roots in
/// parallel on blocking worker threads, then reduces the per-root results
/// in plan order on a single task.
///
/// # Type Parameters
/// * `H` - HostEnvironment implementation
/// * `C` - CondaEnvironmentSource implementation
/// * `W` - PackageTreeWalker implementation
/// * `P` - ProgressReporter implementation
pub struct ScanInventoryUseCase<H, C, W, P> {
    host: H,
    conda_source: C,
    walker: Arc<W>,
    progress_reporter: P,
    resolver: PathResolver,
    config: ScannerConfig,
}

impl<H, C, W, P> ScanInventoryUseCase<H, C, W, P>
where
    H: HostEnvironment,
    C: CondaEnvironmentSource,
    W: PackageTreeWalker + 'static,
    P: ProgressReporter,
{
    /// Creates a new ScanInventoryUseCase with injected dependencies
    pub fn new(host: H, conda_source: C, walker: W, progress_reporter: P, config: ScannerConfig) -> Self {
        Self {
            host,
            conda_source,
            walker: Arc::new(walker),
            progress_reporter,
            resolver: PathResolver::new(config.templates.clone()),
            config,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Fails only when the home directory cannot be determined; this is
    /// checked before any root is walked.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResult> {
        let managers = request.managers();

        // Step 1: Resolve the home directory (fatal if unknown)
        let home = self
            .host
            .home_dir()
            .ok_or(InventoryError::HomeDirectoryUnavailable)?;
        tracing::debug!(home = %home.display(), managers = ?managers, "Starting inventory scan");

        // Step 2: Plan roots per manager
        let plans = self.plan(&managers, &home);

        // Step 3: Walk every root in parallel
        let outcomes = self.walk_all(&plans).await;

        // Step 4: Reduce in plan order
        let result = self.reduce(plans, outcomes);

        tracing::info!(
            managers = managers.len(),
            packages = result.package_count(),
            soft_errors = result.soft_errors.len(),
            "Inventory scan finished"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} package(s) across {} package manager(s)",
            result.package_count(),
            managers.len()
        ));

        Ok(result)
    }

    fn plan(&self, managers: &[PackageManager], home: &Path) -> Vec<ManagerPlan> {
        let needs_family = managers.contains(&PackageManager::System);
        let family = if needs_family {
            self.host.distribution_family()
        } else {
            DistributionFamily::Unknown
        };

        managers
            .iter()
            .map(|&manager| match manager {
                PackageManager::Conda => self.plan_conda(home, family),
                _ => self.plan_single_root(manager, home, family),
            })
            .collect()
    }

    fn plan_single_root(
        &self,
        manager: PackageManager,
        home: &Path,
        family: DistributionFamily,
    ) -> ManagerPlan {
        let mut plan = ManagerPlan::new(manager);
        match self.resolver.root_for(manager, home, family) {
            Some(root) => plan.walks.push(self.walk_request(manager, root, Vec::new())),
            None => {
                tracing::debug!(%manager, ?family, "No search root for this host");
                plan.planning_errors.push(SoftErrorKind::MissingRoot {
                    path: PathBuf::new(),
                });
            }
        }
        plan
    }

    fn plan_conda(&self, home: &Path, family: DistributionFamily) -> ManagerPlan {
        let mut plan = ManagerPlan::new(PackageManager::Conda);
        let Some(base) = self.resolver.root_for(PackageManager::Conda, home, family) else {
            plan.planning_errors.push(SoftErrorKind::MissingRoot {
                path: PathBuf::new(),
            });
            return plan;
        };

        let roots = match self.conda_source.list_environments(&base) {
            Ok(roots) => roots,
            Err(cause) => {
                tracing::warn!(base = %base.display(), error = %cause, "Cannot list conda environments");
                plan.planning_errors.push(cause);
                return plan;
            }
        };

        if roots.is_empty() {
            plan.planning_errors
                .push(SoftErrorKind::MissingRoot { path: base });
            return plan;
        }

        for root in &roots {
            let nested = nested_roots(root, &roots);
            plan.walks
                .push(self.walk_request(PackageManager::Conda, root.clone(), nested));
        }
        plan
    }

    fn walk_request(
        &self,
        manager: PackageManager,
        root: PathBuf,
        excluded_subtrees: Vec<PathBuf>,
    ) -> WalkRequest {
        WalkRequest::new(
            manager,
            root,
            self.config.ecosystem.clone(),
            self.config.cache_policy,
        )
        .with_excluded_subtrees(excluded_subtrees)
    }

    /// Runs every planned walk; outcomes come back in plan order
    async fn walk_all(&self, plans: &[ManagerPlan]) -> Vec<WalkOutcome> {
        let total: usize = plans.iter().map(|plan| plan.walks.len()).sum();
        if total == 0 {
            return Vec::new();
        }

        self.progress_reporter
            .report(&format!("🔍 Scanning {} root(s)...", total));

        let timeout = self.config.root_timeout;
        let completed = AtomicUsize::new(0);
        let completed = &completed;

        let walks = plans.iter().flat_map(|plan| plan.walks.iter()).map(|walk| {
            let walker = Arc::clone(&self.walker);
            let walk = walk.clone();
            async move {
                let manager = walk.manager;
                let root = walk.root.clone();
                let handle = tokio::task::spawn_blocking(move || walker.walk(&walk));

                let outcome = match tokio::time::timeout(timeout, handle).await {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(join_error)) => {
                        tracing::warn!(%manager, root = %root.display(), error = %join_error, "Walk aborted");
                        Err(SoftErrorKind::WalkAborted {
                            path: root.clone(),
                            details: join_error.to_string(),
                        })
                    }
                    Err(_) => {
                        tracing::warn!(%manager, root = %root.display(), ?timeout, "Walk timed out");
                        Err(SoftErrorKind::RootTimedOut {
                            path: root.clone(),
                            timeout_secs: timeout.as_secs(),
                        })
                    }
                };

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                let label = format!("{} {}", manager, root.display());
                self.progress_reporter
                    .report_progress(done, total, Some(label.as_str()));
                outcome
            }
        });

        join_all(walks).await
    }

    fn reduce(&self, plans: Vec<ManagerPlan>, outcomes: Vec<WalkOutcome>) -> ScanResult {
        let mut result = ScanResult::new(ScanMetadata::generate());
        let mut outcomes = outcomes.into_iter();

        for plan in plans {
            let manager = plan.manager;
            for cause in plan.planning_errors {
                result.soft_errors.push(SoftError::new(manager, cause));
            }

            let mut scans: Vec<EnvironmentMap> = Vec::with_capacity(plan.walks.len());
            for _ in &plan.walks {
                match outcomes.next() {
                    Some(Ok(scan)) => {
                        result.soft_errors.extend(
                            scan.issues
                                .into_iter()
                                .map(|cause| SoftError::new(manager, cause)),
                        );
                        scans.push(scan.environments);
                    }
                    Some(Err(cause)) => result.soft_errors.push(SoftError::new(manager, cause)),
                    None => break,
                }
            }

            let merged = ResultAggregator::merge(scans);
            result
                .inventories
                .insert(manager, ManagerInventory::from_environments(manager, merged));
        }

        result
    }
}

#[async_trait]
impl<H, C, W, P> InventoryScanPort for ScanInventoryUseCase<H, C, W, P>
where
    H: HostEnvironment,
    C: CondaEnvironmentSource,
    W: PackageTreeWalker + 'static,
    P: ProgressReporter,
{
    async fn scan(&self, request: ScanRequest) -> Result<ScanResult> {
        self.execute(request).await
    }
}

/// Registered roots strictly below `root`
///
/// Each is walked as a root of its own, so the enclosing walk skips it.
fn nested_roots(root: &Path, roots: &[PathBuf]) -> Vec<PathBuf> {
    roots
        .iter()
        .filter(|other| other.as_path() != root && other.starts_with(root))
        .cloned()
        .collect()
}
