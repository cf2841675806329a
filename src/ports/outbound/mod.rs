/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (host, file system, console).
pub mod conda_environment_source;
pub mod host_environment;
pub mod output_presenter;
pub mod package_tree_walker;
pub mod progress_reporter;

pub use conda_environment_source::CondaEnvironmentSource;
pub use host_environment::HostEnvironment;
pub use output_presenter::OutputPresenter;
pub use package_tree_walker::{PackageTreeWalker, RootScan, WalkRequest};
pub use progress_reporter::ProgressReporter;
