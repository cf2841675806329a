/// Mock implementations for testing
mod mock_conda_source;
mod mock_host_environment;
mod mock_package_tree_walker;
mod mock_progress_reporter;

pub use mock_conda_source::MockCondaSource;
pub use mock_host_environment::MockHostEnvironment;
pub use mock_package_tree_walker::MockPackageTreeWalker;
pub use mock_progress_reporter::MockProgressReporter;
