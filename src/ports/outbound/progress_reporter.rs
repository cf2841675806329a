/// ProgressReporter port for reporting progress during a scan
///
/// This port abstracts progress reporting (e.g., to stderr). Roots complete
/// on worker threads in any order, so implementations must be `Send + Sync`.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a counter
    ///
    /// # Arguments
    /// * `current` - Number of completed roots
    /// * `total` - Total number of roots in the scan plan
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the scan
    fn report_completion(&self, message: &str);
}
