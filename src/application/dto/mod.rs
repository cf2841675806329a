/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod scan_request;
mod scan_result;

pub use scan_request::ScanRequest;
pub use scan_result::ScanResult;
