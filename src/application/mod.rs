/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod scanner_config;
pub mod use_cases;

pub use scanner_config::{ScannerConfig, DEFAULT_ROOT_TIMEOUT_SECS};
