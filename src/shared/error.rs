use crate::inventory::domain::PackageManager;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Soft errors never change the exit code; a partial inventory is still a
/// successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan completed (possibly with soft errors)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Fatal application error (home directory, config, output I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal errors. Any of these aborts the scan before a single root is walked.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Could not determine the home directory\n\n💡 Hint: Make sure the HOME environment variable is set")]
    HomeDirectoryUnavailable,

    #[error("Unknown package manager: '{name}'\n\n💡 Hint: Use one of sys, pip, poetry, pipenv, virtualenv, conda")]
    UnknownManager { name: String },

    #[error("Invalid configuration: {field}\nReason: {reason}\n\n💡 Hint: Check the values in your config file")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

/// Cause of a soft error. Each one costs part of the inventory, never the scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoftErrorKind {
    #[error("search root does not exist: {path}")]
    MissingRoot { path: PathBuf },

    #[error("failed to read package metadata {path}: {details}")]
    MetadataRead { path: PathBuf, details: String },

    #[error("failed to read conda environment registry {path}: {details}")]
    RegistryRead { path: PathBuf, details: String },

    #[error("skipped unreadable directory {path}: {details}")]
    UnreadableDirectory { path: PathBuf, details: String },

    #[error("scan of {path} timed out after {timeout_secs}s")]
    RootTimedOut { path: PathBuf, timeout_secs: u64 },

    #[error("scan of {path} aborted: {details}")]
    WalkAborted { path: PathBuf, details: String },
}

impl SoftErrorKind {
    /// Short machine-readable name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            SoftErrorKind::MissingRoot { .. } => "missing_root",
            SoftErrorKind::MetadataRead { .. } => "metadata_read",
            SoftErrorKind::RegistryRead { .. } => "registry_read",
            SoftErrorKind::UnreadableDirectory { .. } => "unreadable_directory",
            SoftErrorKind::RootTimedOut { .. } => "root_timed_out",
            SoftErrorKind::WalkAborted { .. } => "walk_aborted",
        }
    }
}

/// A soft error scoped to the package manager whose contribution it affected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftError {
    pub manager: PackageManager,
    pub cause: SoftErrorKind,
}

impl SoftError {
    pub fn new(manager: PackageManager, cause: SoftErrorKind) -> Self {
        Self { manager, cause }
    }
}

impl fmt::Display for SoftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.manager, self.cause)
    }
}

impl Serialize for SoftError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SoftError", 3)?;
        state.serialize_field("manager", &self.manager)?;
        state.serialize_field("kind", self.cause.code())?;
        state.serialize_field("message", &self.cause.to_string())?;
        state.end()
    }
}
