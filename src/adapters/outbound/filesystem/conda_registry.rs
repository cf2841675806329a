use crate::inventory::services::PathResolver;
use crate::ports::outbound::CondaEnvironmentSource;
use crate::shared::error::SoftErrorKind;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// CondaRegistryReader adapter for conda's `environments.txt`
///
/// conda appends one environment prefix per line every time an environment
/// is created, so the file may hold duplicates and blank lines.
pub struct CondaRegistryReader;

impl CondaRegistryReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CondaRegistryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CondaEnvironmentSource for CondaRegistryReader {
    fn list_environments(&self, conda_base: &Path) -> Result<Vec<PathBuf>, SoftErrorKind> {
        if !conda_base.is_dir() {
            tracing::debug!(base = %conda_base.display(), "conda base directory not found");
            return Ok(Vec::new());
        }

        let registry = PathResolver::conda_registry_file(conda_base);
        let bytes = fs::read(&registry).map_err(|e| SoftErrorKind::RegistryRead {
            path: registry.clone(),
            details: e.to_string(),
        })?;
        let content = String::from_utf8(bytes).map_err(|e| SoftErrorKind::RegistryRead {
            path: registry.clone(),
            details: format!("registry is not valid UTF-8: {}", e),
        })?;

        let environments = parse_registry(&content);
        tracing::debug!(
            registry = %registry.display(),
            environments = environments.len(),
            "Read conda environment registry"
        );
        Ok(environments)
    }
}

/// Parses registry content into environment roots
///
/// Trailing whitespace is trimmed, blank lines are skipped and repeated
/// entries keep their first position.
pub fn parse_registry(content: &str) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .filter(|line| seen.insert(*line))
        .map(PathBuf::from)
        .collect()
}
