//! Configuration file support for site-inventory.
//!
//! Provides YAML-based configuration through `site-inventory.config.yml`
//! files, including data structures, file loading, validation and the
//! conversion into an immutable [`ScannerConfig`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::application::ScannerConfig;
use crate::inventory::domain::{Ecosystem, PackageManager};
use crate::inventory::policies::PackageCachePolicy;
use crate::inventory::services::PathTemplates;
use crate::shared::error::InventoryError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "site-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub ecosystem: Option<String>,
    pub managers: Option<Vec<String>>,
    pub root_timeout_secs: Option<u64>,
    pub conda_package_cache: Option<String>,
    pub paths: Option<PathsConfig>,
    pub system_roots: Option<SystemRootsConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Root templates of the per-user managers; `{home}` is substituted.
#[derive(Debug, Deserialize, Default)]
pub struct PathsConfig {
    pub pip: Option<String>,
    pub poetry: Option<String>,
    pub pipenv: Option<String>,
    pub conda: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// System interpreter library roots per distribution family.
#[derive(Debug, Deserialize, Default)]
pub struct SystemRootsConfig {
    pub debian: Option<String>,
    pub redhat: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Managers listed in the file, if any
    pub fn managers(&self) -> Result<Option<Vec<PackageManager>>> {
        let Some(names) = &self.managers else {
            return Ok(None);
        };
        let managers = names
            .iter()
            .map(|name| name.parse::<PackageManager>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Some(managers))
    }

    /// Applies the file on top of the built-in defaults
    pub fn to_scanner_config(&self) -> Result<ScannerConfig> {
        let mut config = ScannerConfig::default();

        if let Some(ecosystem) = &self.ecosystem {
            config = config.with_ecosystem(Ecosystem::new(ecosystem.clone())?);
        }
        if let Some(secs) = self.root_timeout_secs {
            config = config.with_root_timeout(Duration::from_secs(secs));
        }
        if let Some(policy) = &self.conda_package_cache {
            config = config.with_cache_policy(policy.parse::<PackageCachePolicy>()?);
        }

        let mut templates = PathTemplates::default();
        if let Some(paths) = &self.paths {
            override_with(&mut templates.pip, &paths.pip);
            override_with(&mut templates.poetry, &paths.poetry);
            override_with(&mut templates.pipenv, &paths.pipenv);
            override_with(&mut templates.conda, &paths.conda);
        }
        if let Some(roots) = &self.system_roots {
            override_with(&mut templates.system_debian, &roots.debian);
            override_with(&mut templates.system_redhat, &roots.redhat);
        }

        Ok(config.with_templates(templates))
    }
}

fn override_with(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(field: &str, reason: impl Into<String>) -> anyhow::Error {
    InventoryError::InvalidConfig {
        field: field.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ecosystem) = &config.ecosystem {
        if ecosystem.trim().is_empty() {
            return Err(invalid("ecosystem", "must not be empty"));
        }
    }

    if let Some(names) = &config.managers {
        for (i, name) in names.iter().enumerate() {
            if name.parse::<PackageManager>().is_err() {
                return Err(invalid(
                    &format!("managers[{}]", i),
                    format!(
                        "'{}' is not one of: sys, system, pip, poetry, pipenv, virtualenv, conda",
                        name
                    ),
                ));
            }
        }
    }

    if config.root_timeout_secs == Some(0) {
        return Err(invalid("root_timeout_secs", "must be greater than zero"));
    }

    if let Some(policy) = &config.conda_package_cache {
        policy.parse::<PackageCachePolicy>()?;
    }

    let path_fields = config.paths.iter().flat_map(|paths| {
        [
            ("paths.pip", &paths.pip),
            ("paths.poetry", &paths.poetry),
            ("paths.pipenv", &paths.pipenv),
            ("paths.conda", &paths.conda),
        ]
    });
    let root_fields = config.system_roots.iter().flat_map(|roots| {
        [
            ("system_roots.debian", &roots.debian),
            ("system_roots.redhat", &roots.redhat),
        ]
    });
    for (field, value) in path_fields.chain(root_fields) {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(invalid(field, "must not be empty"));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let nested = config
        .paths
        .iter()
        .flat_map(|paths| paths.unknown_fields.keys().map(|key| format!("paths.{}", key)))
        .chain(config.system_roots.iter().flat_map(|roots| {
            roots
                .unknown_fields
                .keys()
                .map(|key| format!("system_roots.{}", key))
        }));

    for key in config.unknown_fields.keys().cloned().chain(nested) {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}
