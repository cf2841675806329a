use crate::inventory::domain::version_bucket::is_interpreter_dir;
use crate::inventory::domain::PackageManager;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Key used when no environment can be derived from a path
pub const UNKNOWN_ENVIRONMENT: &str = "unknown";

/// Directory that holds named conda environments
pub const CONDA_ENVS_MARKER: &str = "envs";

const LIBRARY_DIRS: [&str; 3] = ["lib", "lib64", "Lib"];
const SITE_PACKAGES_DIR: &str = "site-packages";

/// EnvironmentKeyDeriver - maps a metadata directory path to an environment key
///
/// A pure function of the path: no filesystem access, so the same path
/// always yields the same key.
pub struct EnvironmentKeyDeriver;

impl EnvironmentKeyDeriver {
    /// Derives the environment key for a `.dist-info` directory
    ///
    /// - `sys`, `pip`: the tool name
    /// - `poetry`, `pipenv`: the environment directory name without its
    ///   trailing `-<suffix>` token
    /// - `conda`: the name after `envs/`, otherwise the environment prefix
    pub fn derive(manager: PackageManager, dist_info_dir: &Path) -> String {
        match manager {
            PackageManager::System | PackageManager::Pip => manager.as_str().to_string(),
            PackageManager::Poetry | PackageManager::Pipenv => Self::project_key(dist_info_dir),
            PackageManager::Conda => Self::conda_key(dist_info_dir),
        }
    }

    fn project_key(dist_info_dir: &Path) -> String {
        let components: Vec<Component> = dist_info_dir.components().collect();
        match library_segment_index(&components) {
            Some(index) if index > 0 => match components[index - 1] {
                Component::Normal(name) => strip_opaque_suffix(&name.to_string_lossy()),
                _ => UNKNOWN_ENVIRONMENT.to_string(),
            },
            _ => UNKNOWN_ENVIRONMENT.to_string(),
        }
    }

    fn conda_key(dist_info_dir: &Path) -> String {
        let components: Vec<Component> = dist_info_dir.components().collect();
        let library_index = library_segment_index(&components);

        // The marker and the name after it must sit above the library segment
        let limit = library_index.unwrap_or(components.len().saturating_sub(1));
        let marker = (0..limit.saturating_sub(1))
            .rev()
            .find(|&i| matches!(components[i], Component::Normal(name) if name == CONDA_ENVS_MARKER));

        if let Some(marker) = marker {
            if let Component::Normal(name) = components[marker + 1] {
                return name.to_string_lossy().into_owned();
            }
        }

        match library_index {
            Some(index) if index > 0 => {
                let prefix: PathBuf = components[..index].iter().collect();
                prefix.to_string_lossy().into_owned()
            }
            _ => UNKNOWN_ENVIRONMENT.to_string(),
        }
    }
}

/// Index of the interpreter-library segment in `components`
///
/// The deepest `lib`/`lib64`/`Lib` component followed by an interpreter
/// directory or by `site-packages`. The last component (the metadata
/// directory itself) never counts as the follower.
pub fn library_segment_index(components: &[Component]) -> Option<usize> {
    if components.len() < 3 {
        return None;
    }

    (0..components.len() - 2).rev().find(|&i| {
        let Component::Normal(name) = components[i] else {
            return false;
        };
        let Component::Normal(next) = components[i + 1] else {
            return false;
        };
        is_library_dir(name) && is_library_child(next)
    })
}

fn is_library_dir(name: &OsStr) -> bool {
    LIBRARY_DIRS.iter().any(|dir| name == *dir)
}

fn is_library_child(name: &OsStr) -> bool {
    name == SITE_PACKAGES_DIR || name.to_str().is_some_and(is_interpreter_dir)
}

/// Drops the last hyphen-delimited token of an environment directory name
///
/// `myproj-AbCdEf12` becomes `myproj`, `my-proj-AbCdEf12` becomes `my-proj`.
/// A name without a hyphen, or with nothing before its last hyphen, is kept
/// whole.
pub fn strip_opaque_suffix(name: &str) -> String {
    match name.rsplit_once('-') {
        Some((project, _)) if !project.is_empty() => project.to_string(),
        _ => name.to_string(),
    }
}
