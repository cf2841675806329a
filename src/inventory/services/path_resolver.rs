use crate::inventory::domain::PackageManager;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the user's home directory
pub const HOME_PLACEHOLDER: &str = "{home}";

/// File inside the conda base directory listing every environment root
pub const CONDA_REGISTRY_FILE: &str = "environments.txt";

const DEFAULT_PIP_TEMPLATE: &str = "{home}/.local/lib";
const DEFAULT_POETRY_TEMPLATE: &str = "{home}/.local/share/pypoetry";
const DEFAULT_PIPENV_TEMPLATE: &str = "{home}/.local/share/virtualenvs";
const DEFAULT_CONDA_TEMPLATE: &str = "{home}/.conda";
const DEFAULT_DEBIAN_SYSTEM_ROOT: &str = "/usr/lib";
const DEFAULT_REDHAT_SYSTEM_ROOT: &str = "/usr/lib64";

/// Coarse OS distribution family, used only to pick the system library root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionFamily {
    Debian,
    RedHat,
    Unknown,
}

impl DistributionFamily {
    /// Classifies a single os-release identifier (`ID` or one `ID_LIKE` word)
    fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "debian" | "ubuntu" | "linuxmint" | "pop" | "raspbian" | "kali" => {
                DistributionFamily::Debian
            }
            "rhel" | "redhat" | "centos" | "fedora" | "rocky" | "almalinux" | "ol" | "amzn" => {
                DistributionFamily::RedHat
            }
            _ => DistributionFamily::Unknown,
        }
    }

    /// Classifies the contents of an `/etc/os-release` file
    ///
    /// `ID` is checked first, then every word of `ID_LIKE`.
    pub fn from_os_release(content: &str) -> Self {
        let mut id = None;
        let mut id_like = None;

        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            match key.trim() {
                "ID" => id = Some(value.to_string()),
                "ID_LIKE" => id_like = Some(value.to_string()),
                _ => {}
            }
        }

        let candidates = id
            .iter()
            .map(String::as_str)
            .chain(id_like.iter().flat_map(|like| like.split_whitespace()));

        for candidate in candidates {
            let family = Self::from_id(candidate);
            if family != DistributionFamily::Unknown {
                return family;
            }
        }
        DistributionFamily::Unknown
    }
}

/// Root path templates for every manager
///
/// Templates may contain [`HOME_PLACEHOLDER`]; absolute paths are used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplates {
    pub pip: String,
    pub poetry: String,
    pub pipenv: String,
    pub conda: String,
    pub system_debian: String,
    pub system_redhat: String,
}

impl Default for PathTemplates {
    fn default() -> Self {
        Self {
            pip: DEFAULT_PIP_TEMPLATE.to_string(),
            poetry: DEFAULT_POETRY_TEMPLATE.to_string(),
            pipenv: DEFAULT_PIPENV_TEMPLATE.to_string(),
            conda: DEFAULT_CONDA_TEMPLATE.to_string(),
            system_debian: DEFAULT_DEBIAN_SYSTEM_ROOT.to_string(),
            system_redhat: DEFAULT_REDHAT_SYSTEM_ROOT.to_string(),
        }
    }
}

/// PathResolver - builds the search root of each manager
///
/// Pure: the home directory and distribution family are passed in, so the
/// same inputs always give the same roots.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    templates: PathTemplates,
}

impl PathResolver {
    pub fn new(templates: PathTemplates) -> Self {
        Self { templates }
    }

    /// Resolves the root for `manager`
    ///
    /// For conda this is the base directory holding the environment
    /// registry, not an environment root.
    ///
    /// # Returns
    /// `None` when the manager has no root on this host (system scan on an
    /// unknown distribution family, or an empty template)
    pub fn root_for(
        &self,
        manager: PackageManager,
        home: &Path,
        family: DistributionFamily,
    ) -> Option<PathBuf> {
        let template = match manager {
            PackageManager::System => match family {
                DistributionFamily::Debian => &self.templates.system_debian,
                DistributionFamily::RedHat => &self.templates.system_redhat,
                DistributionFamily::Unknown => return None,
            },
            PackageManager::Pip => &self.templates.pip,
            PackageManager::Poetry => &self.templates.poetry,
            PackageManager::Pipenv => &self.templates.pipenv,
            PackageManager::Conda => &self.templates.conda,
        };

        render_template(template, home)
    }

    /// Location of the conda environment registry inside `conda_base`
    pub fn conda_registry_file(conda_base: &Path) -> PathBuf {
        conda_base.join(CONDA_REGISTRY_FILE)
    }

    pub fn templates(&self) -> &PathTemplates {
        &self.templates
    }
}

/// Substitutes [`HOME_PLACEHOLDER`] in `template`
///
/// A leading placeholder is joined onto `home` component-wise so non-UTF-8
/// home directories survive intact.
fn render_template(template: &str, home: &Path) -> Option<PathBuf> {
    let template = template.trim();
    if template.is_empty() {
        return None;
    }

    if let Some(rest) = template.strip_prefix(HOME_PLACEHOLDER) {
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() {
            return Some(home.to_path_buf());
        }
        return Some(home.join(rest));
    }

    Some(PathBuf::from(
        template.replace(HOME_PLACEHOLDER, &home.to_string_lossy()),
    ))
}
