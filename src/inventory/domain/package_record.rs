use crate::shared::Result;
use serde::Serialize;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Ecosystem literal attached to every record, e.g. "PyPI"
///
/// Fixed for the lifetime of a scanner instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ecosystem(String);

impl Ecosystem {
    pub const PYPI: &'static str = "PyPI";

    pub fn new(name: String) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Ecosystem name cannot be empty");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn pypi() -> Self {
        Self(Self::PYPI.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Ecosystem {
    fn default() -> Self {
        Self::pypi()
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a distribution name read from METADATA
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // PEP 508 names: ASCII letters, digits, '-', '_' and '.'
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only ASCII letters, digits, hyphens, underscores and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an installed distribution version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // PEP 440 allows epochs ('!') and local segments ('+'); legacy
        // versions also show up with '_'
        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '!' | '_'))
        {
            anyhow::bail!(
                "Package version '{}' contains invalid characters.",
                version
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One installed distribution, as found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    name: PackageName,
    version: Version,
    ecosystem: Ecosystem,
}

impl PackageRecord {
    pub fn new(name: String, version: String, ecosystem: Ecosystem) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
            ecosystem,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }
}
