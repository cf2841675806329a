use crate::shared::error::InventoryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Python packaging tool whose installations are inventoried
///
/// `virtualenv` is accepted as an alias of [`PackageManager::Pipenv`]: both
/// place their environments under the same root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PackageManager {
    #[serde(rename = "sys")]
    System,
    #[serde(rename = "pip")]
    Pip,
    #[serde(rename = "poetry")]
    Poetry,
    #[serde(rename = "pipenv")]
    Pipenv,
    #[serde(rename = "conda")]
    Conda,
}

impl PackageManager {
    /// Every supported manager, in scan order
    pub const ALL: [PackageManager; 5] = [
        PackageManager::System,
        PackageManager::Pip,
        PackageManager::Poetry,
        PackageManager::Pipenv,
        PackageManager::Conda,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::System => "sys",
            PackageManager::Pip => "pip",
            PackageManager::Poetry => "poetry",
            PackageManager::Pipenv => "pipenv",
            PackageManager::Conda => "conda",
        }
    }

    /// Whether installations are split into named per-project environments
    ///
    /// System and pip have exactly one implicit environment.
    pub fn has_named_environments(&self) -> bool {
        !matches!(self, PackageManager::System | PackageManager::Pip)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sys" | "system" => Ok(PackageManager::System),
            "pip" => Ok(PackageManager::Pip),
            "poetry" => Ok(PackageManager::Poetry),
            "pipenv" | "virtualenv" => Ok(PackageManager::Pipenv),
            "conda" => Ok(PackageManager::Conda),
            _ => Err(InventoryError::UnknownManager {
                name: s.to_string(),
            }),
        }
    }
}
