use crate::inventory::services::DistributionFamily;
use crate::ports::outbound::HostEnvironment;
use std::fs;
use std::path::PathBuf;

/// Standard location of the OS identification file
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// SystemHost adapter - the machine the scanner runs on
pub struct SystemHost {
    os_release_path: PathBuf,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
        }
    }

    pub fn with_os_release_path(os_release_path: PathBuf) -> Self {
        Self { os_release_path }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnvironment for SystemHost {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir().filter(|home| !home.as_os_str().is_empty())
    }

    fn distribution_family(&self) -> DistributionFamily {
        match fs::read_to_string(&self.os_release_path) {
            Ok(content) => {
                let family = DistributionFamily::from_os_release(&content);
                tracing::debug!(?family, path = %self.os_release_path.display(), "Detected distribution family");
                family
            }
            Err(e) => {
                tracing::debug!(
                    path = %self.os_release_path.display(),
                    error = %e,
                    "Cannot read os-release, distribution family unknown"
                );
                DistributionFamily::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_distribution_family_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("os-release");
        fs::write(&path, "ID=fedora\nVERSION_ID=39\n").unwrap();

        let host = SystemHost::with_os_release_path(path);
        assert_eq!(host.distribution_family(), DistributionFamily::RedHat);
    }

    #[test]
    fn test_missing_os_release_is_unknown() {
        let temp_dir = TempDir::new().unwrap();
        let host = SystemHost::with_os_release_path(temp_dir.path().join("os-release"));
        assert_eq!(host.distribution_family(), DistributionFamily::Unknown);
    }
}
