use std::fs;
use std::path::{Path, PathBuf};

/// Creates `<root>/<relative>/METADATA` for a distribution
pub fn install_dist_info(root: &Path, relative: &str, name: &str, version: &str) -> PathBuf {
    let dir = root.join(relative);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("METADATA"),
        format!(
            "Metadata-Version: 2.1\nName: {}\nVersion: {}\nSummary: test fixture\n\nName: not-a-header\n",
            name, version
        ),
    )
    .unwrap();
    dir
}

/// Installs `requests 2.31.0` into a pipenv virtualenv under `home`
pub fn install_pipenv_scenario(home: &Path) -> PathBuf {
    install_dist_info(
        home,
        ".local/share/virtualenvs/myproj-AbCdEf12/lib/python3.10/site-packages/requests-2.31.0.dist-info",
        "requests",
        "2.31.0",
    )
}
