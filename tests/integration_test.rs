/// Integration tests for the inventory scan
/// Exercises the use case through real filesystem adapters and mocked host/conda ports
mod test_utilities;

use site_inventory::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::fixtures::*;
use test_utilities::mocks::*;

fn real_walker_use_case(
    home: &Path,
    conda: MockCondaSource,
    progress: MockProgressReporter,
) -> ScanInventoryUseCase<MockHostEnvironment, MockCondaSource, FileSystemWalker, MockProgressReporter>
{
    ScanInventoryUseCase::new(
        MockHostEnvironment::new(home),
        conda,
        FileSystemWalker::new(),
        progress,
        ScannerConfig::default(),
    )
}

fn names(records: &[PackageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name()).collect()
}

#[tokio::test]
async fn test_pipenv_virtualenv_is_inventoried() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Pipenv], false))
        .await
        .unwrap();

    let pipenv = result.inventory(PackageManager::Pipenv).unwrap();
    assert_eq!(pipenv.environment_names(), vec!["myproj"]);

    let records = pipenv
        .environment("myproj")
        .unwrap()
        .bucket("python3.10")
        .unwrap();
    assert_eq!(names(records), vec!["requests"]);
    assert_eq!(records[0].version(), "2.31.0");
    assert!(!result.has_soft_errors());
}

#[tokio::test]
async fn test_pip_user_site_is_flat() {
    let home = TempDir::new().unwrap();
    install_dist_info(
        home.path(),
        ".local/lib/python3.11/site-packages/six-1.16.0.dist-info",
        "six",
        "1.16.0",
    );
    install_dist_info(
        home.path(),
        ".local/lib/python3.11/site-packages/attrs-23.1.0.dist-info",
        "attrs",
        "23.1.0",
    );

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Pip], false))
        .await
        .unwrap();

    let pip = result.inventory(PackageManager::Pip).unwrap();
    let flat = pip.as_flat().unwrap();
    // Directory entries are visited in name order
    assert_eq!(names(flat.bucket("python3.11").unwrap()), vec!["attrs", "six"]);
}

#[tokio::test]
async fn test_poetry_environment_key_strips_hash_suffix() {
    let home = TempDir::new().unwrap();
    install_dist_info(
        home.path(),
        ".local/share/pypoetry/virtualenvs/webapp-Xy12AbCd-py3.12/lib/python3.12/site-packages/flask-3.0.0.dist-info",
        "Flask",
        "3.0.0",
    );

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Poetry], false))
        .await
        .unwrap();

    let poetry = result.inventory(PackageManager::Poetry).unwrap();
    assert_eq!(poetry.environment_names(), vec!["webapp-Xy12AbCd"]);
    assert_eq!(poetry.package_count(), 1);
}

#[tokio::test]
async fn test_conda_environments_from_registry() {
    let home = TempDir::new().unwrap();
    let base = home.path().join(".conda");
    install_dist_info(
        &base,
        "envs/ds/lib/python3.11/site-packages/numpy-1.26.0.dist-info",
        "numpy",
        "1.26.0",
    );
    install_dist_info(
        &base,
        "lib/python3.11/site-packages/conda-23.7.0.dist-info",
        "conda",
        "23.7.0",
    );
    fs::write(
        base.join("environments.txt"),
        format!(
            "{}\n{}\n",
            base.display(),
            base.join("envs/ds").display()
        ),
    )
    .unwrap();

    let use_case = ScanInventoryUseCase::new(
        MockHostEnvironment::new(home.path()),
        CondaRegistryReader::new(),
        FileSystemWalker::new(),
        MockProgressReporter::new(),
        ScannerConfig::default(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Conda], false))
        .await
        .unwrap();

    let conda = result.inventory(PackageManager::Conda).unwrap();
    // The nested env is walked once, as its own root
    assert_eq!(conda.package_count(), 2);
    assert_eq!(
        names(conda.environment("ds").unwrap().bucket("python3.11").unwrap()),
        vec!["numpy"]
    );
    assert!(!result.has_soft_errors());
}

#[tokio::test]
async fn test_missing_roots_are_soft_errors() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case.execute(ScanRequest::all()).await.unwrap();

    // Every requested manager is present, even without packages
    for manager in PackageManager::ALL {
        assert!(result.inventory(manager).is_some(), "{} missing", manager);
    }
    assert_eq!(result.package_count(), 1);
    assert!(!result.soft_errors_for(PackageManager::Pip).is_empty());
    assert!(!result.soft_errors_for(PackageManager::Poetry).is_empty());
    assert!(!result.soft_errors_for(PackageManager::Conda).is_empty());
    assert!(result.soft_errors_for(PackageManager::Pipenv).is_empty());
}

#[tokio::test]
async fn test_unreadable_metadata_keeps_other_records() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());
    let broken = home.path().join(
        ".local/share/virtualenvs/myproj-AbCdEf12/lib/python3.10/site-packages/broken-1.0.dist-info",
    );
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("METADATA"), "Metadata-Version: 2.1\nVersion: 1.0\n").unwrap();

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Pipenv], false))
        .await
        .unwrap();

    assert_eq!(result.package_count(), 1);
    let errors = result.soft_errors_for(PackageManager::Pipenv);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].cause.code(), "metadata_read");
}

#[tokio::test]
async fn test_conda_roots_merge_in_registry_order() {
    let home = TempDir::new().unwrap();
    // The first root finishes last; the merge must not depend on completion order
    let walker = MockPackageTreeWalker::new()
        .with_record("/conda/a", "shared", "python3.11", "first", "1.0")
        .with_record("/conda/b", "shared", "python3.11", "second", "2.0")
        .with_delay("/conda/a", Duration::from_millis(200));

    let use_case = ScanInventoryUseCase::new(
        MockHostEnvironment::new(home.path()),
        MockCondaSource::with_roots(vec![PathBuf::from("/conda/a"), PathBuf::from("/conda/b")]),
        walker.clone(),
        MockProgressReporter::new(),
        ScannerConfig::default(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Conda], false))
        .await
        .unwrap();

    let conda = result.inventory(PackageManager::Conda).unwrap();
    let bucket = conda.environment("shared").unwrap().bucket("python3.11").unwrap();
    assert_eq!(names(bucket), vec!["first", "second"]);
    assert_eq!(
        walker.walked_roots(),
        vec![PathBuf::from("/conda/a"), PathBuf::from("/conda/b")]
    );
}

#[tokio::test]
async fn test_walker_issues_are_attributed_to_manager() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".local/lib");
    let root_str = root.to_str().unwrap().to_string();
    let walker = MockPackageTreeWalker::new()
        .with_record(&root_str, "pip", "python3.11", "six", "1.16.0")
        .with_issue(
            &root_str,
            SoftErrorKind::UnreadableDirectory {
                path: root.join("locked"),
                details: "Permission denied".to_string(),
            },
        );

    let use_case = ScanInventoryUseCase::new(
        MockHostEnvironment::new(home.path()),
        MockCondaSource::empty(),
        walker,
        MockProgressReporter::new(),
        ScannerConfig::default(),
    );
    let result = use_case
        .execute(ScanRequest::new([PackageManager::Pip], false))
        .await
        .unwrap();

    assert_eq!(result.package_count(), 1);
    let errors = result.soft_errors_for(PackageManager::Pip);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].cause.code(), "unreadable_directory");
}

#[tokio::test]
async fn test_registry_failure_is_soft() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());

    let conda = MockCondaSource::failing(SoftErrorKind::RegistryRead {
        path: home.path().join(".conda/environments.txt"),
        details: "Permission denied".to_string(),
    });
    let use_case = real_walker_use_case(home.path(), conda, MockProgressReporter::new());
    let result = use_case
        .execute(ScanRequest::new(
            [PackageManager::Pipenv, PackageManager::Conda],
            false,
        ))
        .await
        .unwrap();

    assert_eq!(result.package_count(), 1);
    let errors = result.soft_errors_for(PackageManager::Conda);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].cause.code(), "registry_read");
    assert!(result.inventory(PackageManager::Conda).unwrap().is_empty());
}

#[tokio::test]
async fn test_home_directory_unavailable_is_fatal() {
    let use_case = ScanInventoryUseCase::new(
        MockHostEnvironment::without_home(),
        MockCondaSource::empty(),
        MockPackageTreeWalker::new(),
        MockProgressReporter::new(),
        ScannerConfig::default(),
    );

    let err = use_case.execute(ScanRequest::all()).await.unwrap_err();
    assert!(err.to_string().contains("home directory"));
}

#[tokio::test]
async fn test_scan_through_inbound_port() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let port: &dyn InventoryScanPort = &use_case;
    let result = port
        .scan(ScanRequest::new([PackageManager::Pipenv], false))
        .await
        .unwrap();

    assert_eq!(result.package_count(), 1);
}

#[tokio::test]
async fn test_progress_is_reported_per_root() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());
    let progress = MockProgressReporter::new();

    let use_case = real_walker_use_case(home.path(), MockCondaSource::empty(), progress.clone());
    use_case
        .execute(ScanRequest::new(
            [PackageManager::Pip, PackageManager::Pipenv],
            false,
        ))
        .await
        .unwrap();

    assert_eq!(progress.progress_count(), 2);
    let messages = progress.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Progress: 2/2")));
    assert!(messages.last().unwrap().starts_with("Completed:"));
}

#[tokio::test]
async fn test_json_output_shape() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let result = use_case
        .execute(ScanRequest::new(
            [PackageManager::Pip, PackageManager::Pipenv],
            false,
        ))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&result.to_json_pretty().unwrap()).unwrap();
    let record = &json["inventories"]["pipenv"]["myproj"]["python3.10"][0];
    assert_eq!(record["name"], "requests");
    assert_eq!(record["version"], "2.31.0");
    assert_eq!(record["ecosystem"], "PyPI");
    assert_eq!(json["inventories"]["pip"], serde_json::json!({}));
    assert_eq!(json["soft_errors"][0]["manager"], "pip");
    assert_eq!(json["soft_errors"][0]["kind"], "missing_root");
}

#[tokio::test]
async fn test_repeated_scans_are_identical() {
    let home = TempDir::new().unwrap();
    install_pipenv_scenario(home.path());
    install_dist_info(
        home.path(),
        ".local/share/virtualenvs/other-ZZ99yy88/lib/python3.12/site-packages/idna-3.4.dist-info",
        "idna",
        "3.4",
    );

    let use_case = real_walker_use_case(
        home.path(),
        MockCondaSource::empty(),
        MockProgressReporter::new(),
    );
    let request = ScanRequest::new([PackageManager::Pipenv], false);
    let first = use_case.execute(request.clone()).await.unwrap();
    let second = use_case.execute(request).await.unwrap();

    assert_eq!(first.inventories, second.inventories);
    assert_eq!(first.soft_errors, second.soft_errors);
}
