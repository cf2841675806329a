mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use site_inventory::adapters::outbound::console::StderrProgressReporter;
use site_inventory::adapters::outbound::filesystem::{
    CondaRegistryReader, FileSystemWalker, FileSystemWriter, StdoutPresenter,
};
use site_inventory::adapters::outbound::system::SystemHost;
use site_inventory::application::dto::{ScanRequest, ScanResult};
use site_inventory::application::use_cases::ScanInventoryUseCase;
use site_inventory::application::ScannerConfig;
use site_inventory::config::{discover_config, load_config_from_path, ConfigFile};
use site_inventory::ports::inbound::InventoryScanPort;
use site_inventory::ports::outbound::OutputPresenter;
use site_inventory::shared::error::ExitCode;
use site_inventory::shared::Result;
use std::process;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("site_inventory=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("site_inventory=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments, 0 on --help/--version
    let args = Args::parse_args();
    init_tracing(args.debug);

    tracing::debug!("site-inventory starting with args: {:?}", args);

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    // Exit explicitly so walks still running past their timeout do not hold the process
    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    // Load config file (explicit path or auto-discovery)
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let scanner_config = build_scanner_config(config_file.as_ref(), args.timeout)?;
    let request = build_request(&args, config_file.as_ref())?;

    // Create adapters (Dependency Injection)
    let use_case = ScanInventoryUseCase::new(
        SystemHost::new(),
        CondaRegistryReader::new(),
        FileSystemWalker::new(),
        StderrProgressReporter::new(),
        scanner_config,
    );

    let result = use_case.scan(request).await?;
    report_soft_errors(&result);

    let mut content = result.to_json_pretty()?;
    content.push('\n');

    // Present output
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&content)?;

    Ok(())
}

/// Merges config file values with CLI overrides
fn build_scanner_config(config_file: Option<&ConfigFile>, timeout: Option<u64>) -> Result<ScannerConfig> {
    let config = match config_file {
        Some(file) => file.to_scanner_config()?,
        None => ScannerConfig::default(),
    };

    Ok(match timeout {
        Some(secs) => config.with_root_timeout(Duration::from_secs(secs)),
        None => config,
    })
}

/// `--all` wins, then `-m`, then the config file's `managers`, then everything
fn build_request(args: &Args, config_file: Option<&ConfigFile>) -> Result<ScanRequest> {
    if args.all {
        return Ok(ScanRequest::all());
    }
    if !args.managers.is_empty() {
        return Ok(ScanRequest::new(args.managers.iter().copied(), false));
    }
    if let Some(file) = config_file {
        if let Some(managers) = file.managers()? {
            return Ok(ScanRequest::new(managers, false));
        }
    }
    Ok(ScanRequest::all())
}

fn report_soft_errors(result: &ScanResult) {
    if !result.has_soft_errors() {
        return;
    }

    eprintln!(
        "{}",
        format!(
            "⚠️  {} part(s) of the inventory could not be scanned:",
            result.soft_errors.len()
        )
        .yellow()
    );
    for error in &result.soft_errors {
        eprintln!("   {} {}", format!("[{}]", error.manager).yellow(), error.cause);
    }
}
