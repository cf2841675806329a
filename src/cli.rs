use clap::Parser;
use site_inventory::inventory::domain::PackageManager;
use std::path::PathBuf;

fn parse_manager(value: &str) -> Result<PackageManager, String> {
    value.parse::<PackageManager>().map_err(|_| {
        format!(
            "unknown package manager '{}' (expected one of: sys, system, pip, poetry, pipenv, virtualenv, conda)",
            value
        )
    })
}

/// Inventory the Python packages installed on this machine
#[derive(Parser, Debug)]
#[command(name = "site-inventory")]
#[command(version)]
#[command(
    about = "Inventory installed Python packages per package manager, environment and interpreter",
    long_about = None
)]
pub struct Args {
    /// Package manager to scan: sys, pip, poetry, pipenv (alias virtualenv) or conda.
    /// Can be specified multiple times: -m pip -m conda
    #[arg(short, long = "manager", value_name = "NAME", value_parser = parse_manager)]
    pub managers: Vec<PackageManager>,

    /// Scan every supported package manager
    #[arg(short, long)]
    pub all: bool,

    /// Config file (defaults to site-inventory.config.yml in the current directory, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Per-root scan timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
