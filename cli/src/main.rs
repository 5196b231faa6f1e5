//! Command-line generator and auditor for Yottaflux burn addresses.

mod config;
mod report;

use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use config::BurnToolConfig;
use report::{Report, ReportKind};
use yottaflux_burn::{generate, validate, validate_all, BURN_SPECS, KNOWN_MAINNET_ADDRESSES};
use yottaflux_types::{Network, VersionByte};
use yottaflux_utils::LogFormat;

#[derive(Parser)]
#[command(
    name = "yottaflux-burn",
    about = "Generate and validate Yottaflux Base58Check burn addresses"
)]
struct Cli {
    /// Network whose version byte to use: "mainnet" (78) or "testnet" (111).
    #[arg(long, env = "YFX_BURN_NETWORK")]
    network: Option<Network>,

    /// Explicit version byte; overrides --network and the config file.
    #[arg(long = "version-byte", env = "YFX_BURN_VERSION_BYTE")]
    version_byte: Option<u8>,

    /// Emit reports as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "YFX_BURN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "YFX_BURN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "YFX_BURN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate every burn address in the table and self-validate them.
    Generate,
    /// Validate the burn addresses deployed in the mainnet chain parameters.
    Validate,
    /// Validate arbitrary addresses.
    Check {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Generate a single burn address from an ad-hoc prefix.
    One { prefix: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BurnToolConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BurnToolConfig::default(),
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    yottaflux_utils::init_logging(cli.log_format.unwrap_or(config.log_format), log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let version = config.resolve_version(cli.version_byte, cli.network);
    tracing::debug!(version = version.as_u8(), "resolved version byte");

    let report = match &cli.command {
        Command::Generate => generate_table(&config, version)?,
        Command::Validate => validate_known(version),
        Command::Check { addresses } => {
            let results = validate_all(addresses.iter().map(String::as_str), version);
            let mut report = Report::new(ReportKind::Check, version);
            for (address, result) in addresses.iter().zip(results) {
                report.push(address.as_str(), address.as_str(), result);
            }
            report
        }
        Command::One { prefix } => {
            let address = generate(prefix, version)
                .with_context(|| format!("generating burn address for {prefix:?}"))?;
            let result = validate(address.as_str(), version);
            let mut report = Report::new(ReportKind::Generate, version);
            report.push(prefix.as_str(), address.into_string(), result);
            report
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report.write_json(&mut out)?;
    } else {
        report.write_human(&mut out)?;
    }
    out.flush()?;

    if report.all_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!("one or more addresses failed validation");
        Ok(ExitCode::FAILURE)
    }
}

/// Generate the built-in table plus configured extras. A generated address
/// that fails its own validation is a bug, so it aborts the run.
fn generate_table(config: &BurnToolConfig, version: VersionByte) -> anyhow::Result<Report> {
    let builtin = BURN_SPECS.iter().map(|spec| (spec.param, spec.prefix));
    let extras = config
        .extra_prefixes
        .iter()
        .map(|(name, prefix)| (name.as_str(), prefix.as_str()));

    let mut report = Report::new(ReportKind::Generate, version);
    for (name, prefix) in builtin.chain(extras) {
        let address = generate(prefix, version)
            .with_context(|| format!("generating {name} from prefix {prefix:?}"))?;
        let result = validate(address.as_str(), version);
        if !result.ok {
            bail!("generated address {address} failed validation: {}", result.detail);
        }
        report.push(name, address.into_string(), result);
    }
    tracing::info!(count = report.entries.len(), "generated burn addresses");
    Ok(report)
}

fn validate_known(version: VersionByte) -> Report {
    let mut report = Report::new(ReportKind::Validate, version);
    for (name, address) in KNOWN_MAINNET_ADDRESSES {
        report.push(*name, *address, validate(address, version));
    }
    report
}
