use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use ipclass_analyzer::{parse_mask, prefix_len, Analyzer, AnalyzerConfig, BroadcastPolicy};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod output;

/// Classful IPv4 summary: inferred mask, CIDR range, broadcast and binary form
#[derive(Parser)]
#[command(name = "ipclass")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Broadcast reporting for class D/E addresses (overrides IPCLASS_NA_BROADCAST)
    #[arg(long, value_enum, global = true)]
    na_broadcast: Option<NaBroadcast>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a dotted-decimal IPv4 address
    Analyze(AnalyzeArgs),
    /// Derive the CIDR prefix length of a dotted-decimal subnet mask
    Prefix(PrefixArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// IPv4 address, e.g. 192.168.1.1
    #[arg(value_name = "ADDRESS")]
    address: String,
}

#[derive(Parser)]
struct PrefixArgs {
    /// Subnet mask, e.g. 255.255.255.0
    #[arg(value_name = "MASK")]
    mask: String,
}

#[derive(Debug, Clone, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable labelled output
    Human,
    /// JSON output (pretty-printed)
    Json,
    /// JSON output (compact)
    JsonCompact,
    /// CSV output
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NaBroadcast {
    /// Report N/A
    Suppress,
    /// Report the address itself
    Address,
}

impl From<NaBroadcast> for BroadcastPolicy {
    fn from(value: NaBroadcast) -> Self {
        match value {
            NaBroadcast::Suppress => BroadcastPolicy::Suppress,
            NaBroadcast::Address => BroadcastPolicy::Address,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ok = match cli.command {
        Commands::Analyze(args) => {
            let config = load_config(cli.na_broadcast)?;
            handle_analyze(&mut out, args, config, &cli.output, cli.verbose)?
        }
        Commands::Prefix(args) => handle_prefix(&mut out, args, &cli.output, cli.verbose)?,
    };
    out.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// The flag wins; the environment is only read without it.
fn load_config(na_broadcast: Option<NaBroadcast>) -> Result<AnalyzerConfig> {
    match na_broadcast {
        Some(policy) => Ok(AnalyzerConfig::default().with_na_broadcast(policy.into())),
        None => Ok(AnalyzerConfig::from_env()?),
    }
}

fn handle_analyze<W: Write>(
    out: &mut W,
    args: AnalyzeArgs,
    config: AnalyzerConfig,
    format: &OutputFormat,
    verbose: bool,
) -> Result<bool> {
    if verbose {
        eprintln!("{} Analyzing: {}", "›".blue(), args.address);
    }

    let analyzer = Analyzer::new(config);
    let ok = match analyzer.analyze(&args.address) {
        Ok(result) => {
            output::write_analysis(out, &result, format)?;
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "analysis rejected");
            output::write_error(out, &args.address, &err, format)?;
            false
        }
    };
    Ok(ok)
}

fn handle_prefix<W: Write>(
    out: &mut W,
    args: PrefixArgs,
    format: &OutputFormat,
    verbose: bool,
) -> Result<bool> {
    if verbose {
        eprintln!("{} Deriving prefix length of: {}", "›".blue(), args.mask);
    }

    let ok = match parse_mask(&args.mask) {
        Ok(mask) => {
            output::write_prefix(out, &mask, prefix_len(&mask), format)?;
            true
        }
        Err(err) => {
            output::write_error(out, &args.mask, &err, format)?;
            false
        }
    };
    Ok(ok)
}
