use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogConfig};
use crate::demos::{get_max, print_line};
use crate::trampoline::TrampolineStats;

#[derive(Parser)]
#[command(name = "stackless")]
#[command(about = "Stackless - run deep recursion on a heap-allocated frame stack", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Maximum call stack depth (overrides config file and env vars)
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Log frames that return before yielding their nested calls instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Print executor statistics as JSON after the run
    #[arg(long, global = true)]
    pub stats: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Maximum of a list, computed natively and on the trampoline
    Max {
        /// Values to scan
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print a line N times, natively and on the trampoline
    Print {
        /// Number of lines per variant
        #[arg(short = 't', long = "times", default_value = "3")]
        times: usize,
    },

    /// Run the trampolined maximum at a depth native recursion cannot reach
    Deep {
        /// Number of nested frames
        #[arg(long, default_value = "1000000")]
        depth: usize,
    },

    /// Show the effective configuration
    Config,
}

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

fn run_cli_with_args(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration before running anything so config errors surface first
    let config = load_config(&cli, true)?;
    init_tracing(&config.log);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Build the effective configuration for a parsed command line
pub fn load_config(cli: &Cli, read_env: bool) -> Result<Config> {
    Config::builder()
        .config_path(cli.config.as_ref().map(PathBuf::from))
        .max_depth(cli.max_depth)
        .strict(cli.lenient.then_some(false))
        .read_env(read_env)
        .build()
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute a parsed command, writing its output to `out`
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    match &cli.command {
        Commands::Max { values } => {
            let entry = get_max::max_entrypoint(values, config.trampoline.clone());
            let framed = entry.run(0).context("Trampolined maximum failed")?;

            writeln!(out, "native:     {}", get_max::native_get_max(values, 0))?;
            writeln!(out, "trampoline: {}", framed)?;
            write_stats(cli, out, entry.stats())?;
        }

        Commands::Print { times } => {
            print_line::native_print_line(out, *times)?;

            let shared = RefCell::new(&mut *out);
            let entry = print_line::print_entrypoint(&shared, config.trampoline.clone());
            entry.run(*times).context("Trampolined print failed")?;
            let stats = entry.stats();
            drop(entry);

            write_stats(cli, out, stats)?;
        }

        Commands::Deep { depth } => {
            let values: Vec<i64> = (0..*depth as i64).collect();
            let entry = get_max::max_entrypoint(&values, config.trampoline.clone());
            let max = entry
                .run(0)
                .with_context(|| format!("Trampolined maximum over {} frames failed", depth))?;

            writeln!(out, "✓ maximum over {} nested frames: {}", depth, max)?;
            write_stats(cli, out, entry.stats())?;
        }

        Commands::Config => {
            write!(out, "{}", config.to_toml_string()?)?;
        }
    }

    Ok(())
}

fn write_stats<W: Write>(cli: &Cli, out: &mut W, stats: TrampolineStats) -> Result<()> {
    if cli.stats {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    }
    Ok(())
}
