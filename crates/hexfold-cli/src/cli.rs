use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "HexFold Developers",
    version,
    about = "HexFold CLI - Lay out, score and survey the folding kinetics of monomer chains on a hex lattice.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML configuration file with `[energy]` and `[kinetics]` tables.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the lattice coordinates of every monomer of a chain.
    Layout(LayoutArgs),
    /// Score a chain and print its energy term by term.
    Energy(EnergyArgs),
    /// List every local re-fold of a chain with its transition rate.
    Transitions(TransitionsArgs),
}

/// The chain to work on.
#[derive(Args, Debug, Clone)]
pub struct ChainArgs {
    /// Hyphen-separated monomer codes (e.g., 'FLX-L60-FLX' or 'ALA-LYS-GLU').
    #[arg(short, long, required = true, value_name = "CODES")]
    pub sequence: String,

    /// Comma-separated fold states, one per monomer (e.g., '0,1,0').
    /// Defaults to a straight chain.
    #[arg(short, long, value_name = "STEPS", allow_hyphen_values = true)]
    pub folds: Option<String>,
}

/// Arguments for the `layout` subcommand.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Print coordinates even if the chain overlaps itself.
    #[arg(long)]
    pub allow_overlap: bool,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S energy.electrostatic-constant=2.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `transitions` subcommand.
#[derive(Args, Debug)]
pub struct TransitionsArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Override the temperature in kelvin.
    #[arg(short, long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Override the barrier coefficient that scales `I × angle²`.
    #[arg(long, value_name = "FLOAT")]
    pub barrier_coefficient: Option<f64>,

    /// Use a constant stay weight instead of the uniformized residual.
    #[arg(long, value_name = "FLOAT")]
    pub stay_weight: Option<f64>,

    /// Only print the N fastest transitions.
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S kinetics.temperature=310
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
