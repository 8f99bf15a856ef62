use std::path::PathBuf;

use agora_diff::DiffStrategy;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "agora",
    about = "Agora: compare proposal versions field by field",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StrategyArg {
    Greedy,
    Myers,
}

impl From<StrategyArg> for DiffStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => DiffStrategy::Greedy,
            StrategyArg::Myers => DiffStrategy::Myers,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two proposal snapshots (JSON files)
    Compare(CompareArgs),
    /// Line-diff two text files
    Lines(LinesArgs),
    /// Print the built-in proposal schema as TOML
    Schema,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Older snapshot
    pub old: PathBuf,
    /// Newer snapshot
    pub new: PathBuf,
    /// Field schema (TOML); defaults to the proposal schema
    #[arg(long)]
    pub schema: Option<PathBuf>,
    /// Comparator config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the configured line diff strategy
    #[arg(long)]
    pub strategy: Option<StrategyArg>,
    /// Include unchanged fields
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct LinesArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    #[arg(long, default_value = "greedy")]
    pub strategy: StrategyArg,
}
