use crate::network::Network;
use crate::types::config::SourceKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "proofdrop",
    version,
    about = "Wallet reputation scoring and badge tiers"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding proofdrop.toml and .proofdrop/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a wallet and report its badge tier
    Score(ScoreCommand),
    /// List badge tiers, or show the tier for one score
    Badges(BadgesCommand),
    /// List supported networks
    Networks,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Wallet address (0x-prefixed hex)
    pub address: String,
    #[arg(long, value_enum)]
    pub network: Option<Network>,
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,
    /// Activity export or metrics JSON, depending on --source
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Print only the share text
    #[arg(long)]
    pub share: bool,
}

#[derive(Args)]
pub struct BadgesCommand {
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: Option<u8>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
