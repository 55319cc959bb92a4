mod analyze;
mod cli;
mod config;
mod error;
mod logging;
mod network;
mod report;
mod scoring;
mod source;
mod types;

use crate::error::ProofDropError;
use crate::network::Network;
use crate::scoring::badge::{badge_for_score, share_text, BADGES};
use crate::source::AnalysisRequest;
use alloy_primitives::Address;
use clap::Parser;
use std::str::FromStr;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const NOT_ELIGIBLE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ProofDropError> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let address = Address::from_str(cmd.address.trim())
                .map_err(|e| ProofDropError::InvalidAddress(format!("{}: {}", cmd.address, e)))?;

            let loaded = config::load_config(&cli.config_dir)?;
            let cfg = loaded.unwrap_or_default();

            let request = AnalysisRequest {
                address,
                network: cmd.network.unwrap_or_else(|| cfg.default_network()),
            };
            let source =
                source::resolve_source(cmd.source, cmd.input.as_deref(), &cfg, &cli.config_dir)?;
            let scorer = cfg.scorer();
            let analysis = analyze::analyze_wallet(&request, source.as_ref(), scorer.as_ref())?;

            if analysis.demo && !cli.quiet {
                eprintln!("warning: no metrics source configured, using demo data");
            }

            if cmd.share {
                println!("{}", share_text(analysis.score.total, &analysis.badge));
            } else {
                let output_format = match cmd.format {
                    cli::ReportFormat::Json => report::OutputFormat::Json,
                    cli::ReportFormat::Md => report::OutputFormat::Md,
                };
                println!("{}", report::render(&analysis, output_format)?);
            }

            if !analysis.score.can_mint {
                Ok(exit_code::NOT_ELIGIBLE)
            } else if analysis.demo {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Badges(cmd) => {
            match cmd.score {
                Some(score) => {
                    let badge = badge_for_score(score);
                    println!("{score}: {} {} - {}", badge.icon, badge.name, badge.description);
                }
                None => {
                    for badge in &BADGES {
                        println!(
                            "{} {:<8} {:>3}-{:<3} {}",
                            badge.icon,
                            badge.name,
                            badge.min_score,
                            badge.max_score,
                            badge.description
                        );
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Networks => {
            for network in Network::ALL {
                println!(
                    "{:<12} chain {:<9} {}{}",
                    network.slug(),
                    network.chain_id(),
                    network.display_name(),
                    if network.is_testnet() { " (testnet)" } else { "" }
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
