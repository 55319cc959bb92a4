//! Wallet reputation score (0-100).
//!
//! Six capped factors are summed and rounded:
//! - Account age (0-10): `min(10, 10 * months / 24)`
//! - Gas spent (0-10): `min(10, 10 * ln(1 + usd) / ln(501))`
//! - Unique contracts (0-20): `min(20, 20 * count / 100)`
//! - Governance (0-20): `min(20, 2 * votes)`
//! - DeFi engagement (0-20): `min(20, weighted_actions)`
//! - Airdrops (0-20): `min(20, 4 * count)`

pub mod badge;

use crate::types::metrics::WalletMetrics;
use crate::types::scoring::{Score, ScoreBreakdown};
use alloy_primitives::{utils::format_ether, U256};

pub const DEFAULT_ETH_PRICE_USD: f64 = 2500.0;
pub const MINT_THRESHOLD: u8 = 5;

const ACCOUNT_AGE_CAP: Score = 10.0;
const GAS_CAP: Score = 10.0;
const CONTRACTS_CAP: Score = 20.0;
const GOVERNANCE_CAP: Score = 20.0;
const DEFI_CAP: Score = 20.0;
const AIRDROPS_CAP: Score = 20.0;

/// Months of history that earn the full account-age score.
const FULL_AGE_MONTHS: Score = 24.0;
/// USD of gas that earns the full gas score.
const FULL_GAS_USD: Score = 500.0;
const FULL_CONTRACTS: Score = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub eth_price_usd: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            eth_price_usd: DEFAULT_ETH_PRICE_USD,
        }
    }
}

impl Scorer {
    pub fn new(eth_price_usd: f64) -> Self {
        Self { eth_price_usd }
    }

    pub fn score(&self, metrics: &WalletMetrics) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown {
            account_age: account_age_score(metrics.account_age_months),
            gas_spent: gas_spent_score(metrics.gas_spent_wei, self.eth_price_usd),
            unique_contracts: unique_contracts_score(metrics.unique_contracts),
            governance: governance_score(metrics.governance_votes),
            defi_engagement: defi_engagement_score(metrics.defi_engagement),
            airdrops: airdrops_score(metrics.airdrops_claimed),
            total: 0,
            can_mint: false,
        };
        breakdown.total = breakdown.raw_sum().round() as u8;
        breakdown.can_mint = breakdown.total >= MINT_THRESHOLD;
        breakdown
    }
}

/// Score with the built-in ETH price.
pub fn calculate_score(metrics: &WalletMetrics) -> ScoreBreakdown {
    Scorer::default().score(metrics)
}

pub fn account_age_score(months: u32) -> Score {
    (ACCOUNT_AGE_CAP * Score::from(months) / FULL_AGE_MONTHS).min(ACCOUNT_AGE_CAP)
}

pub fn gas_spent_score(gas_spent_wei: U256, eth_price_usd: f64) -> Score {
    let usd = wei_to_eth(gas_spent_wei) * eth_price_usd;
    if usd.is_nan() || usd <= 0.0 {
        return 0.0;
    }
    (GAS_CAP * usd.ln_1p() / FULL_GAS_USD.ln_1p()).min(GAS_CAP)
}

pub fn unique_contracts_score(count: u32) -> Score {
    (CONTRACTS_CAP * Score::from(count) / FULL_CONTRACTS).min(CONTRACTS_CAP)
}

pub fn governance_score(votes: u32) -> Score {
    (2.0 * Score::from(votes)).min(GOVERNANCE_CAP)
}

pub fn defi_engagement_score(weighted_actions: u32) -> Score {
    Score::from(weighted_actions).min(DEFI_CAP)
}

pub fn airdrops_score(count: u32) -> Score {
    (4.0 * Score::from(count)).min(AIRDROPS_CAP)
}

pub fn wei_to_eth(wei: U256) -> f64 {
    format_ether(wei).parse::<f64>().unwrap_or(0.0)
}
