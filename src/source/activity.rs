//! Metrics derived from an exported indexer activity document.
//!
//! The document carries the wallet's transactions (newest or oldest first,
//! order does not matter) and the NFT transfers it received:
//!
//! ```json
//! {
//!   "transactions": [{
//!     "block_signed_at": "2023-04-01T12:00:00Z",
//!     "to_address": "0x...",
//!     "gas_spent": 21000,
//!     "gas_price": "30000000000",
//!     "input": "0x095ea7b3..."
//!   }],
//!   "nft_transfers": [{ "token_address": "0x...", "value": "0" }]
//! }
//! ```
//!
//! Amounts may be JSON integers or decimal/0x-hex strings.

use super::heuristics::{defi_action_weight, Heuristics};
use super::{AnalysisRequest, MetricsSource};
use crate::error::{ProofDropError, Result};
use crate::types::metrics::{wei, WalletMetrics};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

const DAYS_PER_MONTH: i64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityExport {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub nft_transfers: Vec<NftTransferRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub block_signed_at: Option<DateTime<Utc>>,
    pub to_address: Option<String>,
    #[serde(default, deserialize_with = "wei::deserialize_opt")]
    pub gas_spent: Option<U256>,
    #[serde(default, deserialize_with = "wei::deserialize_opt")]
    pub gas_price: Option<U256>,
    pub input: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NftTransferRecord {
    pub token_address: Option<String>,
    #[serde(default, deserialize_with = "wei::deserialize_opt")]
    pub value: Option<U256>,
}

pub struct ActivitySource {
    path: PathBuf,
    heuristics: Heuristics,
    as_of: Option<DateTime<Utc>>,
}

impl ActivitySource {
    pub fn new(path: PathBuf, heuristics: Heuristics) -> Self {
        Self {
            path,
            heuristics,
            as_of: None,
        }
    }

    /// Pins the reference time used for account age.
    #[cfg(test)]
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    fn load(&self) -> Result<ActivityExport> {
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            ProofDropError::SourceFormat(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl MetricsSource for ActivitySource {
    fn name(&self) -> &'static str {
        "activity"
    }

    fn fetch(&self, request: &AnalysisRequest) -> Result<WalletMetrics> {
        let export = self.load()?;
        tracing::debug!(
            transactions = export.transactions.len(),
            nft_transfers = export.nft_transfers.len(),
            "loaded activity export"
        );
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        Ok(derive_metrics(
            &export,
            request.address,
            &self.heuristics,
            as_of,
        ))
    }
}

pub fn derive_metrics(
    export: &ActivityExport,
    wallet: Address,
    heuristics: &Heuristics,
    as_of: DateTime<Utc>,
) -> WalletMetrics {
    let mut metrics = WalletMetrics {
        account_age_months: account_age_months(&export.transactions, as_of),
        ..WalletMetrics::default()
    };

    let mut contracts = HashSet::new();
    for tx in &export.transactions {
        if let (Some(spent), Some(price)) = (tx.gas_spent, tx.gas_price) {
            metrics.gas_spent_wei = metrics
                .gas_spent_wei
                .saturating_add(spent.saturating_mul(price));
        }

        let Some(to) = tx.to_address.as_deref().and_then(parse_address) else {
            continue;
        };
        if to != wallet {
            contracts.insert(to);
        }
        if heuristics.is_defi(&to) {
            metrics.defi_engagement = metrics
                .defi_engagement
                .saturating_add(defi_action_weight(tx.input.as_deref()));
        }
        if heuristics.is_governance(&to) {
            metrics.governance_votes = metrics.governance_votes.saturating_add(1);
        }
    }
    metrics.unique_contracts = u32::try_from(contracts.len()).unwrap_or(u32::MAX);

    let airdrops = export
        .nft_transfers
        .iter()
        .filter(|transfer| transfer.value == Some(U256::ZERO))
        .filter_map(|transfer| transfer.token_address.as_deref().and_then(parse_address))
        .collect::<HashSet<_>>();
    metrics.airdrops_claimed = u32::try_from(airdrops.len()).unwrap_or(u32::MAX);

    metrics
}

/// Whole 30-day months since the earliest transaction, never less than one.
fn account_age_months(transactions: &[TransactionRecord], as_of: DateTime<Utc>) -> u32 {
    let Some(first) = transactions.iter().filter_map(|tx| tx.block_signed_at).min() else {
        return 1;
    };
    let months = (as_of - first).num_days() / DAYS_PER_MONTH;
    u32::try_from(months).unwrap_or(0).max(1)
}

fn parse_address(raw: &str) -> Option<Address> {
    match Address::from_str(raw.trim()) {
        Ok(address) => Some(address),
        Err(e) => {
            tracing::warn!(address = raw, error = %e, "skipping unparsable address");
            None
        }
    }
}
