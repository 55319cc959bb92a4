use crate::error::ProofDropError;
use crate::network::Network;
use crate::scoring::{Scorer, DEFAULT_ETH_PRICE_USD};
use alloy_primitives::Address;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProofDropConfig {
    pub pricing: Option<PricingConfig>,
    pub network: Option<NetworkConfig>,
    pub source: Option<SourceConfig>,
    pub heuristics: Option<HeuristicsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub eth_price_usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub default: Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Demo,
    Activity,
    Metrics,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Demo => "demo",
            SourceKind::Activity => "activity",
            SourceKind::Metrics => "metrics",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: Option<SourceKind>,
    pub path: Option<PathBuf>,
}

/// Extra contract addresses on top of the built-in tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeuristicsConfig {
    #[serde(default)]
    pub defi_protocols: Vec<String>,
    #[serde(default)]
    pub governance_contracts: Vec<String>,
}

impl ProofDropConfig {
    pub fn eth_price_usd(&self) -> f64 {
        self.pricing
            .as_ref()
            .and_then(|pricing| pricing.eth_price_usd)
            .unwrap_or(DEFAULT_ETH_PRICE_USD)
    }

    /// A scorer for a configured price; `None` keeps the built-in default.
    pub fn scorer(&self) -> Option<Scorer> {
        self.pricing
            .as_ref()
            .and_then(|pricing| pricing.eth_price_usd)
            .map(Scorer::new)
    }

    pub fn default_network(&self) -> Network {
        self.network
            .as_ref()
            .map(|network| network.default)
            .unwrap_or_default()
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source.as_ref().and_then(|source| source.kind)
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source.as_ref().and_then(|source| source.path.as_ref())
    }

    pub fn extra_defi_protocols(&self) -> Result<Vec<Address>, ProofDropError> {
        parse_addresses(
            "heuristics.defi_protocols",
            self.heuristics
                .as_ref()
                .map(|h| h.defi_protocols.as_slice())
                .unwrap_or_default(),
        )
    }

    pub fn extra_governance_contracts(&self) -> Result<Vec<Address>, ProofDropError> {
        parse_addresses(
            "heuristics.governance_contracts",
            self.heuristics
                .as_ref()
                .map(|h| h.governance_contracts.as_slice())
                .unwrap_or_default(),
        )
    }

    pub fn validate(&self) -> Result<(), ProofDropError> {
        let price = self.eth_price_usd();
        if !price.is_finite() || price <= 0.0 {
            return Err(ProofDropError::ConfigParse(format!(
                "pricing.eth_price_usd must be a positive number (found {price})"
            )));
        }
        self.extra_defi_protocols()?;
        self.extra_governance_contracts()?;
        Ok(())
    }
}

fn parse_addresses(key: &str, raw: &[String]) -> Result<Vec<Address>, ProofDropError> {
    raw.iter()
        .map(|value| {
            Address::from_str(value.trim()).map_err(|e| {
                ProofDropError::ConfigParse(format!("{key} contains invalid address {value}: {e}"))
            })
        })
        .collect()
}
