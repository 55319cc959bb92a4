//! Known contract tables and DeFi method weights used to classify transactions.

use crate::error::Result;
use crate::types::config::ProofDropConfig;
use alloy_primitives::{address, Address};
use std::collections::HashSet;

pub const DEFI_PROTOCOLS: [Address; 7] = [
    // Uniswap V2 router
    address!("7a250d5630b4cf539739df2c5dacb4c659f2488d"),
    // Uniswap V3 router
    address!("e592427a0aece92de3edee1f18e0157c05861564"),
    // Compound comptroller
    address!("3d9819210a31b4961b30ef54be2aed79b9c9cd3b"),
    // Compound cDAI
    address!("5d3a536e4d6dbd6114cc1ead35777bab948e3643"),
    // Aave lending pool
    address!("7d2768de32b0b80b7a3454c06bdac94a69ddc7a9"),
    // Curve registry
    address!("a2b47e3d5c44877cca798226b7b8118f9bfb7a56"),
    // Balancer vault
    address!("ba12222222228d8ba445958a75a0704d566bf2c8"),
];

pub const GOVERNANCE_CONTRACTS: [Address; 3] = [
    // Compound Governor
    address!("5e4be8bc9637f0eaf1c755019678cf1be00e5c9c"),
    // Uniswap Governor
    address!("c0da02939e1441f497fd74f78ce7decb17b66529"),
    // Aave
    address!("7d2768de32b0b80b7a3454c06bdac94a69ddc7a9"),
];

const APPROVE_WEIGHT: u32 = 2;
const SWAP_WEIGHT: u32 = 3;
const POSITION_WEIGHT: u32 = 5;
const DEFAULT_WEIGHT: u32 = 1;

/// Weight of one DeFi interaction, keyed on the 4-byte selector of its calldata.
pub fn defi_action_weight(input: Option<&str>) -> u32 {
    let Some(selector) = input.and_then(selector) else {
        return DEFAULT_WEIGHT;
    };
    match selector.as_str() {
        // approve(address,uint256)
        "0x095ea7b3" => APPROVE_WEIGHT,
        // swapExactTokensForTokens, swapExactETHForTokens, swapExactTokensForETH
        "0x38ed1739" | "0x7ff36ab5" | "0x18cbafe5" => SWAP_WEIGHT,
        // stake, withdraw, deposit, addLiquidity
        "0xa694fc3a" | "0x2e1a7d4d" | "0xb6b55f25" | "0x441a3e70" => POSITION_WEIGHT,
        _ => DEFAULT_WEIGHT,
    }
}

fn selector(input: &str) -> Option<String> {
    input.get(..10).map(str::to_ascii_lowercase)
}

#[derive(Debug, Clone)]
pub struct Heuristics {
    pub defi_protocols: HashSet<Address>,
    pub governance_contracts: HashSet<Address>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            defi_protocols: DEFI_PROTOCOLS.into_iter().collect(),
            governance_contracts: GOVERNANCE_CONTRACTS.into_iter().collect(),
        }
    }
}

impl Heuristics {
    pub fn from_config(config: &ProofDropConfig) -> Result<Self> {
        let mut heuristics = Self::default();
        heuristics
            .defi_protocols
            .extend(config.extra_defi_protocols()?);
        heuristics
            .governance_contracts
            .extend(config.extra_governance_contracts()?);
        Ok(heuristics)
    }

    pub fn is_defi(&self, contract: &Address) -> bool {
        self.defi_protocols.contains(contract)
    }

    pub fn is_governance(&self, contract: &Address) -> bool {
        self.governance_contracts.contains(contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_action_type() {
        assert_eq!(defi_action_weight(Some("0x095ea7b3000000")), 2);
        assert_eq!(defi_action_weight(Some("0x38ed1739abcdef")), 3);
        assert_eq!(defi_action_weight(Some("0x7FF36AB5")), 3);
        assert_eq!(defi_action_weight(Some("0xb6b55f25")), 5);
        assert_eq!(defi_action_weight(Some("0x441a3e70ff")), 5);
        assert_eq!(defi_action_weight(Some("0xdeadbeef")), 1);
    }

    #[test]
    fn short_or_missing_calldata_counts_once() {
        assert_eq!(defi_action_weight(None), 1);
        assert_eq!(defi_action_weight(Some("0x")), 1);
        assert_eq!(defi_action_weight(Some("0x095ea7")), 1);
    }

    #[test]
    fn config_extends_builtin_tables() {
        let config: ProofDropConfig = toml::from_str(
            r#"
[heuristics]
defi_protocols = ["0x1111111254eeb25477b68fb85ed929f73a960582"]
"#,
        )
        .expect("config should parse");
        let heuristics = Heuristics::from_config(&config).expect("heuristics should build");

        assert_eq!(heuristics.defi_protocols.len(), DEFI_PROTOCOLS.len() + 1);
        assert!(heuristics.is_defi(&address!("1111111254eeb25477b68fb85ed929f73a960582")));
        assert!(heuristics.is_governance(&GOVERNANCE_CONTRACTS[0]));
    }
}
