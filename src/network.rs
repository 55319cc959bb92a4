use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Networks a wallet can be analysed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    Mainnet,
    Polygon,
    Bsc,
    Sepolia,
    Mumbai,
    BscTestnet,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Polygon,
        Network::Bsc,
        Network::Sepolia,
        Network::Mumbai,
        Network::BscTestnet,
    ];

    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Polygon => 137,
            Network::Bsc => 56,
            Network::Sepolia => 11_155_111,
            Network::Mumbai => 80_001,
            Network::BscTestnet => 97,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum",
            Network::Polygon => "Polygon",
            Network::Bsc => "BSC",
            Network::Sepolia => "Sepolia",
            Network::Mumbai => "Mumbai",
            Network::BscTestnet => "BSC Testnet",
        }
    }

    pub fn is_testnet(self) -> bool {
        matches!(
            self,
            Network::Sepolia | Network::Mumbai | Network::BscTestnet
        )
    }

    /// Kebab-case name accepted by `--network` and the config file.
    pub fn slug(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Polygon => "polygon",
            Network::Bsc => "bsc",
            Network::Sepolia => "sepolia",
            Network::Mumbai => "mumbai",
            Network::BscTestnet => "bsc-testnet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chain_ids_are_unique() {
        let ids: HashSet<u64> = Network::ALL.iter().map(|n| n.chain_id()).collect();
        assert_eq!(ids.len(), Network::ALL.len());
    }

    #[test]
    fn slug_matches_serde_and_clap_names() {
        for network in Network::ALL {
            let json = serde_json::to_string(&network).expect("network should serialize");
            assert_eq!(json, format!("\"{}\"", network.slug()));
            let parsed = Network::from_str(network.slug(), false).expect("clap name should parse");
            assert_eq!(parsed, network);
        }
    }

    #[test]
    fn testnets_are_flagged() {
        assert!(!Network::Mainnet.is_testnet());
        assert!(Network::BscTestnet.is_testnet());
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
