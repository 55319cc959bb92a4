use super::{AnalysisRequest, MetricsSource};
use crate::error::Result;
use crate::types::metrics::WalletMetrics;
use alloy_primitives::U256;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Upper bound (exclusive) of demo gas spend: 5 ETH.
const MAX_DEMO_GAS_WEI: u64 = 5_000_000_000_000_000_000;

/// Synthetic metrics for wallets without real activity data.
///
/// Values are drawn from an RNG seeded with the chain id and address, so
/// the same wallet always gets the same demo report.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl DemoSource {
    fn rng_for(request: &AnalysisRequest) -> StdRng {
        let mut hasher = Sha256::new();
        hasher.update(request.network.chain_id().to_be_bytes());
        hasher.update(request.address.as_slice());
        StdRng::from_seed(hasher.finalize().into())
    }
}

impl MetricsSource for DemoSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn is_demo(&self) -> bool {
        true
    }

    fn fetch(&self, request: &AnalysisRequest) -> Result<WalletMetrics> {
        let mut rng = Self::rng_for(request);
        Ok(WalletMetrics {
            account_age_months: rng.random_range(0..36u32).max(1),
            gas_spent_wei: U256::from(rng.random_range(0..MAX_DEMO_GAS_WEI)),
            unique_contracts: rng.random_range(0..100),
            governance_votes: rng.random_range(0..15),
            proposals_created: rng.random_range(0..5),
            defi_engagement: rng.random_range(0..20),
            airdrops_claimed: rng.random_range(0..25),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use alloy_primitives::address;

    fn request(network: Network) -> AnalysisRequest {
        AnalysisRequest {
            address: address!("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
            network,
        }
    }

    #[test]
    fn demo_metrics_are_reproducible_per_wallet() {
        let first = DemoSource.fetch(&request(Network::Mainnet)).expect("demo fetch");
        let second = DemoSource.fetch(&request(Network::Mainnet)).expect("demo fetch");
        assert_eq!(first, second);
    }

    #[test]
    fn demo_metrics_stay_in_documented_ranges() {
        for network in Network::ALL {
            let metrics = DemoSource.fetch(&request(network)).expect("demo fetch");
            assert!((1..36).contains(&metrics.account_age_months));
            assert!(metrics.gas_spent_wei < U256::from(MAX_DEMO_GAS_WEI));
            assert!(metrics.unique_contracts < 100);
            assert!(metrics.governance_votes < 15);
            assert!(metrics.proposals_created < 5);
            assert!(metrics.defi_engagement < 20);
            assert!(metrics.airdrops_claimed < 25);
        }
    }

    #[test]
    fn demo_source_is_flagged() {
        assert!(DemoSource.is_demo());
        assert_eq!(DemoSource.name(), "demo");
    }
}
