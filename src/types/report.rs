use crate::network::Network;
use crate::scoring::badge::Badge;
use crate::types::metrics::WalletMetrics;
use crate::types::scoring::ScoreBreakdown;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub address: String,
    pub network: Network,
    pub source: String,
    pub demo: bool,
    pub metrics: WalletMetrics,
    pub score: ScoreBreakdown,
    pub badge: Badge,
}
