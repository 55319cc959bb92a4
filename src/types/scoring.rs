use serde::Serialize;

pub type Score = f64;

/// Six capped sub-scores plus the rounded total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// 0-10
    pub account_age: Score,
    /// 0-10
    pub gas_spent: Score,
    /// 0-20
    pub unique_contracts: Score,
    /// 0-20
    pub governance: Score,
    /// 0-20
    pub defi_engagement: Score,
    /// 0-20
    pub airdrops: Score,
    /// 0-100
    pub total: u8,
    pub can_mint: bool,
}

impl ScoreBreakdown {
    pub fn sub_scores(&self) -> [(&'static str, Score, u8); 6] {
        [
            ("account_age", self.account_age, 10),
            ("gas_spent", self.gas_spent, 10),
            ("unique_contracts", self.unique_contracts, 20),
            ("governance", self.governance, 20),
            ("defi_engagement", self.defi_engagement, 20),
            ("airdrops", self.airdrops, 20),
        ]
    }

    pub fn raw_sum(&self) -> Score {
        self.sub_scores().iter().map(|(_, score, _)| score).sum()
    }
}
