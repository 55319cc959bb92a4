use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Wallet activity snapshot assembled by a metrics source, once per analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletMetrics {
    pub account_age_months: u32,
    #[serde(with = "wei")]
    pub gas_spent_wei: U256,
    pub unique_contracts: u32,
    pub governance_votes: u32,
    /// Tracked but not scored.
    #[serde(default)]
    pub proposals_created: u32,
    /// Already weighted by the source (approve=2, swap=3, stake/deposit/LP=5, other=1).
    pub defi_engagement: u32,
    pub airdrops_claimed: u32,
}

/// Decimal string on the way out; JSON integer, decimal or 0x-hex string on the way in.
pub mod wei {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    /// Indexers disagree on whether amounts are numbers or strings.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Integer(u64),
        Text(String),
    }

    impl RawAmount {
        fn into_u256(self) -> Result<U256, String> {
            match self {
                RawAmount::Integer(value) => Ok(U256::from(value)),
                RawAmount::Text(raw) => parse(&raw),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        RawAmount::deserialize(deserializer)?
            .into_u256()
            .map_err(serde::de::Error::custom)
    }

    /// For optional amounts; pair with `#[serde(default)]`.
    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<RawAmount>::deserialize(deserializer)?
            .map(RawAmount::into_u256)
            .transpose()
            .map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<U256, String> {
        U256::from_str(raw.trim()).map_err(|e| format!("invalid wei amount `{raw}`: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_parse_decimal_and_hex_gas() {
        let decimal: WalletMetrics = serde_json::from_str(
            r#"{
                "account_age_months": 12,
                "gas_spent_wei": "1000000000000000000",
                "unique_contracts": 4,
                "governance_votes": 1,
                "defi_engagement": 7,
                "airdrops_claimed": 2
            }"#,
        )
        .expect("decimal metrics should parse");
        assert_eq!(decimal.gas_spent_wei, U256::from(10u64.pow(18)));
        assert_eq!(decimal.proposals_created, 0);

        let hex: WalletMetrics = serde_json::from_str(
            r#"{
                "account_age_months": 12,
                "gas_spent_wei": "0xde0b6b3a7640000",
                "unique_contracts": 4,
                "governance_votes": 1,
                "proposals_created": 3,
                "defi_engagement": 7,
                "airdrops_claimed": 2
            }"#,
        )
        .expect("hex metrics should parse");
        assert_eq!(hex.gas_spent_wei, decimal.gas_spent_wei);
        assert_eq!(hex.proposals_created, 3);
    }

    #[test]
    fn gas_serializes_as_decimal_string() {
        let metrics = WalletMetrics {
            gas_spent_wei: U256::from(21_000u64),
            ..WalletMetrics::default()
        };
        let rendered = serde_json::to_string(&metrics).expect("metrics should serialize");
        assert!(rendered.contains("\"gas_spent_wei\":\"21000\""));
    }

    #[test]
    fn metrics_accept_integer_gas() {
        let metrics: WalletMetrics = serde_json::from_str(
            r#"{
                "account_age_months": 3,
                "gas_spent_wei": 630000000000000,
                "unique_contracts": 0,
                "governance_votes": 0,
                "defi_engagement": 0,
                "airdrops_claimed": 0
            }"#,
        )
        .expect("integer gas should parse");
        assert_eq!(metrics.gas_spent_wei, U256::from(630_000_000_000_000u64));
    }

    #[test]
    fn rejects_non_numeric_gas() {
        assert!(wei::parse("lots").is_err());
    }
}
