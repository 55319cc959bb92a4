use super::{AnalysisRequest, MetricsSource};
use crate::error::{ProofDropError, Result};
use crate::types::metrics::WalletMetrics;
use std::path::PathBuf;

/// Pre-assembled `WalletMetrics` stored as JSON.
pub struct MetricsFileSource {
    path: PathBuf,
}

impl MetricsFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl MetricsSource for MetricsFileSource {
    fn name(&self) -> &'static str {
        "metrics"
    }

    fn fetch(&self, _request: &AnalysisRequest) -> Result<WalletMetrics> {
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| ProofDropError::SourceFormat(format!("{}: {}", self.path.display(), e)))
    }
}
