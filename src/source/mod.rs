//! Pluggable producers of `WalletMetrics`.

pub mod activity;
pub mod demo;
pub mod heuristics;
pub mod metrics_file;

use crate::error::{ProofDropError, Result};
use crate::network::Network;
use crate::types::config::{ProofDropConfig, SourceKind};
use crate::types::metrics::WalletMetrics;
use alloy_primitives::Address;
use std::path::{Path, PathBuf};

pub use activity::ActivitySource;
pub use demo::DemoSource;
pub use heuristics::Heuristics;
pub use metrics_file::MetricsFileSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub address: Address,
    pub network: Network,
}

pub trait MetricsSource {
    fn name(&self) -> &'static str;

    /// Demo sources produce synthetic data and the report says so.
    fn is_demo(&self) -> bool {
        false
    }

    fn fetch(&self, request: &AnalysisRequest) -> Result<WalletMetrics>;
}

/// Picks the source: explicit choice, then config, then the demo fallback.
///
/// A relative `[source] path` is taken relative to `config_dir`; an explicit
/// `input` is used as given.
pub fn resolve_source(
    kind: Option<SourceKind>,
    input: Option<&Path>,
    config: &ProofDropConfig,
    config_dir: &Path,
) -> Result<Box<dyn MetricsSource>> {
    let kind = kind.or_else(|| config.source_kind());
    let input: Option<PathBuf> = input
        .map(Path::to_path_buf)
        .or_else(|| config.source_path().map(|path| config_dir.join(path)));

    match kind {
        None | Some(SourceKind::Demo) => Ok(Box::new(DemoSource)),
        Some(SourceKind::Activity) => {
            let path = require_input(SourceKind::Activity, input)?;
            let heuristics = Heuristics::from_config(config)?;
            Ok(Box::new(ActivitySource::new(path, heuristics)))
        }
        Some(SourceKind::Metrics) => {
            let path = require_input(SourceKind::Metrics, input)?;
            Ok(Box::new(MetricsFileSource::new(path)))
        }
    }
}

fn require_input(kind: SourceKind, input: Option<PathBuf>) -> Result<PathBuf> {
    let path = input.ok_or_else(|| ProofDropError::MissingSourceInput(kind.as_str().to_string()))?;
    if !path.exists() {
        return Err(ProofDropError::PathNotFound(path.display().to_string()));
    }
    Ok(path)
}
