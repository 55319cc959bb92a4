pub mod json;
pub mod md;

use crate::error::ProofDropError;
use crate::types::report::Analysis;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String, ProofDropError> {
    match format {
        OutputFormat::Json => json::to_json(analysis).map_err(ProofDropError::Json),
        OutputFormat::Md => Ok(md::to_markdown(analysis)),
    }
}
