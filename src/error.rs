use thiserror::Error;

/// Errors surfaced by the analysis core.
///
/// `MalformedRow` is recovered locally: the offending row is dropped and the
/// batch continues. `EmptyDataset` signals that ingestion produced zero
/// sessions; downstream components still return empty, well-typed outputs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("dataset contains no sessions")]
    EmptyDataset,
}
