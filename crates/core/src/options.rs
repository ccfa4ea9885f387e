use serde::{Deserialize, Serialize};

/// Sampling strategy for placing the requested intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Single-pass gap placement: uniform over all valid layouts, no retries.
    #[default]
    Gaps,
    /// Draw-and-test loop; may spin for a long time near the capacity bound.
    Rejection,
}

/// Serialization format for the generated range file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeFormat {
    /// One `lo-hi` line per interval.
    #[default]
    Text,
    /// Pretty-printed JSON array of `{lo, hi}` objects.
    Json,
}
