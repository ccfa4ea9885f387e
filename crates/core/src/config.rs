use crate::options::Strategy;
use derive_builder::Builder;

/// Parameters for one generation run.
///
/// The defaults reproduce the tool's historical fixed window: twenty
/// 100-position ranges inside `[18_908_893, 20_000_000]`.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SamplerConfig {
    /// Inclusive lower bound of the window.
    #[builder(default = "18_908_893")]
    pub start: u64,
    /// Inclusive upper bound of the window.
    #[builder(default = "20_000_000")]
    pub end: u64,
    /// Number of positions each interval covers (must be at least 1).
    #[builder(default = "100")]
    pub length: u64,
    /// How many non-overlapping intervals to place.
    #[builder(default = "20")]
    pub count: u64,
    #[builder(default)]
    pub strategy: Strategy,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    #[builder(default)]
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            start: 18_908_893,
            end: 20_000_000,
            length: 100,
            count: 20,
            strategy: Strategy::default(),
            seed: None,
        }
    }
}
