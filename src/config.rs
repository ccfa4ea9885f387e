use std::path::PathBuf;

use anyhow::{Context, Result};

pub use gen_ranges_core::config::{SamplerConfig, SamplerConfigBuilder};
pub use gen_ranges_core::options::{RangeFormat, Strategy};

use crate::cli::Args;

/// Runtime configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub sampler: SamplerConfig,
    /// Destination of the generated range file.
    pub output: PathBuf,
    pub format: RangeFormat,
    /// Beautify mode: `(input, output)` JSON paths.
    pub beautify: Option<(PathBuf, PathBuf)>,
    /// Compare mode: two JSON files holding top-level lists.
    pub compare: Option<(PathBuf, PathBuf)>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let sampler = SamplerConfigBuilder::default()
            .start(args.start)
            .end(args.end)
            .length(args.length)
            .count(args.count)
            .strategy(Strategy::from(args.strategy))
            .seed(args.seed)
            .build()
            .context("failed to assemble sampler configuration")?;

        Ok(Self {
            sampler,
            output: args.output.clone(),
            format: args.format.into(),
            beautify: make_path_pair(&args.beautify),
            compare: make_path_pair(&args.compare),
        })
    }
}

fn make_path_pair(paths: &Option<Vec<PathBuf>>) -> Option<(PathBuf, PathBuf)> {
    paths
        .as_ref()
        .filter(|paths| paths.len() == 2)
        .map(|paths| (paths[0].clone(), paths[1].clone()))
}
