use clap::ValueEnum;
use gen_ranges_core::options::{RangeFormat, Strategy};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliStrategy {
    Gaps,
    Rejection,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Gaps => Strategy::Gaps,
            CliStrategy::Rejection => Strategy::Rejection,
        }
    }
}

impl From<Strategy> for CliStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Gaps => CliStrategy::Gaps,
            Strategy::Rejection => CliStrategy::Rejection,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliRangeFormat {
    Text,
    Json,
}

impl From<CliRangeFormat> for RangeFormat {
    fn from(value: CliRangeFormat) -> Self {
        match value {
            CliRangeFormat::Text => RangeFormat::Text,
            CliRangeFormat::Json => RangeFormat::Json,
        }
    }
}

impl From<RangeFormat> for CliRangeFormat {
    fn from(value: RangeFormat) -> Self {
        match value {
            RangeFormat::Text => CliRangeFormat::Text,
            RangeFormat::Json => CliRangeFormat::Json,
        }
    }
}
