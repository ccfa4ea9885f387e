mod args;
mod parsers;
mod value_enum;

pub use args::Args;
use anyhow::Result;
use clap::Parser;

use crate::config::Config;

/// Parse CLI arguments and materialise an application [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments cannot be assembled into a
/// configuration.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into an application configuration.
///
/// # Errors
///
/// Returns `Err` when building the sampler configuration from the parsed
/// options fails.
pub fn build_config(args: &Args) -> Result<Config> {
    Config::from_args(args)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use gen_ranges_core::options::{RangeFormat, Strategy};

    use super::*;

    #[test]
    fn defaults_reproduce_the_historical_window() {
        let args = Args::parse_from(["gen_ranges"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.sampler.start, 18_908_893);
        assert_eq!(config.sampler.end, 20_000_000);
        assert_eq!(config.sampler.length, 100);
        assert_eq!(config.sampler.count, 20);
        assert_eq!(config.sampler.strategy, Strategy::Gaps);
        assert_eq!(config.sampler.seed, None);
        assert_eq!(config.format, RangeFormat::Text);
        assert_eq!(config.output, PathBuf::from("range.txt"));
        assert!(config.beautify.is_none());
        assert!(config.compare.is_none());
    }

    #[test]
    fn sampling_flags_are_carried_through() {
        let args = Args::parse_from([
            "gen_ranges",
            "--start",
            "0",
            "--end",
            "500",
            "--length",
            "10",
            "--count",
            "3",
            "--seed",
            "7",
        ]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.sampler.start, 0);
        assert_eq!(config.sampler.end, 500);
        assert_eq!(config.sampler.length, 10);
        assert_eq!(config.sampler.count, 3);
        assert_eq!(config.sampler.seed, Some(7));
    }

    #[test]
    fn strategy_flag_selects_the_rejection_sampler() {
        let args = Args::parse_from(["gen_ranges", "--strategy", "rejection"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.sampler.strategy, Strategy::Rejection);
    }

    #[test]
    fn format_flag_selects_json_output() {
        let args = Args::parse_from(["gen_ranges", "--format", "json", "--output", "range.json"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.format, RangeFormat::Json);
        assert_eq!(config.output, PathBuf::from("range.json"));
    }

    #[test]
    fn count_of_zero_is_accepted() {
        let args = Args::parse_from(["gen_ranges", "--count", "0"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.sampler.count, 0);
    }

    #[test]
    fn length_of_zero_is_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["gen_ranges", "--length", "0"]).is_err());
    }

    #[test]
    fn beautify_pair_is_extracted() {
        let args = Args::parse_from(["gen_ranges", "--beautify", "in.json", "out.json"]);
        let config = build_config(&args).expect("config builds");
        let (input, output) = config.beautify.expect("beautify mode set");
        assert_eq!(input, PathBuf::from("in.json"));
        assert_eq!(output, PathBuf::from("out.json"));
        assert!(config.compare.is_none());
    }

    #[test]
    fn compare_pair_is_extracted() {
        let args = Args::parse_from(["gen_ranges", "--compare", "a.json", "b.json"]);
        let config = build_config(&args).expect("config builds");
        let (left, right) = config.compare.expect("compare mode set");
        assert_eq!(left, PathBuf::from("a.json"));
        assert_eq!(right, PathBuf::from("b.json"));
    }

    #[test]
    fn beautify_and_compare_are_mutually_exclusive() {
        let result = Args::try_parse_from([
            "gen_ranges",
            "--beautify",
            "a.json",
            "b.json",
            "--compare",
            "c.json",
            "d.json",
        ]);
        assert!(result.is_err(), "tool modes must not combine");
    }

    #[test]
    fn a_single_tool_path_is_ignored() {
        let mut args = Args::parse_from(["gen_ranges"]);
        args.compare = Some(vec![PathBuf::from("only.json")]);
        let config = build_config(&args).expect("config builds");
        assert!(config.compare.is_none(), "single compare path should be ignored");
    }
}
