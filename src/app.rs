use anyhow::Result;

use crate::cli;
use crate::config::Config;
use crate::presentation;
use gen_ranges_core::json::{beautify, compare};
use gen_ranges_core::{output, sampler};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<()> {
    if let Some((left, right)) = &config.compare {
        let outcome = compare::compare_files(left, right)?;
        presentation::print_compare_report(&outcome);
        return Ok(());
    }

    if let Some((input, output_path)) = &config.beautify {
        beautify::beautify_file(input, output_path)?;
        println!(
            "JSON file has been successfully beautified and saved to {}",
            output_path.display()
        );
        return Ok(());
    }

    let ranges = sampler::generate(&config.sampler)?;
    output::write_ranges(&config.output, &ranges, config.format)?;
    println!(
        "Ranges have been successfully generated and written to {}",
        config.output.display()
    );
    Ok(())
}
