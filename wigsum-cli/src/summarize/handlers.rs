use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use wigsum_core::consts::DEFAULT_N_BINS;
use wigsum_core::models::{IndexPolicy, SummaryConfig, SummaryMode};
use wigsum_core::summarize_track_dump;

use super::cli::{BINS_ARG, DATASET_ARG, LEGACY_OFFSET_ARG, MODE_ARG, WIGGLE_ARG};

/// Turn parsed arguments into the input path and the run configuration.
pub fn config_from_matches(matches: &ArgMatches) -> (PathBuf, SummaryConfig) {
    let dataset = matches
        .get_one::<String>(DATASET_ARG)
        .expect("A dataset prefix is required.");

    let mode = *matches
        .get_one::<i64>(MODE_ARG)
        .expect("A summary mode is required.");

    let wiggle = matches
        .get_one::<String>(WIGGLE_ARG)
        .expect("A path to the hgWiggle output is required.");

    let n_bins = matches
        .get_one::<u64>(BINS_ARG)
        .map(|n| *n as usize)
        .unwrap_or(DEFAULT_N_BINS);

    let index_policy = match matches.get_flag(LEGACY_OFFSET_ARG) {
        true => IndexPolicy::Shifted,
        false => IndexPolicy::Natural,
    };

    let summary_mode = SummaryMode::from_code(mode);
    if summary_mode.is_none() {
        warn!("Unknown summary mode {}, no reports will be written", mode);
    }

    let config = SummaryConfig::new(dataset, summary_mode)
        .with_n_bins(n_bins)
        .with_index_policy(index_policy);

    (PathBuf::from(wiggle), config)
}

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let (wiggle, config) = config_from_matches(matches);

    summarize_track_dump(&wiggle, &config)
        .with_context(|| format!("Failed to summarize {}", wiggle.display()))?;

    Ok(())
}
