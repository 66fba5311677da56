use std::path::Path;

use log::{debug, info};

use crate::errors::{Result, WigsumError};
use crate::models::{RegionSummary, SummaryConfig, SummaryMode, TrackRegion};
use crate::report::{ReportPaths, append_record};
use crate::utils::mean;

///
/// Reduce a region to its whole-region average and, for
/// [SummaryMode::RegionAndBins], to `n_bins` per-bin averages.
///
/// Every bin is `floor(size / n_bins)` values wide and bins are laid out
/// from the start of the region, so a remainder at the end of the region
/// is never binned. The placeholder region of an empty dump (a single
/// value) reports all bins as `0.0`.
///
/// # Errors
/// - [WigsumError::EmptyBin] if the region is shorter than `n_bins`
/// - [WigsumError::EmptyRegion] if there are no values at all
pub fn summarize_region(
    region: &TrackRegion,
    mode: SummaryMode,
    n_bins: usize,
) -> Result<RegionSummary> {
    let bins = match mode {
        SummaryMode::RegionAndBins => Some(bin_averages(region, n_bins)?),
        SummaryMode::RegionOnly => None,
    };

    let average = mean(&region.values).ok_or(WigsumError::EmptyRegion)?;

    Ok(RegionSummary {
        name: region.name(),
        average,
        bins,
    })
}

fn bin_averages(region: &TrackRegion, n_bins: usize) -> Result<Vec<f64>> {
    if n_bins == 0 {
        return Err(WigsumError::InvalidBinCount);
    }

    if region.values.len() <= 1 {
        return Ok(vec![0.0; n_bins]);
    }

    let bin_size = (region.size / n_bins as u64) as usize;
    if bin_size == 0 {
        return Err(WigsumError::EmptyBin {
            size: region.size,
            n_bins,
        });
    }

    let averages = region
        .values
        .chunks_exact(bin_size)
        .take(n_bins)
        .map(|bin| bin.iter().sum::<f64>() / bin_size as f64)
        .collect();

    Ok(averages)
}

///
/// Summarize a region and append the records to the dataset's reports.
///
/// Nothing is computed or written when the configured mode is not
/// recognized, in which case `None` is returned. All values are computed
/// before the first report is touched.
///
pub fn summarize_to_reports(
    region: &TrackRegion,
    config: &SummaryConfig,
) -> Result<Option<RegionSummary>> {
    let Some(mode) = config.mode else {
        debug!("No summary mode selected, leaving reports untouched");
        return Ok(None);
    };

    debug!("Summarizing {} in mode {}", region, mode.code());
    let summary = summarize_region(region, mode, config.n_bins)?;
    let paths = ReportPaths::new(&config.dataset);

    append_record(&paths.region, &summary.region_record())?;
    info!(
        "Region average for {} written to {}",
        summary.name,
        paths.region.display()
    );

    if let Some(record) = summary.bins_record() {
        append_record(&paths.bins, &record)?;
        info!(
            "Bin averages for {} written to {}",
            summary.name,
            paths.bins.display()
        );
    }

    Ok(Some(summary))
}

///
/// Parse a track dump and append its summary to the dataset's reports.
///
/// The dump is always read, so a missing or malformed input fails even
/// when the mode is not recognized and no report would be written.
///
pub fn summarize_track_dump<P: AsRef<Path>>(
    path: P,
    config: &SummaryConfig,
) -> Result<Option<RegionSummary>> {
    let region = TrackRegion::from_path(path.as_ref(), config.index_policy)?;
    summarize_to_reports(&region, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn region_with_values(values: Vec<f64>) -> TrackRegion {
        TrackRegion {
            chr: "chr1".to_string(),
            start: 1,
            end: values.len() as u64,
            size: values.len() as u64,
            values,
        }
    }

    #[rstest]
    fn test_average_counts_missing_positions_as_zero() {
        let region = region_with_values(vec![0.0, 0.5, 0.0, 0.9, 0.0]);
        let summary = summarize_region(&region, SummaryMode::RegionOnly, 50).unwrap();
        assert!((summary.average - 0.28).abs() < 1e-12);
        assert_eq!(summary.bins, None);
        assert_eq!(summary.name, "chr1:1-5");
    }

    #[rstest]
    fn test_bins_drop_the_remainder() {
        // 7 values in 3 bins of 2, the 7th value is never binned
        let region = region_with_values(vec![1.0, 3.0, 0.0, 0.0, 2.0, 2.0, 100.0]);
        let summary = summarize_region(&region, SummaryMode::RegionAndBins, 3).unwrap();
        assert_eq!(summary.bins, Some(vec![2.0, 0.0, 2.0]));
        assert!((summary.average - 108.0 / 7.0).abs() < 1e-12);
    }

    #[rstest]
    fn test_fifty_bins_by_default() {
        let region = region_with_values((0..120).map(|v| v as f64).collect());
        let summary = summarize_region(&region, SummaryMode::RegionAndBins, 50).unwrap();
        let bins = summary.bins.unwrap();
        assert_eq!(bins.len(), 50);
        assert_eq!(bins[0], 0.5);
        assert_eq!(bins[49], 98.5);
    }

    #[rstest]
    #[case(49)]
    #[case(2)]
    fn test_region_shorter_than_bins_is_an_error(#[case] size: usize) {
        let region = region_with_values(vec![0.1; size]);
        let err = summarize_region(&region, SummaryMode::RegionAndBins, 50).unwrap_err();
        assert!(matches!(err, WigsumError::EmptyBin { n_bins: 50, .. }));

        // the region average alone is still fine
        assert!(summarize_region(&region, SummaryMode::RegionOnly, 50).is_ok());
    }

    #[rstest]
    fn test_single_position_region_keeps_zero_bins() {
        let region = region_with_values(vec![0.7]);
        let summary = summarize_region(&region, SummaryMode::RegionAndBins, 50).unwrap();
        assert_eq!(summary.bins, Some(vec![0.0; 50]));
        assert_eq!(summary.average, 0.7);
    }

    #[rstest]
    fn test_placeholder_region() {
        let summary =
            summarize_region(&TrackRegion::empty(), SummaryMode::RegionAndBins, 50).unwrap();
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.bins, Some(vec![0.0; 50]));
        assert_eq!(summary.region_record(), "chrUn:1000-9999\t0.0");
    }

    #[rstest]
    fn test_zero_bins_rejected() {
        let region = region_with_values(vec![0.1; 10]);
        let err = summarize_region(&region, SummaryMode::RegionAndBins, 0).unwrap_err();
        assert!(matches!(err, WigsumError::InvalidBinCount));
    }

    #[rstest]
    fn test_empty_values_rejected() {
        let region = region_with_values(vec![]);
        let err = summarize_region(&region, SummaryMode::RegionOnly, 50).unwrap_err();
        assert!(matches!(err, WigsumError::EmptyRegion));
    }

    #[rstest]
    fn test_reports_for_region_only_mode() {
        let tempdir = tempfile::tempdir().unwrap();
        let dataset = tempdir.path().join("ds");
        let config =
            SummaryConfig::new(dataset.to_str().unwrap(), Some(SummaryMode::RegionOnly));
        let paths = ReportPaths::new(&config.dataset);

        let region = region_with_values(vec![0.0, 0.5, 0.0, 0.9, 0.0]);
        summarize_to_reports(&region, &config).unwrap();

        assert_eq!(fs::read_to_string(&paths.region).unwrap(), "chr1:1-5\t0.28");
        assert!(!paths.bins.exists());
    }

    #[rstest]
    fn test_failed_binning_writes_nothing() {
        let tempdir = tempfile::tempdir().unwrap();
        let dataset = tempdir.path().join("ds");
        let config =
            SummaryConfig::new(dataset.to_str().unwrap(), Some(SummaryMode::RegionAndBins));
        let paths = ReportPaths::new(&config.dataset);

        let region = region_with_values(vec![0.5; 10]);
        assert!(summarize_to_reports(&region, &config).is_err());
        assert!(!paths.region.exists());
        assert!(!paths.bins.exists());
    }

    #[rstest]
    fn test_unknown_mode_writes_nothing() {
        let tempdir = tempfile::tempdir().unwrap();
        let dataset = tempdir.path().join("ds");
        let config = SummaryConfig::new(dataset.to_str().unwrap(), None);
        let paths = ReportPaths::new(&config.dataset);

        let dump = tempdir.path().join("dump.txt");
        fs::write(&dump, "#\tchrom specified: chr1\n#\tposition specified: 1-3\n2\t0.5\n")
            .unwrap();

        let summary = summarize_track_dump(&dump, &config).unwrap();
        assert_eq!(summary, None);
        assert!(!paths.region.exists());
        assert!(!paths.bins.exists());
    }

    #[rstest]
    #[case("missing.txt", None)]
    #[case("corrupt.txt", Some("1001\t0.5\n"))]
    fn test_unknown_mode_still_reads_the_dump(
        #[case] file_name: &str,
        #[case] content: Option<&str>,
    ) {
        let tempdir = tempfile::tempdir().unwrap();
        let dataset = tempdir.path().join("ds");
        let config = SummaryConfig::new(dataset.to_str().unwrap(), None);
        let paths = ReportPaths::new(&config.dataset);

        let dump = tempdir.path().join(file_name);
        if let Some(content) = content {
            fs::write(&dump, content).unwrap();
        }

        assert!(summarize_track_dump(&dump, &config).is_err());
        assert!(!paths.region.exists());
        assert!(!paths.bins.exists());
    }
}
