//! # wigsum-core: *<small>Densify and summarize conservation track dumps.</small>*
//!
//! `wigsum-core` reads the text dump that `hgWiggle` prints for one genomic region, rebuilds the
//! per-position score array of that region (positions without data score `0.0`) and reduces it to
//! a whole-region average and, optionally, a fixed number of per-bin averages. The results are
//! appended as one record per region to `<dataset>_summary_region.txt` and
//! `<dataset>_summary_bins.txt`.
//!
//! ```rust,no_run
//! use wigsum_core::models::{SummaryConfig, SummaryMode};
//! use wigsum_core::summarize_track_dump;
//!
//! let config = SummaryConfig::new("phastcons", Some(SummaryMode::RegionAndBins));
//! summarize_track_dump("region.wig.txt", &config).unwrap();
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod parse;
pub mod report;
pub mod summary;
pub mod utils;

// re-expose core functions
pub use errors::*;
pub use parse::parse_track_dump;
pub use report::{ReportPaths, append_record};
pub use summary::{summarize_region, summarize_to_reports, summarize_track_dump};
