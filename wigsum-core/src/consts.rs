// hgWiggle header lines
pub const CHROM_HEADER_PREFIX: &str = "#\tchr";
pub const CHROM_VALUE_OFFSET: usize = 19;
pub const POSITION_HEADER_PREFIX: &str = "#\tposition";
pub const POSITION_VALUE_OFFSET: usize = 22;

// region used when the dump is empty
pub const EMPTY_REGION_CHROM: &str = "chrUn";
pub const EMPTY_REGION_START: u64 = 1000;
pub const EMPTY_REGION_END: u64 = 9999;

pub const DEFAULT_N_BINS: usize = 50;

// report files
pub const REGION_REPORT_SUFFIX: &str = "_summary_region.txt";
pub const BINS_REPORT_SUFFIX: &str = "_summary_bins.txt";
pub const FIELD_DELIMITER: char = '\t';
pub const RECORD_DELIMITER: char = '\n';
