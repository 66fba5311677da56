use thiserror::Error;

#[derive(Error, Debug)]
pub enum WigsumError {
    #[error("No separator found in '{token}' (line {line})")]
    MissingSeparator { line: usize, token: String },

    #[error("Can't parse coordinate '{value}' (line {line})")]
    InvalidCoordinate { line: usize, value: String },

    #[error("Can't parse score '{value}' (line {line})")]
    InvalidScore { line: usize, value: String },

    #[error("Header line is too short to hold a value (line {line}): {header:?}")]
    HeaderTooShort { line: usize, header: String },

    #[error("Invalid region span {start}-{end} (line {line})")]
    InvalidSpan { line: usize, start: u64, end: u64 },

    #[error("Data line found before the position header (line {line})")]
    DataBeforePosition { line: usize },

    #[error("Position {position} falls outside the region {start}-{end} (line {line})")]
    PositionOutOfRange {
        line: usize,
        position: u64,
        start: u64,
        end: u64,
    },

    #[error("Corrupted track dump, no {0} header found")]
    MissingHeader(&'static str),

    #[error("Region of size {size} is too small for {n_bins} bins")]
    EmptyBin { size: u64, n_bins: usize },

    #[error("Region has no values to average")]
    EmptyRegion,

    #[error("Number of bins must be at least 1")]
    InvalidBinCount,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for wigsum operations.
pub type Result<T> = std::result::Result<T, WigsumError>;
