use crate::consts::DEFAULT_N_BINS;

/// What gets computed and which reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Whole-region average plus per-bin averages (mode `1`).
    RegionAndBins,
    /// Whole-region average only (mode `2`).
    RegionOnly,
}

impl SummaryMode {
    ///
    /// Map a numeric mode to a [SummaryMode]. Unknown codes give `None`,
    /// which callers treat as "write nothing".
    ///
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(SummaryMode::RegionAndBins),
            2 => Some(SummaryMode::RegionOnly),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            SummaryMode::RegionAndBins => 1,
            SummaryMode::RegionOnly => 2,
        }
    }
}

/// How an absolute genomic position maps to a slot of the value array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// `position - start`
    #[default]
    Natural,
    /// `position - start + 1`, the placement used by older conservation reports.
    Shifted,
}

impl IndexPolicy {
    ///
    /// Get the array slot for `position` in a region starting at `start`.
    /// Returns `None` if the position lies before the first slot or the
    /// slot can't be represented.
    ///
    pub fn slot(&self, position: u64, start: u64) -> Option<usize> {
        let slot = match self {
            IndexPolicy::Natural => position.checked_sub(start)?,
            IndexPolicy::Shifted => position.checked_add(1)?.checked_sub(start)?,
        };
        usize::try_from(slot).ok()
    }
}

///
/// Everything one summarizing run needs besides the input itself.
///
/// A `mode` of `None` means the requested mode was not recognized, and
/// the run writes no output at all.
///
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub dataset: String,
    pub mode: Option<SummaryMode>,
    pub n_bins: usize,
    pub index_policy: IndexPolicy,
}

impl SummaryConfig {
    pub fn new(dataset: &str, mode: Option<SummaryMode>) -> Self {
        SummaryConfig {
            dataset: dataset.to_string(),
            mode,
            n_bins: DEFAULT_N_BINS,
            index_policy: IndexPolicy::default(),
        }
    }

    pub fn with_n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }

    pub fn with_index_policy(mut self, index_policy: IndexPolicy) -> Self {
        self.index_policy = index_policy;
        self
    }
}
