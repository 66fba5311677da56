use std::fmt::{self, Display};

use crate::consts::{EMPTY_REGION_CHROM, EMPTY_REGION_END, EMPTY_REGION_START};

///
/// TrackRegion struct, the densified scores of one region of a track dump.
///
/// `values[k]` holds the score of the slot `k` chosen by the parser's
/// [IndexPolicy](crate::models::IndexPolicy); slots never mentioned in the
/// dump are `0.0`.
///
#[derive(PartialEq, Debug, Clone)]
pub struct TrackRegion {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub size: u64,
    pub values: Vec<f64>,
}

impl TrackRegion {
    ///
    /// Number of positions in `start..=end`, `None` when `end < start` or
    /// the span does not fit in a `u64`.
    ///
    pub fn span_size(start: u64, end: u64) -> Option<u64> {
        end.checked_sub(start)?.checked_add(1)
    }

    ///
    /// Create a zero filled region spanning `start..=end`.
    ///
    /// Returns `None` for an invalid span or one too large to allocate.
    ///
    pub fn with_span(chr: &str, start: u64, end: u64) -> Option<Self> {
        let size = TrackRegion::span_size(start, end)?;
        let len = usize::try_from(size).ok()?;

        let mut values = Vec::new();
        values.try_reserve_exact(len).ok()?;
        values.resize(len, 0.0);

        Some(TrackRegion {
            chr: chr.to_string(),
            start,
            end,
            size,
            values,
        })
    }

    ///
    /// The placeholder region reported for an empty track dump.
    ///
    /// It holds a single `0.0` value even though `size == 0`, so its
    /// average and all of its bins come out as `0.0`.
    ///
    pub fn empty() -> Self {
        TrackRegion {
            chr: EMPTY_REGION_CHROM.to_string(),
            start: EMPTY_REGION_START,
            end: EMPTY_REGION_END,
            size: 0,
            values: vec![0.0],
        }
    }

    ///
    /// Get the `chr:start-end` label used in the reports
    ///
    pub fn name(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl Display for TrackRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
