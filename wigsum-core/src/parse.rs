//! Reading of `hgWiggle` track dumps into a dense [TrackRegion].
//!
//! A dump covers exactly one region and looks like this:
//!
//! ```text
//! #	chrom specified: chr1
//! #	position specified: 1000-1004
//! 1001	0.5
//! 1003	0.9
//! ```
//!
//! The two header lines carry the region, every line that starts with a digit is a
//! `position<sep>score` pair. Anything else is ignored.
use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::consts::{
    CHROM_HEADER_PREFIX, CHROM_VALUE_OFFSET, POSITION_HEADER_PREFIX, POSITION_VALUE_OFFSET,
};
use crate::errors::{Result, WigsumError};
use crate::models::{IndexPolicy, TrackRegion};
use crate::utils::{get_dynamic_reader, split_at_separator};

impl TrackRegion {
    ///
    /// Create a new [TrackRegion] from a track dump on disk.
    ///
    /// # Arguments:
    /// - path: path to the dump, `.gz` files are decompressed on the fly
    /// - index_policy: how positions map to slots of the value array
    pub fn from_path(path: &Path, index_policy: IndexPolicy) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        TrackRegion::from_reader(reader, index_policy)
    }

    ///
    /// Create a new [TrackRegion] from any buffered reader over a track dump.
    ///
    /// A reader that yields no bytes at all produces [TrackRegion::empty].
    ///
    pub fn from_reader<R: BufRead>(mut reader: R, index_policy: IndexPolicy) -> Result<Self> {
        let mut chr: Option<String> = None;
        // chromosome is filled in once the whole dump has been read
        let mut region: Option<TrackRegion> = None;

        let mut bytes_read: usize = 0;
        let mut line_number: usize = 0;
        let mut data_lines: usize = 0;
        let mut buffer = String::new();

        loop {
            buffer.clear();
            let n = reader.read_line(&mut buffer)?;
            if n == 0 {
                break;
            }
            bytes_read += n;
            line_number += 1;

            let line = buffer.trim_end_matches(['\n', '\r']);

            if line.starts_with(CHROM_HEADER_PREFIX) {
                chr = Some(parse_chrom_header(line, line_number)?);
            } else if line.starts_with(POSITION_HEADER_PREFIX) {
                // a repeated position header starts the region over
                region = Some(parse_position_header(line, line_number)?);
            } else if line.starts_with(|c: char| c.is_ascii_digit()) {
                let region = region
                    .as_mut()
                    .ok_or(WigsumError::DataBeforePosition { line: line_number })?;
                let (position, score) = parse_data_line(line, line_number)?;

                let slot = index_policy
                    .slot(position, region.start)
                    .filter(|slot| *slot < region.values.len())
                    .ok_or(WigsumError::PositionOutOfRange {
                        line: line_number,
                        position,
                        start: region.start,
                        end: region.end,
                    })?;

                region.values[slot] = score;
                data_lines += 1;
            }
        }

        if bytes_read == 0 {
            debug!("Empty track dump, reporting placeholder region");
            return Ok(TrackRegion::empty());
        }

        let chr = chr.ok_or(WigsumError::MissingHeader("chromosome"))?;
        let mut region = region.ok_or(WigsumError::MissingHeader("position"))?;
        region.chr = chr;

        debug!(
            "Parsed {} with {} data lines ({:?} indexing)",
            region, data_lines, index_policy
        );

        Ok(region)
    }
}

///
/// Parse a track dump, see [TrackRegion::from_path].
///
pub fn parse_track_dump<P: AsRef<Path>>(
    path: P,
    index_policy: IndexPolicy,
) -> Result<TrackRegion> {
    TrackRegion::from_path(path.as_ref(), index_policy)
}

fn header_value(line: &str, offset: usize, line_number: usize) -> Result<&str> {
    match line.get(offset..) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WigsumError::HeaderTooShort {
            line: line_number,
            header: line.to_string(),
        }),
    }
}

fn parse_chrom_header(line: &str, line_number: usize) -> Result<String> {
    header_value(line, CHROM_VALUE_OFFSET, line_number).map(|chr| chr.to_string())
}

fn parse_position_header(line: &str, line_number: usize) -> Result<TrackRegion> {
    let token = header_value(line, POSITION_VALUE_OFFSET, line_number)?;
    let (start, end) =
        split_at_separator(token).ok_or_else(|| WigsumError::MissingSeparator {
            line: line_number,
            token: token.to_string(),
        })?;

    let start = parse_coordinate(start, line_number)?;
    let end = parse_coordinate(end, line_number)?;

    TrackRegion::with_span("", start, end).ok_or(WigsumError::InvalidSpan {
        line: line_number,
        start,
        end,
    })
}

fn parse_data_line(line: &str, line_number: usize) -> Result<(u64, f64)> {
    let (position, score) =
        split_at_separator(line).ok_or_else(|| WigsumError::MissingSeparator {
            line: line_number,
            token: line.to_string(),
        })?;

    let position = parse_coordinate(position, line_number)?;
    let score = score
        .trim()
        .parse::<f64>()
        .map_err(|_| WigsumError::InvalidScore {
            line: line_number,
            value: score.to_string(),
        })?;

    Ok((position, score))
}

fn parse_coordinate(value: &str, line_number: usize) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| WigsumError::InvalidCoordinate {
            line: line_number,
            value: value.to_string(),
        })
}
