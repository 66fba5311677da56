use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Significant digits used when rendering scores in the reports.
const SCORE_SIGNIFICANT_DIGITS: usize = 12;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Split a token on its first non-digit character.
///
/// Everything before that character is returned as the first value,
/// everything after it (the separator itself excluded) as the second.
/// Returns `None` if the token is made of digits only.
///
pub fn split_at_separator(token: &str) -> Option<(&str, &str)> {
    let (idx, sep) = token.char_indices().find(|(_, c)| !c.is_ascii_digit())?;
    Some((&token[..idx], &token[idx + sep.len_utf8()..]))
}

///
/// Arithmetic mean of a slice, `None` when the slice is empty.
///
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

///
/// Render a score the way the conservation reports always have: the
/// shortest form with at most 12 significant digits, scientific notation
/// for very small or very large magnitudes, and a trailing `.0` on
/// integral values (`0.0`, `0.28`, `0.333333333333`, `1e-05`).
///
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // rounding to the significant digits may bump the exponent, so take it from the rounded form
    let scientific = format!("{:.*e}", SCORE_SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SCORE_SIGNIFICANT_DIGITS as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let decimals = (SCORE_SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let mut rendered = trim_fraction(&fixed).to_string();
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
