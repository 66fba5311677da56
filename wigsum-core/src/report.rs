use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::consts::{BINS_REPORT_SUFFIX, RECORD_DELIMITER, REGION_REPORT_SUFFIX};
use crate::errors::Result;

///
/// The two report files that belong to a dataset prefix.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub region: PathBuf,
    pub bins: PathBuf,
}

impl ReportPaths {
    pub fn new(dataset: &str) -> Self {
        ReportPaths {
            region: PathBuf::from(format!("{}{}", dataset, REGION_REPORT_SUFFIX)),
            bins: PathBuf::from(format!("{}{}", dataset, BINS_REPORT_SUFFIX)),
        }
    }
}

///
/// Append one record to a report file.
///
/// The file is created when missing. Records are separated by a newline
/// written *before* every record except the first one, so a report never
/// starts or ends with a newline.
///
/// # Arguments
/// - path: the report to append to
/// - record: the record, without any line terminator
pub fn append_record<T: AsRef<Path>>(path: T, record: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let has_content = match fs::metadata(path) {
        Ok(metadata) => metadata.len() > 0,
        Err(err) if err.kind() == ErrorKind::NotFound => false,
        Err(err) => return Err(err.into()),
    };

    let mut line = String::with_capacity(record.len() + 1);
    if has_content {
        line.push(RECORD_DELIMITER);
    }
    line.push_str(record);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_report_paths() {
        let paths = ReportPaths::new("results/phastcons");
        assert_eq!(paths.region, PathBuf::from("results/phastcons_summary_region.txt"));
        assert_eq!(paths.bins, PathBuf::from("results/phastcons_summary_bins.txt"));
    }

    #[rstest]
    fn test_append_separates_records() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("report.txt");

        append_record(&path, "chr1:1-2\t0.5").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "chr1:1-2\t0.5");

        append_record(&path, "chr1:3-4\t0.0").unwrap();
        append_record(&path, "chr1:5-6\t1.0").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "chr1:1-2\t0.5\nchr1:3-4\t0.0\nchr1:5-6\t1.0"
        );
    }

    #[rstest]
    fn test_append_to_existing_empty_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("report.txt");
        fs::write(&path, "").unwrap();

        append_record(&path, "chrUn:1000-9999\t0.0").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "chrUn:1000-9999\t0.0");
    }

    #[rstest]
    fn test_append_creates_parent_directories() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/deeper/report.txt");

        append_record(&path, "x").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }
}
