use crate::consts::FIELD_DELIMITER;
use crate::utils::format_score;

///
/// The reduced form of one region: its whole-region average and, in
/// [RegionAndBins](crate::models::SummaryMode::RegionAndBins) mode, the
/// per-bin averages.
///
#[derive(PartialEq, Debug, Clone)]
pub struct RegionSummary {
    pub name: String,
    pub average: f64,
    pub bins: Option<Vec<f64>>,
}

impl RegionSummary {
    ///
    /// Render the record for the region report: `name<TAB>average`
    ///
    pub fn region_record(&self) -> String {
        format!("{}{}{}", self.name, FIELD_DELIMITER, format_score(self.average))
    }

    ///
    /// Render the record for the bins report: the name followed by every
    /// bin average, each field terminated by a tab. The record never ends
    /// in a newline.
    ///
    pub fn bins_record(&self) -> Option<String> {
        let bins = self.bins.as_ref()?;

        let mut record = String::with_capacity(self.name.len() + bins.len() * 8);
        record.push_str(&self.name);
        record.push(FIELD_DELIMITER);
        for bin in bins {
            record.push_str(&format_score(*bin));
            record.push(FIELD_DELIMITER);
        }

        Some(record)
    }
}
