use crate::error::CamoError;
use crate::report::{BatchReport, RatingReport};

pub fn render_report_json(report: &RatingReport) -> Result<String, CamoError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_batch_json(batch: &BatchReport) -> Result<String, CamoError> {
    Ok(serde_json::to_string_pretty(batch)?)
}
