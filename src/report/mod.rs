pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::buffer::CropRect;
use crate::model::color::Hsv;
use crate::model::config::{RatingConfig, RatingMode};
use crate::model::quality::CamoQuality;
use crate::pipeline::stage3_accumulate::{AggregateStats, Group};
use crate::pipeline::{FrameEvaluation, FrameOutcome};

pub const TOOL_NAME: &str = "camo-detect";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Rated,
    Undetermined,
    OutOfView,
    Error,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Rated => "rated",
            ReportStatus::Undetermined => "undetermined",
            ReportStatus::OutOfView => "out_of_view",
            ReportStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_luminance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_hsv: Option<Hsv>,
}

impl GroupSummary {
    fn from_stats(stats: &AggregateStats, mode: RatingMode) -> Self {
        match mode {
            RatingMode::Luminance => Self {
                count: stats.count,
                mean_luminance: stats.mean_luminance(),
                mean_hsv: None,
            },
            RatingMode::Hsv => Self {
                count: stats.count,
                mean_luminance: None,
                mean_hsv: stats.mean_hsv(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReport {
    pub tool: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: ReportStatus,
    pub mode: RatingMode,
    pub sensitivity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<GroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<GroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<CamoQuality>,
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RatingReport {
    pub fn from_evaluation(name: Option<String>, eval: &FrameEvaluation, config: &RatingConfig) -> Self {
        let mut report = Self::empty(name, config, ReportStatus::Rated);
        report.crop = eval.crop;
        match &eval.outcome {
            FrameOutcome::OutOfView => report.status = ReportStatus::OutOfView,
            FrameOutcome::Undetermined { group } => {
                report.status = ReportStatus::Undetermined;
                report.empty_group = Some(*group);
            }
            FrameOutcome::Rated { rating, detected } => {
                let mode = rating.stats.mode;
                report.background = Some(GroupSummary::from_stats(&rating.stats.background, mode));
                report.target = Some(GroupSummary::from_stats(&rating.stats.target, mode));
                report.rating = Some(rating.rating);
                report.label = Some(rating.label);
                report.detected = *detected;
            }
        }
        report
    }

    pub fn failed(name: Option<String>, config: &RatingConfig, error: String) -> Self {
        let mut report = Self::empty(name, config, ReportStatus::Error);
        report.error = Some(error);
        report
    }

    fn empty(name: Option<String>, config: &RatingConfig, status: ReportStatus) -> Self {
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            name,
            status,
            mode: config.mode,
            sensitivity: config.sensitivity.value(),
            crop: None,
            background: None,
            target: None,
            rating: None,
            label: None,
            detected: false,
            empty_group: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub frames: usize,
    pub rated: usize,
    pub detected: usize,
    pub undetermined: usize,
    pub out_of_view: usize,
    pub errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_rating: Option<f32>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[RatingReport]) -> Self {
        let count = |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();
        let ratings = reports.iter().filter_map(|r| r.rating).collect::<Vec<_>>();
        let mean_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().map(|&r| r as f64).sum::<f64>() as f32 / ratings.len() as f32)
        };
        Self {
            frames: reports.len(),
            rated: count(ReportStatus::Rated),
            detected: reports.iter().filter(|r| r.detected).count(),
            undetermined: count(ReportStatus::Undetermined),
            out_of_view: count(ReportStatus::OutOfView),
            errors: count(ReportStatus::Error),
            mean_rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub tool: &'static str,
    pub version: &'static str,
    pub summary: BatchSummary,
    pub frames: Vec<RatingReport>,
}

impl BatchReport {
    pub fn new(frames: Vec<RatingReport>) -> Self {
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            summary: BatchSummary::from_reports(&frames),
            frames,
        }
    }
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
