use crate::rubric::{Criterion, Points};
use crate::scoring::{CorpusReport, Rating, ScoreMark};
use serde::Serialize;

/// Per-criterion points plus the total, in rubric order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub clarity_structure: Points,
    pub completeness: Points,
    pub specificity: Points,
    pub safety_ethics: Points,
    pub adaptability: Points,
    pub practical_value: Points,
    pub total_score: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationaleDetails {
    pub clarity_structure: String,
    pub completeness: String,
    pub specificity: String,
    pub safety_ethics: String,
    pub adaptability: String,
    pub practical_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serialized shape of one rating in the detailed dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRecord {
    pub filename: String,
    pub scores: ScoreBreakdown,
    pub details: RationaleDetails,
}

impl From<&Rating> for RatingRecord {
    fn from(rating: &Rating) -> Self {
        let scores = ScoreBreakdown {
            clarity_structure: rating.points(Criterion::ClarityStructure),
            completeness: rating.points(Criterion::Completeness),
            specificity: rating.points(Criterion::Specificity),
            safety_ethics: rating.points(Criterion::SafetyEthics),
            adaptability: rating.points(Criterion::Adaptability),
            practical_value: rating.points(Criterion::PracticalValue),
            total_score: rating.total_score,
        };
        let details = RationaleDetails {
            clarity_structure: rating.rationale(Criterion::ClarityStructure).to_string(),
            completeness: rating.rationale(Criterion::Completeness).to_string(),
            specificity: rating.rationale(Criterion::Specificity).to_string(),
            safety_ethics: rating.rationale(Criterion::SafetyEthics).to_string(),
            adaptability: rating.rationale(Criterion::Adaptability).to_string(),
            practical_value: rating.rationale(Criterion::PracticalValue).to_string(),
            error: rating.read_error.clone(),
        };

        Self {
            filename: rating.name.clone(),
            scores,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramEntry {
    pub score: u8,
    pub count: usize,
    pub percentage: f64,
}

/// Compact corpus summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummaryView {
    pub count: usize,
    pub mean_score: f64,
    pub distribution: Vec<HistogramEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<ScoreMark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<ScoreMark>,
    pub top: Vec<ScoreMark>,
    pub bottom: Vec<ScoreMark>,
}

impl From<&CorpusReport> for CorpusSummaryView {
    fn from(report: &CorpusReport) -> Self {
        Self {
            count: report.count,
            mean_score: report.mean_score,
            distribution: distribution(report),
            highest: report.highest.clone(),
            lowest: report.lowest.clone(),
            top: report.top.iter().map(ScoreMark::from).collect(),
            bottom: report.bottom.iter().map(ScoreMark::from).collect(),
        }
    }
}

/// Histogram bands from the highest score down.
pub fn distribution(report: &CorpusReport) -> Vec<HistogramEntry> {
    report
        .histogram
        .iter()
        .rev()
        .map(|(score, count)| HistogramEntry {
            score: *score,
            count: *count,
            percentage: report.band_share(*score),
        })
        .collect()
}
