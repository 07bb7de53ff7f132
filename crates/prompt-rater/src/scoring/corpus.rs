use super::domain::Rating;
use crate::rubric::Points;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of leaders and laggards listed in a corpus report.
pub const DEFAULT_SLICE_LEN: usize = 10;

/// Name and total of a single rated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMark {
    pub name: String,
    pub total_score: Points,
}

impl From<&Rating> for ScoreMark {
    fn from(rating: &Rating) -> Self {
        Self {
            name: rating.name.clone(),
            total_score: rating.total_score,
        }
    }
}

/// Corpus-level statistics over ratings ranked by total score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusReport {
    pub count: usize,
    pub mean_score: f64,
    /// Whole-point score band to number of documents in it.
    pub histogram: BTreeMap<u8, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<ScoreMark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<ScoreMark>,
    pub top: Vec<Rating>,
    /// Lowest ranked ratings in ranking order; empty for corpora smaller than the slice.
    pub bottom: Vec<Rating>,
}

impl CorpusReport {
    /// Share of the corpus in `band`, as a percentage.
    pub fn band_share(&self, band: u8) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let members = self.histogram.get(&band).copied().unwrap_or(0);
        members as f64 / self.count as f64 * 100.0
    }
}

pub(crate) fn rank(ratings: &mut [Rating]) {
    // slice::sort_by is stable, so equal totals keep discovery order.
    ratings.sort_by(|left, right| right.total_score.cmp(&left.total_score));
}

pub(crate) fn build_report(ratings: &[Rating], slice_len: usize) -> CorpusReport {
    let mut ranked = ratings.to_vec();
    rank(&mut ranked);

    let count = ranked.len();
    // Summed in half points; a corpus total does not fit in `Points`.
    let total_halves: u64 = ranked
        .iter()
        .map(|rating| u64::from(rating.total_score.half_units()))
        .sum();
    let mean_score = if count == 0 {
        0.0
    } else {
        total_halves as f64 / 2.0 / count as f64
    };

    let mut histogram = BTreeMap::new();
    for rating in &ranked {
        *histogram.entry(rating.total_score.band()).or_insert(0) += 1;
    }

    let top = ranked.iter().take(slice_len).cloned().collect();
    let bottom = if count >= slice_len {
        ranked[count - slice_len..].to_vec()
    } else {
        Vec::new()
    };

    CorpusReport {
        count,
        mean_score,
        histogram,
        highest: ranked.first().map(ScoreMark::from),
        lowest: ranked.last().map(ScoreMark::from),
        top,
        bottom,
    }
}
