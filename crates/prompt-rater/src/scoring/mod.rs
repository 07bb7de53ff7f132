//! Aggregates rubric sub-scores into per-document ratings and corpus reports.

mod corpus;
mod domain;

#[cfg(test)]
mod tests;

pub use corpus::{CorpusReport, ScoreMark, DEFAULT_SLICE_LEN};
pub use domain::{Document, DocumentBody, Rating};

use crate::rubric::{SubScore, EVALUATORS};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

const PROGRESS_INTERVAL: usize = 50;

/// Runs every criterion against the document text and sums the results.
///
/// Unreadable documents skip evaluation and receive a zero rating that
/// carries the read failure.
pub fn rate(document: &Document) -> Rating {
    let text = match &document.body {
        DocumentBody::Text(text) => text.as_str(),
        DocumentBody::Unreadable(reason) => {
            warn!(document = %document.name, %reason, "document unreadable; recording zero rating");
            return Rating::degraded(document.name.clone(), reason);
        }
    };

    let sub_scores: Vec<SubScore> = EVALUATORS
        .iter()
        .map(|(_, evaluator)| evaluator(text))
        .collect();
    let rating = Rating::scored(document.name.clone(), sub_scores);
    debug!(document = %rating.name, total = %rating.total_score, "document rated");
    rating
}

/// Rates every document on the rayon pool and ranks the results by total
/// score, highest first. Ties keep their input order.
pub fn rate_all(documents: &[Document]) -> Vec<Rating> {
    let total = documents.len();
    let processed = AtomicUsize::new(0);

    let mut ratings: Vec<Rating> = documents
        .par_iter()
        .map(|document| {
            let rating = rate(document);
            let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_INTERVAL == 0 {
                info!(processed = done, total, "rating progress");
            }
            rating
        })
        .collect();

    corpus::rank(&mut ratings);
    ratings
}

/// Corpus statistics with the default top/bottom slice length.
pub fn summarize(ratings: &[Rating]) -> CorpusReport {
    summarize_with_limit(ratings, DEFAULT_SLICE_LEN)
}

pub fn summarize_with_limit(ratings: &[Rating], slice_len: usize) -> CorpusReport {
    corpus::build_report(ratings, slice_len)
}
