use crate::rubric::{Criterion, Points, SubScore};
use serde::Serialize;

/// Text of a document, or the reason it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentBody {
    Text(String),
    Unreadable(String),
}

/// Named input to the rubric, supplied by a document source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    pub body: DocumentBody,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: DocumentBody::Text(text.into()),
        }
    }

    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: DocumentBody::Unreadable(reason.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            DocumentBody::Text(text) => Some(text),
            DocumentBody::Unreadable(_) => None,
        }
    }
}

/// Rubric outcome for one document.
///
/// `sub_scores` always holds one entry per criterion in rubric order and
/// `total_score` is their exact sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub name: String,
    pub sub_scores: Vec<SubScore>,
    pub total_score: Points,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

impl Rating {
    pub(crate) fn scored(name: String, sub_scores: Vec<SubScore>) -> Self {
        let total_score = sub_scores.iter().map(|score| score.points).sum();
        Self {
            name,
            sub_scores,
            total_score,
            read_error: None,
        }
    }

    /// Zero rating recorded when the document text could not be obtained.
    pub(crate) fn degraded(name: String, reason: &str) -> Self {
        let message = format!("Failed to read file: {reason}");
        let sub_scores = Criterion::ordered()
            .into_iter()
            .map(|criterion| SubScore::zero(criterion, message.clone()))
            .collect();
        Self {
            name,
            sub_scores,
            total_score: Points::ZERO,
            read_error: Some(message),
        }
    }

    pub fn sub_score(&self, criterion: Criterion) -> Option<&SubScore> {
        self.sub_scores
            .iter()
            .find(|score| score.criterion == criterion)
    }

    pub fn points(&self, criterion: Criterion) -> Points {
        self.sub_score(criterion)
            .map(|score| score.points)
            .unwrap_or_default()
    }

    pub fn rationale(&self, criterion: Criterion) -> &str {
        self.sub_score(criterion)
            .map(|score| score.rationale.as_str())
            .unwrap_or_default()
    }

    pub fn is_degraded(&self) -> bool {
        self.read_error.is_some()
    }
}
