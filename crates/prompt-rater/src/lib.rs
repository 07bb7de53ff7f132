//! Deterministic 0-10 rubric scoring for natural-language prompt documents.
//!
//! Six heuristic evaluators each look for textual signals and award capped
//! half-point scores; the scoring layer sums them per document and builds
//! corpus statistics that the report layer renders as Markdown, JSON and text.

pub mod config;
pub mod error;
pub mod report;
pub mod rubric;
pub mod scoring;
pub mod source;
pub mod telemetry;
