use super::domain::{Criterion, SubScore};
use super::rules::score_criterion;
use super::table::rubric_for;

/// Signature shared by the six criterion evaluators.
pub type Evaluator = fn(&str) -> SubScore;

/// Evaluators in rubric order.
pub const EVALUATORS: [(Criterion, Evaluator); Criterion::COUNT] = [
    (Criterion::ClarityStructure, clarity_structure),
    (Criterion::Completeness, completeness),
    (Criterion::Specificity, specificity),
    (Criterion::SafetyEthics, safety_ethics),
    (Criterion::Adaptability, adaptability),
    (Criterion::PracticalValue, practical_value),
];

pub fn evaluate(criterion: Criterion, text: &str) -> SubScore {
    score_criterion(rubric_for(criterion), text)
}

/// Required section markers and list formatting (0-2).
pub fn clarity_structure(text: &str) -> SubScore {
    evaluate(Criterion::ClarityStructure, text)
}

/// Coverage of the five essential prompt components (0-2).
pub fn completeness(text: &str) -> SubScore {
    evaluate(Criterion::Completeness, text)
}

/// Directive phrasing, typed parameters and defaults, plus a validation bonus (0-2).
pub fn specificity(text: &str) -> SubScore {
    evaluate(Criterion::Specificity, text)
}

/// Safety and ethical boundary language (0-1).
pub fn safety_ethics(text: &str) -> SubScore {
    evaluate(Criterion::SafetyEthics, text)
}

/// Parameter handling and adaptation language (0-1).
pub fn adaptability(text: &str) -> SubScore {
    evaluate(Criterion::Adaptability, text)
}

/// Real-world applicability, plus a bonus for worked examples (0-2).
pub fn practical_value(text: &str) -> SubScore {
    evaluate(Criterion::PracticalValue, text)
}
