use super::points::Points;
use serde::Serialize;

/// The six weighted criteria of the prompt rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ClarityStructure,
    Completeness,
    Specificity,
    SafetyEthics,
    Adaptability,
    PracticalValue,
}

impl Criterion {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Criterion; Criterion::COUNT] {
        [
            Criterion::ClarityStructure,
            Criterion::Completeness,
            Criterion::Specificity,
            Criterion::SafetyEthics,
            Criterion::Adaptability,
            Criterion::PracticalValue,
        ]
    }

    /// Stable key used in serialized reports.
    pub const fn key(self) -> &'static str {
        match self {
            Criterion::ClarityStructure => "clarity_structure",
            Criterion::Completeness => "completeness",
            Criterion::Specificity => "specificity",
            Criterion::SafetyEthics => "safety_ethics",
            Criterion::Adaptability => "adaptability",
            Criterion::PracticalValue => "practical_value",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::ClarityStructure => "Clarity",
            Criterion::Completeness => "Completeness",
            Criterion::Specificity => "Specificity",
            Criterion::SafetyEthics => "Safety",
            Criterion::Adaptability => "Adaptability",
            Criterion::PracticalValue => "Practical",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Criterion::ClarityStructure => "C",
            Criterion::Completeness => "Comp",
            Criterion::Specificity => "S",
            Criterion::SafetyEthics => "Safe",
            Criterion::Adaptability => "A",
            Criterion::PracticalValue => "P",
        }
    }

    /// Maximum points the criterion can contribute to a total.
    pub fn cap(self) -> Points {
        super::table::rubric_for(self).cap
    }
}

/// Bounded contribution of one criterion, with the notes that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubScore {
    pub criterion: Criterion,
    pub points: Points,
    pub rationale: String,
}

impl SubScore {
    pub fn zero(criterion: Criterion, rationale: impl Into<String>) -> Self {
        Self {
            criterion,
            points: Points::ZERO,
            rationale: rationale.into(),
        }
    }
}
