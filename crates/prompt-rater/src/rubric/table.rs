//! The rubric expressed as data.
//!
//! Each criterion is a cap, an ordered list of count rules and an optional
//! bonus. A count rule measures one signal in the text and maps the count to
//! the first band whose minimum it reaches; bands are listed from the
//! highest minimum down. `rules::score_criterion` interprets these tables.

use super::domain::Criterion;
use super::points::Points;

/// Threshold step: reaching `min` signals awards `points` and records `note`.
#[derive(Debug)]
pub struct Band {
    pub min: usize,
    pub points: Points,
    pub note: &'static str,
}

/// A component is present when its marker or the upper-cased second word of
/// its description appears verbatim.
#[derive(Debug)]
pub struct Component {
    pub marker: &'static str,
    pub description: &'static str,
}

impl Component {
    pub fn synonym(&self) -> Option<String> {
        self.description
            .split_whitespace()
            .nth(1)
            .map(str::to_ascii_uppercase)
    }
}

#[derive(Debug)]
pub enum Signal {
    /// Distinct markers present as exact substrings.
    Markers(&'static [&'static str]),
    /// Distinct components present by marker or synonym.
    Components(&'static [Component]),
    /// Distinct keywords present, ASCII case-insensitive.
    Keywords(&'static [&'static str]),
    /// Total case-insensitive regex matches across all patterns.
    PatternMatches(&'static [&'static str]),
    /// 2 when any strong pattern matches, 1 when only a weak one does.
    Formatting {
        strong: &'static [&'static str],
        weak: &'static [&'static str],
    },
}

#[derive(Debug)]
pub struct CountRule {
    pub signal: Signal,
    pub bands: &'static [Band],
    pub miss: &'static str,
}

#[derive(Debug)]
pub enum BonusCondition {
    /// Every marker present as an exact substring.
    AllPresent(&'static [&'static str]),
    /// `marker` present and `word` occurring at least `min_occurrences` times.
    ExampleDepth {
        marker: &'static str,
        word: &'static str,
        min_occurrences: usize,
    },
}

#[derive(Debug)]
pub struct Bonus {
    pub condition: BonusCondition,
    pub points: Points,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct CriterionRubric {
    pub criterion: Criterion,
    pub cap: Points,
    pub rules: &'static [CountRule],
    pub bonus: Option<Bonus>,
}

pub const REQUIRED_SECTIONS: &[&str] = &["ROLE AND GOAL", "TASKS", "USER-PROVIDED PARAMETERS"];

pub const STRONG_FORMATTING: &[&str] = &[r"\d+\.\s+\*\*.*\*\*:", r"[\-\*]\s+\*\*.*\*\*:"];

pub const WEAK_FORMATTING: &[&str] = &[r"\d+\.", r"[\-\*]"];

pub const ESSENTIAL_COMPONENTS: &[Component] = &[
    Component {
        marker: "ROLE AND GOAL",
        description: "role definition",
    },
    Component {
        marker: "TASKS",
        description: "task specification",
    },
    Component {
        marker: "USER-PROVIDED PARAMETERS",
        description: "parameter handling",
    },
    Component {
        marker: "BOUNDARIES",
        description: "safety boundaries",
    },
    Component {
        marker: "PRINCIPLES",
        description: "operating principles",
    },
];

pub const SPECIFICITY_PATTERNS: &[&str] = &[
    r"must\s+\w+",
    r"should\s+\w+",
    r"will\s+\w+",
    r"step\s+\d+",
    r"Example\s+Values?:",
    r"Type:\s+\w+",
    r"Default\s+if",
];

pub const VALIDATION_MARKERS: &[&str] = &["Validation:", "Handling if missing"];

pub const SAFETY_KEYWORDS: &[&str] = &[
    "SAFETY",
    "ETHICAL",
    "BOUNDARIES",
    "avoid",
    "not provide",
    "cannot",
    "must not",
    "disclaimer",
    "professional",
    "qualified",
];

pub const ADAPTABILITY_KEYWORDS: &[&str] = &[
    "parameter",
    "adapt",
    "adjust",
    "Default if",
    "missing or invalid",
    "enum",
    "Example Values",
    "STATE MANAGEMENT",
    "dynamic",
];

pub const PRACTICAL_KEYWORDS: &[&str] = &[
    "example",
    "use case",
    "scenario",
    "implementation",
    "workflow",
    "process",
    "step-by-step",
    "actionable",
    "practical",
];

pub static RUBRIC: [CriterionRubric; Criterion::COUNT] = [
    CriterionRubric {
        criterion: Criterion::ClarityStructure,
        cap: Points::whole(2),
        rules: &[
            CountRule {
                signal: Signal::Markers(REQUIRED_SECTIONS),
                bands: &[
                    Band {
                        min: 3,
                        points: Points::whole(1),
                        note: "Has all required sections",
                    },
                    Band {
                        min: 2,
                        points: Points::HALF,
                        note: "Has most required sections",
                    },
                ],
                miss: "Missing key sections",
            },
            CountRule {
                signal: Signal::Formatting {
                    strong: STRONG_FORMATTING,
                    weak: WEAK_FORMATTING,
                },
                bands: &[
                    Band {
                        min: 2,
                        points: Points::whole(1),
                        note: "Well-organized with clear formatting",
                    },
                    Band {
                        min: 1,
                        points: Points::HALF,
                        note: "Some organization present",
                    },
                ],
                miss: "Poor organization",
            },
        ],
        bonus: None,
    },
    CriterionRubric {
        criterion: Criterion::Completeness,
        cap: Points::whole(2),
        rules: &[CountRule {
            signal: Signal::Components(ESSENTIAL_COMPONENTS),
            bands: &[
                Band {
                    min: 4,
                    points: Points::whole(2),
                    note: "Comprehensive coverage of all components",
                },
                Band {
                    min: 3,
                    points: Points::halves(3),
                    note: "Good coverage of most components",
                },
                Band {
                    min: 2,
                    points: Points::whole(1),
                    note: "Basic coverage of key components",
                },
            ],
            miss: "Incomplete coverage",
        }],
        bonus: None,
    },
    CriterionRubric {
        criterion: Criterion::Specificity,
        cap: Points::whole(2),
        rules: &[CountRule {
            signal: Signal::PatternMatches(SPECIFICITY_PATTERNS),
            bands: &[
                Band {
                    min: 10,
                    points: Points::whole(2),
                    note: "Highly specific with clear instructions",
                },
                Band {
                    min: 5,
                    points: Points::halves(3),
                    note: "Good specificity",
                },
                Band {
                    min: 2,
                    points: Points::whole(1),
                    note: "Some specificity",
                },
            ],
            miss: "Lacks specific instructions",
        }],
        bonus: Some(Bonus {
            condition: BonusCondition::AllPresent(VALIDATION_MARKERS),
            points: Points::HALF,
            note: "includes parameter validation",
        }),
    },
    CriterionRubric {
        criterion: Criterion::SafetyEthics,
        cap: Points::whole(1),
        rules: &[CountRule {
            signal: Signal::Keywords(SAFETY_KEYWORDS),
            bands: &[
                Band {
                    min: 5,
                    points: Points::whole(1),
                    note: "Strong safety and ethical guidelines",
                },
                Band {
                    min: 3,
                    points: Points::HALF,
                    note: "Some safety considerations",
                },
            ],
            miss: "Limited safety guidelines",
        }],
        bonus: None,
    },
    CriterionRubric {
        criterion: Criterion::Adaptability,
        cap: Points::whole(1),
        rules: &[CountRule {
            signal: Signal::Keywords(ADAPTABILITY_KEYWORDS),
            bands: &[
                Band {
                    min: 8,
                    points: Points::whole(1),
                    note: "Highly adaptable with robust parameter handling",
                },
                Band {
                    min: 5,
                    points: Points::HALF,
                    note: "Some adaptability features",
                },
            ],
            miss: "Limited adaptability",
        }],
        bonus: None,
    },
    CriterionRubric {
        criterion: Criterion::PracticalValue,
        cap: Points::whole(2),
        rules: &[CountRule {
            signal: Signal::Keywords(PRACTICAL_KEYWORDS),
            bands: &[
                Band {
                    min: 8,
                    points: Points::whole(2),
                    note: "High practical value with clear use cases",
                },
                Band {
                    min: 5,
                    points: Points::halves(3),
                    note: "Good practical value",
                },
                Band {
                    min: 3,
                    points: Points::whole(1),
                    note: "Some practical value",
                },
            ],
            miss: "Limited practical application",
        }],
        bonus: Some(Bonus {
            condition: BonusCondition::ExampleDepth {
                marker: "Example Values:",
                word: "Example",
                min_occurrences: 3,
            },
            points: Points::HALF,
            note: "includes comprehensive examples",
        }),
    },
];

pub fn rubric_for(criterion: Criterion) -> &'static CriterionRubric {
    // RUBRIC is declared in `Criterion::ordered()` order.
    &RUBRIC[criterion as usize]
}
