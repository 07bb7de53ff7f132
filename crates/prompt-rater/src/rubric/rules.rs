use super::domain::SubScore;
use super::points::Points;
use super::table::{BonusCondition, Component, CountRule, CriterionRubric, Signal, RUBRIC};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::OnceLock;

static COMPILED: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

fn compiled_patterns() -> &'static HashMap<&'static str, Regex> {
    COMPILED.get_or_init(|| {
        let mut patterns = HashMap::new();
        for entry in &RUBRIC {
            for rule in entry.rules {
                match &rule.signal {
                    Signal::PatternMatches(list) => {
                        for source in *list {
                            patterns.insert(*source, build(source, true));
                        }
                    }
                    Signal::Formatting { strong, weak } => {
                        for source in strong.iter().chain(weak.iter()) {
                            patterns.insert(*source, build(source, false));
                        }
                    }
                    _ => {}
                }
            }
        }
        patterns
    })
}

/// Case-insensitive patterns fold ASCII only, matching keyword lookup.
fn build(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .unicode(!case_insensitive)
        .build()
        .expect("rubric patterns are valid regular expressions")
}

fn pattern(source: &str) -> &'static Regex {
    &compiled_patterns()[source]
}

/// Scores one criterion: every count rule contributes its best band (or its
/// miss note), the bonus is added when it holds, and the sum is capped.
pub(crate) fn score_criterion(rubric: &CriterionRubric, text: &str) -> SubScore {
    let mut points = Points::ZERO;
    let mut notes: Vec<&'static str> = Vec::with_capacity(rubric.rules.len() + 1);

    for rule in rubric.rules {
        let (awarded, note) = apply_rule(rule, text);
        points += awarded;
        notes.push(note);
    }

    if let Some(bonus) = &rubric.bonus {
        if bonus_holds(&bonus.condition, text) {
            points += bonus.points;
            notes.push(bonus.note);
        }
    }

    SubScore {
        criterion: rubric.criterion,
        points: points.min(rubric.cap),
        rationale: notes.join("; "),
    }
}

fn apply_rule(rule: &CountRule, text: &str) -> (Points, &'static str) {
    let count = count_signal(&rule.signal, text);
    rule.bands
        .iter()
        .find(|band| count >= band.min)
        .map(|band| (band.points, band.note))
        .unwrap_or((Points::ZERO, rule.miss))
}

pub(crate) fn count_signal(signal: &Signal, text: &str) -> usize {
    match signal {
        Signal::Markers(markers) => markers.iter().filter(|marker| text.contains(*marker)).count(),
        Signal::Components(components) => components
            .iter()
            .filter(|component| component_present(component, text))
            .count(),
        Signal::Keywords(keywords) => {
            let lowered = text.to_ascii_lowercase();
            keywords
                .iter()
                .filter(|keyword| lowered.contains(&keyword.to_ascii_lowercase()))
                .count()
        }
        Signal::PatternMatches(patterns) => patterns
            .iter()
            .map(|source| pattern(source).find_iter(text).count())
            .sum(),
        Signal::Formatting { strong, weak } => {
            if strong.iter().any(|source| pattern(source).is_match(text)) {
                2
            } else if weak.iter().any(|source| pattern(source).is_match(text)) {
                1
            } else {
                0
            }
        }
    }
}

fn component_present(component: &Component, text: &str) -> bool {
    text.contains(component.marker)
        || component
            .synonym()
            .is_some_and(|synonym| text.contains(synonym.as_str()))
}

fn bonus_holds(condition: &BonusCondition, text: &str) -> bool {
    match condition {
        BonusCondition::AllPresent(markers) => markers.iter().all(|marker| text.contains(*marker)),
        BonusCondition::ExampleDepth {
            marker,
            word,
            min_occurrences,
        } => text.contains(*marker) && text.matches(*word).count() >= *min_occurrences,
    }
}
