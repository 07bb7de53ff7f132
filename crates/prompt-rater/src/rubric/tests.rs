use super::*;

const WELL_FORMED: &str = "ROLE AND GOAL\nYou are a meticulous travel planner.\n\n\
TASKS\n1. **Plan**: outline the itinerary\n2. **Budget**: estimate costs\n\n\
USER-PROVIDED PARAMETERS\n- destination";

fn sample_texts() -> Vec<&'static str> {
    vec![
        "",
        "plain words with no structure",
        WELL_FORMED,
        "ÜBER prompt — ünïcödé • bullets\n* item",
        "must must must must must must must must must must must must must must",
        "SAFETY ETHICAL BOUNDARIES avoid not provide cannot must not disclaimer professional qualified \
         parameter adapt adjust Default if missing or invalid enum Example Values: STATE MANAGEMENT dynamic \
         example use case scenario implementation workflow process step-by-step actionable practical \
         Example Example Validation: Handling if missing PRINCIPLES TASKS ROLE AND GOAL",
    ]
}

#[test]
fn clarity_awards_full_marks_for_sections_and_bold_numbering() {
    let score = clarity_structure(WELL_FORMED);

    assert_eq!(score.criterion, Criterion::ClarityStructure);
    assert_eq!(score.points, Points::whole(2));
    assert_eq!(
        score.rationale,
        "Has all required sections; Well-organized with clear formatting"
    );
}

#[test]
fn clarity_gives_half_points_for_partial_structure() {
    let score = clarity_structure("ROLE AND GOAL\nTASKS\n1. do the thing");

    assert_eq!(score.points, Points::whole(1));
    assert_eq!(
        score.rationale,
        "Has most required sections; Some organization present"
    );
}

#[test]
fn clarity_scores_zero_for_empty_text() {
    let score = clarity_structure("");

    assert_eq!(score.points, Points::ZERO);
    assert_eq!(score.rationale, "Missing key sections; Poor organization");
}

#[test]
fn completeness_bands_follow_component_count() {
    let all = "ROLE AND GOAL\nTASKS\nUSER-PROVIDED PARAMETERS\nBOUNDARIES\nPRINCIPLES";
    assert_eq!(completeness(all).points, Points::whole(2));
    assert_eq!(
        completeness(all).rationale,
        "Comprehensive coverage of all components"
    );

    let three = "ROLE AND GOAL\nTASKS\nBOUNDARIES";
    assert_eq!(completeness(three).points, Points::halves(3));

    let two = "TASKS and the HANDLING of inputs";
    assert_eq!(completeness(two).points, Points::whole(1));

    let one = completeness("PRINCIPLES only");
    assert_eq!(one.points, Points::ZERO);
    assert_eq!(one.rationale, "Incomplete coverage");
}

#[test]
fn specificity_caps_bonus_at_two() {
    let text = "must a must b must c must d must e should f should g will h will i step 1\n\
                Validation: non-empty\nHandling if missing: ask the user";
    let score = specificity(text);

    assert_eq!(score.points, Points::whole(2));
    assert_eq!(
        score.rationale,
        "Highly specific with clear instructions; includes parameter validation"
    );
}

#[test]
fn specificity_bonus_adds_half_point() {
    let text = "You must comply. You should check.\nValidation: required\nHandling if missing: ask";
    let score = specificity(text);

    assert_eq!(score.points, Points::halves(3));
    assert_eq!(score.rationale, "Some specificity; includes parameter validation");
}

#[test]
fn specificity_bonus_requires_both_validation_markers() {
    let text = "You must comply. You should check.\nValidation: required";
    assert_eq!(specificity(text).points, Points::whole(1));
}

#[test]
fn specificity_matches_ignore_case() {
    let text = "MUST comply, SHOULD verify, WILL report, STEP 4, TYPE: string";
    assert_eq!(specificity(text).points, Points::halves(3));
}

#[test]
fn safety_scores_zero_without_keywords() {
    let score = safety_ethics("Write a short poem about the sea.");

    assert_eq!(score.points, Points::ZERO);
    assert_eq!(score.rationale, "Limited safety guidelines");
}

#[test]
fn safety_scores_full_point_with_five_distinct_keywords() {
    let score = safety_ethics("SAFETY and ETHICAL BOUNDARIES: avoid harm, you cannot diagnose.");

    assert_eq!(score.points, Points::whole(1));
    assert_eq!(score.rationale, "Strong safety and ethical guidelines");
}

#[test]
fn safety_counts_each_keyword_once() {
    assert_eq!(
        safety_ethics("avoid avoid avoid avoid avoid").points,
        Points::ZERO
    );
    assert_eq!(
        safety_ethics("Please avoid jargon; you cannot guess; consult a professional.").points,
        Points::HALF
    );
}

#[test]
fn adaptability_bands() {
    let all = "parameter adapt adjust Default if missing or invalid enum Example Values \
               STATE MANAGEMENT dynamic";
    assert_eq!(adaptability(all).points, Points::whole(1));
    assert_eq!(
        adaptability("parameter, adapt, adjust, enum, dynamic").points,
        Points::HALF
    );
    assert_eq!(adaptability("nothing relevant").points, Points::ZERO);
}

#[test]
fn practical_value_bonus_for_worked_examples() {
    let text = "Example Values: a, b\nExample one\nExample two\nThis workflow is practical.";
    let score = practical_value(text);

    assert_eq!(score.points, Points::halves(3));
    assert_eq!(
        score.rationale,
        "Some practical value; includes comprehensive examples"
    );
}

#[test]
fn practical_value_bonus_needs_capitalised_examples() {
    let text = "example values: one example, another example, a workflow that is practical";
    assert_eq!(practical_value(text).points, Points::whole(1));
}

#[test]
fn practical_value_never_exceeds_cap() {
    let text = "example use case scenario implementation workflow process step-by-step \
                actionable Example Values: Example Example";
    assert_eq!(practical_value(text).points, Points::whole(2));
}

#[test]
fn every_sub_score_stays_within_its_cap() {
    for text in sample_texts() {
        for (criterion, evaluator) in EVALUATORS {
            let score = evaluator(text);
            assert_eq!(score.criterion, criterion);
            assert!(score.points <= criterion.cap(), "{criterion:?} over cap");
            assert!(!score.rationale.is_empty());
        }
    }
}

#[test]
fn evaluation_order_does_not_change_results() {
    for text in sample_texts() {
        let forward: Vec<SubScore> = EVALUATORS.iter().map(|(_, eval)| eval(text)).collect();
        let mut backward: Vec<SubScore> =
            EVALUATORS.iter().rev().map(|(_, eval)| eval(text)).collect();
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward, EVALUATORS.iter().map(|(_, eval)| eval(text)).collect::<Vec<_>>());
    }
}

#[test]
fn evaluate_dispatches_by_criterion() {
    for criterion in Criterion::ordered() {
        assert_eq!(evaluate(criterion, WELL_FORMED).criterion, criterion);
    }
}

#[test]
fn completeness_threshold_at_four_components() {
    assert_eq!(
        completeness("ROLE AND GOAL TASKS BOUNDARIES").points,
        Points::halves(3)
    );
    assert_eq!(
        completeness("ROLE AND GOAL TASKS BOUNDARIES PRINCIPLES").points,
        Points::whole(2)
    );
}

#[test]
fn specificity_thresholds_at_two_five_and_ten_matches() {
    let directives = |count: usize| "You must act. ".repeat(count);

    assert_eq!(specificity(&directives(1)).points, Points::ZERO);
    assert_eq!(specificity(&directives(2)).points, Points::whole(1));
    assert_eq!(specificity(&directives(4)).points, Points::whole(1));
    assert_eq!(specificity(&directives(5)).points, Points::halves(3));
    assert_eq!(specificity(&directives(9)).points, Points::halves(3));
    assert_eq!(specificity(&directives(10)).points, Points::whole(2));
}

#[test]
fn specificity_case_folding_is_ascii_only() {
    assert_eq!(specificity("ſhould go ſhould go").points, Points::ZERO);
    assert_eq!(specificity("SHOULD go SHOULD go").points, Points::whole(1));
}

#[test]
fn safety_thresholds_at_three_and_five_keywords() {
    assert_eq!(safety_ethics("avoid, disclaimer").points, Points::ZERO);
    assert_eq!(
        safety_ethics("avoid, disclaimer, qualified").points,
        Points::HALF
    );
    assert_eq!(
        safety_ethics("avoid, disclaimer, qualified, professional").points,
        Points::HALF
    );
    assert_eq!(
        safety_ethics("avoid, disclaimer, qualified, professional, SAFETY").points,
        Points::whole(1)
    );
}

#[test]
fn adaptability_thresholds_at_five_and_eight_keywords() {
    assert_eq!(
        adaptability("parameter, adapt, adjust, enum").points,
        Points::ZERO
    );
    assert_eq!(
        adaptability("parameter, adapt, adjust, enum, dynamic").points,
        Points::HALF
    );

    let seven = "parameter, adapt, adjust, enum, dynamic, Default if, missing or invalid";
    assert_eq!(adaptability(seven).points, Points::HALF);
    assert_eq!(
        adaptability(&format!("{seven}, Example Values")).points,
        Points::whole(1)
    );
}

#[test]
fn practical_value_thresholds_at_three_five_and_eight_keywords() {
    assert_eq!(practical_value("example, scenario").points, Points::ZERO);
    assert_eq!(
        practical_value("example, scenario, workflow").points,
        Points::whole(1)
    );

    let four = "example, scenario, workflow, process";
    assert_eq!(practical_value(four).points, Points::whole(1));
    assert_eq!(
        practical_value(&format!("{four}, actionable")).points,
        Points::halves(3)
    );

    let seven = "example, scenario, workflow, process, actionable, implementation, use case";
    assert_eq!(practical_value(seven).points, Points::halves(3));
    assert_eq!(
        practical_value(&format!("{seven}, practical")).points,
        Points::whole(2)
    );
}
