use super::common::*;
use crate::rubric::{Criterion, Points};
use crate::scoring::{rate, rate_all, Document};

#[test]
fn strong_prompt_earns_every_point() {
    let rating = rate(&document("planner.txt", STRONG_PROMPT));

    assert_eq!(rating.name, "planner.txt");
    assert_eq!(rating.total_score, Points::whole(10));
    for criterion in Criterion::ordered() {
        assert_eq!(rating.points(criterion), criterion.cap(), "{criterion:?}");
    }
    assert!(rating
        .rationale(Criterion::Specificity)
        .contains("includes parameter validation"));
    assert!(!rating.is_degraded());
}

#[test]
fn unstructured_prompt_scores_zero() {
    let rating = rate(&document("joke.txt", WEAK_PROMPT));

    assert_eq!(rating.total_score, Points::ZERO);
    assert_eq!(rating.sub_scores.len(), Criterion::COUNT);
    assert_eq!(
        rating.rationale(Criterion::ClarityStructure),
        "Missing key sections; Poor organization"
    );
}

#[test]
fn unreadable_document_degrades_to_zero_rating() {
    let rating = rate(&Document::unreadable("locked.txt", "permission denied"));

    assert_eq!(rating.total_score, Points::ZERO);
    assert_eq!(rating.sub_scores.len(), Criterion::COUNT);
    assert!(rating.sub_scores.iter().all(|score| score.points.is_zero()));
    assert_eq!(
        rating.read_error.as_deref(),
        Some("Failed to read file: permission denied")
    );
    assert!(rating
        .sub_scores
        .iter()
        .all(|score| score.rationale == "Failed to read file: permission denied"));
}

#[test]
fn total_is_exact_sum_of_sub_scores() {
    let texts = [
        STRONG_PROMPT,
        WEAK_PROMPT,
        "",
        "ROLE AND GOAL\nTASKS\n1. do it\nExample Values: x\nExample Example",
        "SAFETY ETHICAL avoid cannot qualified\nmust go, should stop, will run",
    ];

    for (index, text) in texts.iter().enumerate() {
        let rating = rate(&document(&format!("doc-{index}"), text));
        let summed: Points = rating.sub_scores.iter().map(|score| score.points).sum();

        assert_eq!(rating.total_score, summed);
        assert!(rating.total_score <= Points::whole(10));
        for score in &rating.sub_scores {
            assert!(score.points <= score.criterion.cap());
        }
    }
}

#[test]
fn rating_is_deterministic() {
    let doc = document("planner.txt", STRONG_PROMPT);
    assert_eq!(rate(&doc), rate(&doc));
}

#[test]
fn rate_all_ranks_descending_and_keeps_ties_in_input_order() {
    let documents = vec![
        document("a", WEAK_PROMPT),
        document("b", STRONG_PROMPT),
        document("c", WEAK_PROMPT),
        document("d", "ROLE AND GOAL\nTASKS\n1. do it"),
        Document::unreadable("e", "not valid UTF-8"),
    ];

    let ratings = rate_all(&documents);

    assert_eq!(names(&ratings), vec!["b", "d", "a", "c", "e"]);
    assert_eq!(ratings[1].total_score, Points::whole(2));
    assert!(ratings
        .windows(2)
        .all(|pair| pair[0].total_score >= pair[1].total_score));
}

#[test]
fn rate_all_matches_sequential_rating() {
    let documents: Vec<Document> = (0..120)
        .map(|index| {
            let text = match index % 3 {
                0 => STRONG_PROMPT,
                1 => WEAK_PROMPT,
                _ => "ROLE AND GOAL\nTASKS\n- item",
            };
            document(&format!("prompt-{index:03}"), text)
        })
        .collect();

    let mut expected: Vec<_> = documents.iter().map(rate).collect();
    expected.sort_by(|left, right| right.total_score.cmp(&left.total_score));

    assert_eq!(rate_all(&documents), expected);
}

#[test]
fn rate_all_handles_empty_input() {
    assert!(rate_all(&[]).is_empty());
}

#[test]
fn serialized_rating_keeps_total_and_omits_missing_error() {
    let rating = rate(&document("planner.txt", STRONG_PROMPT));
    let value = serde_json::to_value(&rating).expect("rating serializes");

    assert_eq!(value["name"], "planner.txt");
    assert_eq!(value["total_score"], 10.0);
    assert_eq!(value["sub_scores"][0]["criterion"], "clarity_structure");
    assert!(value.get("read_error").is_none());
}
