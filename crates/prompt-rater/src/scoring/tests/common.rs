use crate::rubric::Points;
use crate::scoring::{Document, Rating};

pub(super) const STRONG_PROMPT: &str = "ROLE AND GOAL\nYou are a certified financial planner.\n\n\
TASKS\n1. **Assess**: You must review the budget step 1\n2. **Advise**: You should suggest savings\n\n\
USER-PROVIDED PARAMETERS\n- **Income**: Type: number. Default if missing or invalid: ask again.\n\
  Example Values: 4000, 5200\n  Validation: positive\n  Handling if missing: prompt the user\n\n\
BOUNDARIES\nAvoid legal advice. You cannot guarantee returns and must not provide tax filings. \
Add a disclaimer and refer to a qualified professional.\n\n\
PRINCIPLES\nAdapt and adjust the plan; the enum of goals is dynamic.\nSTATE MANAGEMENT: keep each parameter.\n\n\
Example use case scenario: an implementation workflow with a step-by-step, actionable, practical process. \
Example two. Example three.";

pub(super) const WEAK_PROMPT: &str = "Tell me a joke about cats.";

pub(super) fn document(name: &str, text: &str) -> Document {
    Document::new(name, text)
}

pub(super) fn rating_with_total(name: &str, halves: u8) -> Rating {
    Rating {
        name: name.to_string(),
        sub_scores: Vec::new(),
        total_score: Points::halves(halves),
        read_error: None,
    }
}

pub(super) fn names(ratings: &[Rating]) -> Vec<&str> {
    ratings.iter().map(|rating| rating.name.as_str()).collect()
}
