//! Fixed six-criterion rubric for prompt documents.

mod criteria;
mod domain;
mod points;
mod rules;
pub mod table;

#[cfg(test)]
mod tests;

pub use criteria::{
    adaptability, clarity_structure, completeness, evaluate, practical_value, safety_ethics,
    specificity, Evaluator, EVALUATORS,
};
pub use domain::{Criterion, SubScore};
pub use points::Points;
