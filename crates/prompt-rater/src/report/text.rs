use crate::rubric::Criterion;
use crate::scoring::Rating;
use std::fmt::Write as _;

/// One line per rating: `name | total/10 | C:x Comp:x S:x Safe:x A:x P:x`.
pub fn render_text(ratings: &[Rating]) -> String {
    let mut content = String::new();
    writeln!(&mut content, "# AI Prompt Ratings (1-10 Scale)").expect("write header");
    writeln!(&mut content, "# Format: filename | score | breakdown\n").expect("write format");

    for rating in ratings {
        let breakdown: Vec<String> = Criterion::ordered()
            .into_iter()
            .map(|criterion| format!("{}:{}", criterion.abbreviation(), rating.points(criterion)))
            .collect();
        writeln!(
            &mut content,
            "{} | {}/10 | {}",
            rating.name,
            rating.total_score,
            breakdown.join(" ")
        )
        .expect("write rating line");
    }

    content
}
