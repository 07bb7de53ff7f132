use super::views::distribution;
use crate::rubric::Criterion;
use crate::scoring::{CorpusReport, Rating};
use std::fmt::Write as _;

pub fn render_markdown(report: &CorpusReport) -> String {
    let mut content = String::new();

    writeln!(&mut content, "# AI Prompt Evaluation Report\n").expect("write title");
    writeln!(&mut content, "## Summary Statistics").expect("write summary heading");
    writeln!(
        &mut content,
        "- Total Prompts Evaluated: {}",
        report.count
    )
    .expect("write count");
    writeln!(&mut content, "- Average Score: {:.2}/10", report.mean_score)
        .expect("write average");
    if let Some(highest) = &report.highest {
        writeln!(
            &mut content,
            "- Highest Score: {}/10 ({})",
            highest.total_score, highest.name
        )
        .expect("write highest");
    }
    if let Some(lowest) = &report.lowest {
        writeln!(
            &mut content,
            "- Lowest Score: {}/10 ({})",
            lowest.total_score, lowest.name
        )
        .expect("write lowest");
    }

    writeln!(&mut content, "\n## Score Distribution").expect("write distribution heading");
    for entry in distribution(report) {
        writeln!(
            &mut content,
            "- Score {}/10: {} prompts ({:.1}%)",
            entry.score, entry.count, entry.percentage
        )
        .expect("write distribution entry");
    }

    if !report.top.is_empty() {
        writeln!(&mut content, "\n## Top {} Performers", report.top.len())
            .expect("write top heading");
        for (position, rating) in report.top.iter().enumerate() {
            write_top_entry(&mut content, position + 1, rating);
        }
    }

    if !report.bottom.is_empty() {
        writeln!(
            &mut content,
            "\n## Bottom {} Performers",
            report.bottom.len()
        )
        .expect("write bottom heading");
        for (position, rating) in report.bottom.iter().rev().enumerate() {
            writeln!(
                &mut content,
                "{}. **{}** - {}/10",
                position + 1,
                rating.name,
                rating.total_score
            )
            .expect("write bottom entry");
        }
    }

    content
}

fn write_top_entry(content: &mut String, position: usize, rating: &Rating) {
    writeln!(
        content,
        "{}. **{}** - {}/10",
        position, rating.name, rating.total_score
    )
    .expect("write top entry");
    writeln!(
        content,
        "   - {}, {}, {}",
        criterion_cell(rating, Criterion::ClarityStructure),
        criterion_cell(rating, Criterion::Completeness),
        criterion_cell(rating, Criterion::Specificity)
    )
    .expect("write top breakdown");
    writeln!(
        content,
        "   - {}, {}, {}\n",
        criterion_cell(rating, Criterion::SafetyEthics),
        criterion_cell(rating, Criterion::Adaptability),
        criterion_cell(rating, Criterion::PracticalValue)
    )
    .expect("write top breakdown");
}

fn criterion_cell(rating: &Rating, criterion: Criterion) -> String {
    format!(
        "{}: {}/{}",
        criterion.label(),
        rating.points(criterion),
        criterion.cap()
    )
}
