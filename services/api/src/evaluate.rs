use clap::Args;
use prompt_rater::config::{AppConfig, EvaluationConfig};
use prompt_rater::error::AppError;
use prompt_rater::report::{FileReportSink, ReportSink};
use prompt_rater::scoring::{rate_all, summarize_with_limit, CorpusReport, DEFAULT_SLICE_LEN};
use prompt_rater::source::DirectorySource;
use prompt_rater::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Directory holding the prompt files (defaults to APP_PROMPTS_DIR)
    #[arg(long)]
    pub(crate) prompts_dir: Option<PathBuf>,
    /// Directory the reports are written to (defaults to APP_OUTPUT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// File extension of prompt files, without the dot
    #[arg(long)]
    pub(crate) extension: Option<String>,
    /// Number of leaders and laggards listed in the Markdown report
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Worker threads used for scoring
    #[arg(long)]
    pub(crate) workers: Option<usize>,
}

pub(crate) fn run_evaluation(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        prompts_dir,
        output_dir,
        extension,
        top,
        workers,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(prompts_dir) = prompts_dir {
        config.evaluation.prompts_dir = prompts_dir;
    }
    if let Some(output_dir) = output_dir {
        config.evaluation.output_dir = output_dir;
    }
    if let Some(extension) = extension {
        config.evaluation.extension = extension;
    }
    if workers.is_some() {
        config.evaluation.workers = workers;
    }

    telemetry::init(&config.telemetry)?;

    if let Some(workers) = config.evaluation.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()?;
    }

    let report = evaluate_directory(&config.evaluation, top.unwrap_or(DEFAULT_SLICE_LEN))?;
    let output_dir = config.evaluation.output_dir.display();

    println!("Evaluation complete");
    println!("- Evaluated {} prompts", report.count);
    println!("- Average score: {:.2}/10", report.mean_score);
    println!("- Reports written to {output_dir}");
    Ok(())
}

/// Discovers, rates and publishes one directory of prompts.
pub(crate) fn evaluate_directory(
    settings: &EvaluationConfig,
    slice_len: usize,
) -> Result<CorpusReport, AppError> {
    let source = DirectorySource::new(&settings.prompts_dir, &settings.extension);
    let documents = source.load()?;

    let ratings = rate_all(&documents);
    let report = summarize_with_limit(&ratings, slice_len);

    FileReportSink::new(&settings.output_dir).publish(&report, &ratings)?;
    info!(
        count = report.count,
        mean_score = report.mean_score,
        "evaluation run complete"
    );
    Ok(report)
}
