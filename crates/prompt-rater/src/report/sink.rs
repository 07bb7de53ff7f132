use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::info;

use super::{render_json, render_markdown, render_text};
use crate::scoring::{CorpusReport, Rating};

pub const MARKDOWN_REPORT_FILE: &str = "prompt_evaluation_report.md";
pub const JSON_REPORT_FILE: &str = "prompt_ratings_detailed.json";
pub const TEXT_REPORT_FILE: &str = "prompt_ratings.txt";

/// Destination for a finished evaluation run.
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &CorpusReport, ratings: &[Rating]) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode ratings as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The three rendered artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub markdown: String,
    pub json: String,
    pub text: String,
}

impl RenderedReport {
    pub fn render(report: &CorpusReport, ratings: &[Rating]) -> Result<Self, SinkError> {
        Ok(Self {
            markdown: render_markdown(report),
            json: render_json(ratings)?,
            text: render_text(ratings),
        })
    }
}

/// Writes the artifacts into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(MARKDOWN_REPORT_FILE)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_REPORT_FILE)
    }

    pub fn text_path(&self) -> PathBuf {
        self.output_dir.join(TEXT_REPORT_FILE)
    }

    fn write(&self, path: PathBuf, contents: &str) -> Result<(), SinkError> {
        std::fs::write(&path, contents).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = contents.len(), "report artifact written");
        Ok(())
    }
}

impl ReportSink for FileReportSink {
    fn publish(&self, report: &CorpusReport, ratings: &[Rating]) -> Result<(), SinkError> {
        let rendered = RenderedReport::render(report, ratings)?;

        std::fs::create_dir_all(&self.output_dir).map_err(|source| SinkError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        self.write(self.markdown_path(), &rendered.markdown)?;
        self.write(self.json_path(), &rendered.json)?;
        self.write(self.text_path(), &rendered.text)?;
        Ok(())
    }
}

/// Keeps rendered artifacts in memory for callers that serve them directly.
#[derive(Debug, Default, Clone)]
pub struct MemoryReportSink {
    published: Arc<Mutex<Vec<RenderedReport>>>,
}

impl MemoryReportSink {
    pub fn latest(&self) -> Option<RenderedReport> {
        self.published
            .lock()
            .expect("report sink mutex poisoned")
            .last()
            .cloned()
    }

    pub fn published_count(&self) -> usize {
        self.published
            .lock()
            .expect("report sink mutex poisoned")
            .len()
    }
}

impl ReportSink for MemoryReportSink {
    fn publish(&self, report: &CorpusReport, ratings: &[Rating]) -> Result<(), SinkError> {
        let rendered = RenderedReport::render(report, ratings)?;
        self.published
            .lock()
            .expect("report sink mutex poisoned")
            .push(rendered);
        Ok(())
    }
}
