//! Renderings of a finished run and the sinks that publish them.

mod json;
mod markdown;
mod sink;
mod text;
pub mod views;

pub use json::render_json;
pub use markdown::render_markdown;
pub use sink::{
    FileReportSink, MemoryReportSink, RenderedReport, ReportSink, SinkError, JSON_REPORT_FILE,
    MARKDOWN_REPORT_FILE, TEXT_REPORT_FILE,
};
pub use text::render_text;
pub use views::{CorpusSummaryView, RatingRecord};
