//! Report rendering.
//!
//! The scan streams each [`RepositoryReport`] to a [`ReportSink`] as soon as
//! it is computed, then hands over the final [`AccountTally`]. Sinks own all
//! formatting; the evaluator only supplies structured data.

mod error;
mod json;
mod messages;
mod text;

pub use error::RenderError;
pub use json::JsonRenderer;
pub use messages::{outcome_message, summary_message};
pub use text::TextRenderer;

use crate::evaluation::RepositoryReport;
use crate::summary::AccountTally;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Receives scan results in order.
pub trait ReportSink {
    /// Called once per evaluated repository, in evaluation order.
    fn repository(&mut self, report: &RepositoryReport) -> Result<(), RenderError>;

    /// Called once after the last repository.
    fn finish(&mut self, tally: &AccountTally) -> Result<(), RenderError>;
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn repository(&mut self, report: &RepositoryReport) -> Result<(), RenderError> {
        (**self).repository(report)
    }

    fn finish(&mut self, tally: &AccountTally) -> Result<(), RenderError> {
        (**self).finish(tally)
    }
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// JSON lines.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Builds the sink for this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text layouts fail to register.
    pub fn sink<W: Write + 'static>(
        &self,
        writer: W,
        readme_path: &str,
    ) -> Result<Box<dyn ReportSink>, RenderError> {
        let sink: Box<dyn ReportSink> = match self {
            Self::Text => Box::new(TextRenderer::new(writer, readme_path)?),
            Self::Json => Box::new(JsonRenderer::new(writer)),
        };
        Ok(sink)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}', expected 'text' or 'json'")),
        }
    }
}
