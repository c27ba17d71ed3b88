//! Plain text renderer using Handlebars.

use super::messages::{outcome_message, summary_message};
use super::{RenderError, ReportSink};
use crate::evaluation::RepositoryReport;
use crate::summary::AccountTally;
use handlebars::{no_escape, Handlebars};
use serde_json::json;
use std::io::Write;
use time::macros::format_description;

const REPOSITORY_TEMPLATE: &str = "repository";
const SUMMARY_TEMPLATE: &str = "summary";

const REPOSITORY_LAYOUT: &str =
    "{{name}} ({{language}}) - Last updated {{updated}}\n{{#each lines}}{{this}}\n{{/each}}";

/// Written after every card; kept out of the layout since Handlebars drops
/// text trailing a closing block.
const CARD_SEPARATOR: &[u8] = b"\n";
const SUMMARY_LAYOUT: &str = "{{#each lines}}{{this}}\n{{/each}}of {{total}} repositories\n";

/// Language shown when GitHub did not detect one.
const UNKNOWN_LANGUAGE: &str = "unknown";

/// Creates a registry with the report layouts registered.
///
/// HTML escaping is disabled and strict mode is on, so a layout referring to
/// a missing field fails instead of printing nothing.
fn create_registry() -> Result<Handlebars<'static>, RenderError> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_template_string(REPOSITORY_TEMPLATE, REPOSITORY_LAYOUT)?;
    hbs.register_template_string(SUMMARY_TEMPLATE, SUMMARY_LAYOUT)?;
    Ok(hbs)
}

/// Writes human readable scorecards to `W`.
pub struct TextRenderer<W> {
    handlebars: Handlebars<'static>,
    writer: W,
    readme_path: String,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layouts fail to register.
    pub fn new(writer: W, readme_path: impl Into<String>) -> Result<Self, RenderError> {
        Ok(Self {
            handlebars: create_registry()?,
            writer,
            readme_path: readme_path.into(),
        })
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextRenderer<W> {
    fn repository(&mut self, report: &RepositoryReport) -> Result<(), RenderError> {
        let lines: Vec<String> = report
            .outcomes
            .iter()
            .map(|o| outcome_message(o, &self.readme_path))
            .collect();
        let updated = report
            .last_updated
            .format(format_description!("[year]-[month]-[day]"))?;
        let data = json!({
            "name": report.name,
            "language": report.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE),
            "updated": updated,
            "lines": lines,
        });

        let text = self.handlebars.render(REPOSITORY_TEMPLATE, &data)?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(CARD_SEPARATOR)?;
        Ok(())
    }

    fn finish(&mut self, tally: &AccountTally) -> Result<(), RenderError> {
        let lines: Vec<String> = tally
            .summary_lines()
            .iter()
            .map(|l| summary_message(l, &self.readme_path))
            .collect();
        let data = json!({
            "lines": lines,
            "total": tally.total_repositories_seen,
        });

        let text = self.handlebars.render(SUMMARY_TEMPLATE, &data)?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
