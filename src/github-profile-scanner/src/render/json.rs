//! JSON lines renderer.

use super::{RenderError, ReportSink};
use crate::evaluation::RepositoryReport;
use crate::summary::AccountTally;
use serde::Serialize;
use std::io::Write;

/// One line of JSON output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Repository(&'a RepositoryReport),
    Summary(&'a AccountTally),
}

/// Writes one JSON object per line: a `repository` record per report and a
/// final `summary` record.
pub struct JsonRenderer<W> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, record: &Record<'_>) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonRenderer<W> {
    fn repository(&mut self, report: &RepositoryReport) -> Result<(), RenderError> {
        self.write_record(&Record::Repository(report))
    }

    fn finish(&mut self, tally: &AccountTally) -> Result<(), RenderError> {
        self.write_record(&Record::Summary(tally))?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{CheckOutcome, Rule, Verdict};
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn writes_json_lines() {
        let mut renderer = JsonRenderer::new(Vec::new());
        let report = RepositoryReport {
            name: "scanner".to_string(),
            language: None,
            last_updated: datetime!(2023-04-05 06:07:08 UTC),
            outcomes: vec![CheckOutcome::new(
                Rule::ReadmeLength,
                Verdict::Pass,
                Some("120".into()),
            )],
        };
        let tally = AccountTally {
            total_repositories_seen: 1,
            ..AccountTally::default()
        };

        renderer.repository(&report).unwrap();
        renderer.finish(&tally).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let records: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "repository");
        assert_eq!(records[0]["name"], "scanner");
        assert_eq!(records[0]["last_updated"], "2023-04-05T06:07:08Z");
        assert_eq!(records[0]["outcomes"][0]["rule"], "readme-length");
        assert_eq!(records[0]["outcomes"][0]["detail"], "120");
        assert_eq!(records[1]["type"], "summary");
        assert_eq!(records[1]["total_repositories_seen"], 1);
        assert_eq!(records[1]["missing_readme"], 0);
    }
}
