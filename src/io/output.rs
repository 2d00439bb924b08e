//! Report writers for the three output formats.

use colored::*;
use comfy_table::{presets, Table};
use std::io::Write;

use crate::core::{AnalysisResults, SusClassification};
use crate::formatting::FormattingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    writer: W,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# SUS Survey Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Source: `{}`", results.source)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Respondents scored | {} |",
            results.respondent_count
        )?;
        writeln!(
            self.writer,
            "| Rows rejected | {} |",
            results.rejected.len()
        )?;
        if let Some(stats) = &results.stats {
            writeln!(self.writer, "| Mean score | {:.1} |", stats.mean)?;
            writeln!(self.writer, "| Median score | {:.1} |", stats.median)?;
            writeln!(self.writer, "| Minimum score | {:.1} |", stats.min)?;
            writeln!(self.writer, "| Maximum score | {:.1} |", stats.max)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Classification Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Classification | Respondents |")?;
        writeln!(self.writer, "|----------------|-------------|")?;
        for (class, count) in results.distribution.entries() {
            writeln!(self.writer, "| {} | {} |", class.label(), count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rejected(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.rejected.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Rejected Rows")?;
        writeln!(self.writer)?;
        for row in &results.rejected {
            writeln!(
                self.writer,
                "- respondent {}: {}",
                row.respondent, row.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_summary(results)?;
        self.write_distribution(results)?;
        self.write_rejected(results)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn write_stats_table(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let Some(stats) = &results.stats else {
            writeln!(self.writer, "No scoreable respondents.")?;
            return Ok(());
        };

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_header(vec!["Metric", "Score"]);
        table.add_row(vec!["Mean".to_string(), format!("{:.1}", stats.mean)]);
        table.add_row(vec!["Median".to_string(), format!("{:.1}", stats.median)]);
        table.add_row(vec!["Minimum".to_string(), format!("{:.1}", stats.min)]);
        table.add_row(vec!["Maximum".to_string(), format!("{:.1}", stats.max)]);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_distribution(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Classification distribution".bold())?;

        let total = results.distribution.total();
        let width = SusClassification::ALL
            .iter()
            .map(|c| c.label().len())
            .max()
            .unwrap_or(0);

        for (class, count) in results.distribution.entries() {
            let bar = band_bar(class, count);
            let percent = if total > 0 {
                count as f64 * 100.0 / total as f64
            } else {
                0.0
            };
            writeln!(
                self.writer,
                "  {:width$}  {:>4}  {:5.1}%  {}",
                class.label(),
                count,
                percent,
                bar,
                width = width
            )?;
        }
        Ok(())
    }

    fn write_rejected(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.rejected.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            format!("{} row(s) rejected", results.rejected.len()).red().bold()
        )?;
        for row in &results.rejected {
            writeln!(
                self.writer,
                "  {} {}",
                format!("respondent {}:", row.respondent).yellow(),
                row.reason
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.formatting.apply();

        writeln!(
            self.writer,
            "{} {}",
            "SUS Survey Analysis".bold(),
            format!("({})", results.source).dimmed()
        )?;
        writeln!(
            self.writer,
            "Respondents scored: {}",
            results.respondent_count
        )?;
        writeln!(self.writer)?;

        self.write_stats_table(results)?;
        self.write_distribution(results)?;
        self.write_rejected(results)?;
        Ok(())
    }
}

// One block per respondent keeps the bar honest at survey scale; cap it so
// a large study cannot wrap the line.
fn band_bar(class: SusClassification, count: usize) -> ColoredString {
    let bar = "█".repeat(count.min(50));
    match class {
        SusClassification::Unacceptable => bar.red(),
        SusClassification::Marginal => bar.yellow(),
        SusClassification::Good => bar.blue(),
        SusClassification::Excellent => bar.green(),
        SusClassification::BestImaginable => bar.bright_green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RejectedRow, ScoredRespondent, SusResponse};

    fn sample_results() -> AnalysisResults {
        let response = SusResponse::new(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2]).unwrap();
        let scored = vec![ScoredRespondent {
            respondent: 1,
            response,
            score: 75.0,
            classification: SusClassification::Good,
        }];
        let rejected = vec![RejectedRow {
            respondent: 2,
            reason: "expected 10 SUS items, found 9".to_string(),
        }];
        AnalysisResults::new("survey.csv".to_string(), scored, rejected)
    }

    #[test]
    fn json_writer_emits_valid_json_with_expected_fields() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_results(&sample_results())
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["respondent_count"], 1);
        assert_eq!(json["respondents"][0]["score"], 75.0);
        assert_eq!(json["respondents"][0]["classification"], "Good");
        assert_eq!(json["rejected"][0]["respondent"], 2);
        assert!(json["stats"]["mean"].is_number());
    }

    #[test]
    fn markdown_writer_includes_all_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_results(&sample_results())
            .unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("# SUS Survey Report"));
        assert!(output.contains("## Summary"));
        assert!(output.contains("## Classification Distribution"));
        assert!(output.contains("| Good | 1 |"));
        assert!(output.contains("## Rejected Rows"));
        assert!(output.contains("respondent 2"));
    }

    #[test]
    fn markdown_writer_omits_rejected_section_when_clean() {
        let response = SusResponse::new(&[3; 10]).unwrap();
        let results = AnalysisResults::new(
            "clean.csv".to_string(),
            vec![ScoredRespondent {
                respondent: 1,
                response,
                score: 50.0,
                classification: SusClassification::Unacceptable,
            }],
            vec![],
        );

        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_results(&results).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(!output.contains("## Rejected Rows"));
    }

    #[test]
    fn terminal_writer_lists_every_band() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, FormattingConfig::plain())
            .write_results(&sample_results())
            .unwrap();

        let output = String::from_utf8(buf).unwrap();
        for class in SusClassification::ALL {
            assert!(output.contains(class.label()), "missing {}", class.label());
        }
        assert!(output.contains("Respondents scored: 1"));
        assert!(output.contains("row(s) rejected"));
    }
}
