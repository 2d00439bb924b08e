use anyhow::{bail, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::{AnalysisResults, RejectedRow, ScoredRespondent};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::reader::{read_survey_csv, SurveyData};
use crate::scoring;

pub struct AnalyzeConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let data = read_survey_csv(&config.file)?;
    info!(
        "loaded {} respondent(s), {} rejected",
        data.responses.len(),
        data.rejected.len()
    );

    let results = score_survey(config.file.display().to_string(), data);

    let mut writer = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    crate::io::ensure_dir(parent)?;
                }
            }
            let file = fs::File::create(path)?;
            create_writer(file, config.format, config.formatting)
        }
        None => create_writer(io::stdout(), config.format, config.formatting),
    };
    writer.write_results(&results)?;

    if config.strict && !results.rejected.is_empty() {
        bail!(
            "{} respondent row(s) failed validation",
            results.rejected.len()
        );
    }
    Ok(())
}

/// Score every valid row and fold the rejections into the results so no
/// failure disappears between loading and reporting.
pub fn score_survey(source: String, data: SurveyData) -> AnalysisResults {
    let scored: Vec<ScoredRespondent> = data
        .responses
        .into_iter()
        .map(|(respondent, response)| {
            let score = scoring::score(&response);
            ScoredRespondent {
                respondent,
                response,
                score,
                classification: scoring::classify(score),
            }
        })
        .collect();

    let rejected: Vec<RejectedRow> = data
        .rejected
        .into_iter()
        .map(|err| RejectedRow {
            respondent: err.respondent,
            reason: err.source.to_string(),
        })
        .collect();

    AnalysisResults::new(source, scored, rejected)
}
