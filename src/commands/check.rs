use anyhow::{bail, Result};
use std::path::Path;

use crate::io::reader::read_survey_csv;

/// Validate a survey file without producing a report. Prints each invalid
/// row with its respondent index and fails if any row was rejected.
pub fn check_survey(file: &Path) -> Result<()> {
    let data = read_survey_csv(file)?;

    println!(
        "{}: {} respondent(s), {} rejected",
        file.display(),
        data.responses.len(),
        data.rejected.len()
    );
    for err in &data.rejected {
        eprintln!("  {err}");
    }

    if !data.rejected.is_empty() {
        bail!(
            "{} respondent row(s) failed validation",
            data.rejected.len()
        );
    }
    Ok(())
}
