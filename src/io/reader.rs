//! Survey CSV ingestion.
//!
//! The survey export is a headed CSV whose last ten columns are the SUS
//! instrument items; everything before them (timestamps, demographic
//! questions) is ignored. Item cells parse strictly: a blank, non-numeric,
//! or out-of-range cell rejects the whole row rather than coercing it, and
//! the rejection keeps the 1-based row index so the analyst can fix or drop
//! the source record.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::fs::File;
use std::path::Path;

use crate::core::{SusResponse, SUS_ITEM_COUNT};
use crate::errors::{RowError, SusError};

/// Parsed survey file: scoreable rows plus the rows that failed validation.
#[derive(Clone, Debug)]
pub struct SurveyData {
    /// Header names of the ten item columns, in questionnaire order.
    pub item_columns: Vec<String>,
    /// (1-based row index, validated response) pairs in file order.
    pub responses: Vec<(usize, SusResponse)>,
    /// Rows rejected during validation, in file order.
    pub rejected: Vec<RowError>,
}

/// Read a survey CSV, validating every SUS item cell.
pub fn read_survey_csv(path: &Path) -> Result<SurveyData> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers from {}", path.display()))?;
    if headers.len() < SUS_ITEM_COUNT {
        bail!(
            "{} has {} columns; at least {} are required (the SUS items occupy the last {})",
            path.display(),
            headers.len(),
            SUS_ITEM_COUNT,
            SUS_ITEM_COUNT
        );
    }

    let item_start = headers.len() - SUS_ITEM_COUNT;
    let item_columns: Vec<String> = headers.iter().skip(item_start).map(String::from).collect();
    debug!("SUS item columns: {:?}", item_columns);

    let mut responses = Vec::new();
    let mut rejected = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let respondent = idx + 1;
        let record = record
            .with_context(|| format!("failed to read record {} from {}", respondent, path.display()))?;

        match parse_row(&record, item_start, &item_columns) {
            Ok(response) => responses.push((respondent, response)),
            Err(err) => {
                let err = RowError::new(respondent, err);
                warn!("rejected row: {}", err);
                rejected.push(err);
            }
        }
    }

    Ok(SurveyData {
        item_columns,
        responses,
        rejected,
    })
}

fn parse_row(
    record: &csv::StringRecord,
    item_start: usize,
    item_columns: &[String],
) -> Result<SusResponse, SusError> {
    // flexible(true) lets short records through the reader; count them as
    // missing items instead of a csv-level error so the row index survives.
    if record.len() < item_start + SUS_ITEM_COUNT {
        return Err(SusError::WrongItemCount {
            actual: record.len().saturating_sub(item_start),
        });
    }

    let mut values = Vec::with_capacity(SUS_ITEM_COUNT);
    for (offset, column) in item_columns.iter().enumerate() {
        let cell = record
            .get(item_start + offset)
            .unwrap_or_default()
            .trim();
        let value: i64 = cell.parse().map_err(|_| SusError::NonNumeric {
            position: offset + 1,
            column: column.clone(),
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    SusResponse::new(&values)
}
