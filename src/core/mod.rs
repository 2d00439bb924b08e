pub mod stats;

use crate::errors::SusError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use self::stats::{Distribution, ScoreStats};

/// Number of items in the SUS instrument (Brooke, 1986).
pub const SUS_ITEM_COUNT: usize = 10;

/// One respondent's answers to the 10-item SUS block.
///
/// Answers are stored in questionnaire order; position is 1-indexed when
/// determining item polarity. A value can only be constructed through
/// [`SusResponse::new`], which enforces the item count and the 1-5 Likert
/// range, so every `SusResponse` in the system is scoreable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SusResponse {
    items: [u8; SUS_ITEM_COUNT],
}

impl SusResponse {
    /// Validate and wrap a raw answer vector.
    pub fn new(values: &[i64]) -> Result<Self, SusError> {
        if values.len() != SUS_ITEM_COUNT {
            return Err(SusError::WrongItemCount {
                actual: values.len(),
            });
        }

        let mut items = [0u8; SUS_ITEM_COUNT];
        for (idx, &value) in values.iter().enumerate() {
            if !(1..=5).contains(&value) {
                return Err(SusError::OutOfRange {
                    position: idx + 1,
                    value,
                });
            }
            items[idx] = value as u8;
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[u8; SUS_ITEM_COUNT] {
        &self.items
    }

    /// Iterate answers with their 1-indexed questionnaire position.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.items.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }
}

/// Qualitative band for a SUS score, per Brooke's acceptability ranges.
///
/// Ordering follows the score bands, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SusClassification {
    Unacceptable,
    Marginal,
    Good,
    Excellent,
    BestImaginable,
}

impl SusClassification {
    /// All labels in presentation order (lowest band first).
    pub const ALL: [SusClassification; 5] = [
        SusClassification::Unacceptable,
        SusClassification::Marginal,
        SusClassification::Good,
        SusClassification::Excellent,
        SusClassification::BestImaginable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SusClassification::Unacceptable => "Unacceptable",
            SusClassification::Marginal => "Marginal",
            SusClassification::Good => "Good",
            SusClassification::Excellent => "Excellent",
            SusClassification::BestImaginable => "Best Imaginable",
        }
    }
}

impl std::fmt::Display for SusClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One scored survey row. `respondent` is the 1-based CSV data row index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoredRespondent {
    pub respondent: usize,
    pub response: SusResponse,
    pub score: f64,
    pub classification: SusClassification,
}

/// A data row the reader refused to score, with the reason.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RejectedRow {
    pub respondent: usize,
    pub reason: String,
}

/// Full analysis output for one dataset, serializable for JSON reports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub respondent_count: usize,
    pub rejected: Vec<RejectedRow>,
    pub stats: Option<ScoreStats>,
    pub distribution: Distribution,
    pub respondents: Vec<ScoredRespondent>,
}

impl AnalysisResults {
    pub fn new(source: String, scored: Vec<ScoredRespondent>, rejected: Vec<RejectedRow>) -> Self {
        let scores: Vec<f64> = scored.iter().map(|r| r.score).collect();
        let distribution = Distribution::tally(scored.iter().map(|r| r.classification));

        Self {
            generated_at: Utc::now(),
            source,
            respondent_count: scored.len(),
            rejected,
            stats: ScoreStats::compute(&scores),
            distribution,
            respondents: scored,
        }
    }
}
