//! SUS scoring algorithm.
//!
//! The SUS instrument alternates item phrasing: odd-numbered items are
//! positively phrased (strong agreement means good usability), even-numbered
//! items are negatively phrased. Each item contributes 0-4 after polarity
//! adjustment, and the raw sum (0-40) is rescaled by 2.5 to the 0-100 range.

use crate::core::{SusClassification, SusResponse};

/// Phrasing polarity of a SUS item, determined by questionnaire position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPolarity {
    Positive,
    Negative,
}

impl ItemPolarity {
    /// Polarity for a 1-indexed questionnaire position.
    pub fn of_position(position: usize) -> Self {
        if position % 2 == 1 {
            ItemPolarity::Positive
        } else {
            ItemPolarity::Negative
        }
    }

    /// Polarity-adjusted contribution of one answer, in 0..=4.
    ///
    /// `value` must already be range-checked to 1..=5; [`SusResponse`]
    /// guarantees this for every stored answer.
    pub fn contribution(self, value: u8) -> u8 {
        match self {
            ItemPolarity::Positive => value - 1,
            ItemPolarity::Negative => 5 - value,
        }
    }
}

/// Compute the SUS score for one respondent. Pure; result is in [0, 100].
pub fn score(response: &SusResponse) -> f64 {
    let raw: u32 = response
        .positioned()
        .map(|(position, value)| u32::from(ItemPolarity::of_position(position).contribution(value)))
        .sum();
    f64::from(raw) * 2.5
}

/// Map a score onto Brooke's acceptability bands.
///
/// Bands are half-open on the lower side; each boundary value (60, 70, 80,
/// 90) belongs to the higher band.
pub fn classify(score: f64) -> SusClassification {
    if score < 60.0 {
        SusClassification::Unacceptable
    } else if score < 70.0 {
        SusClassification::Marginal
    } else if score < 80.0 {
        SusClassification::Good
    } else if score < 90.0 {
        SusClassification::Excellent
    } else {
        SusClassification::BestImaginable
    }
}
