//! Aggregate reductions over a dataset of SUS scores.

use serde::{Deserialize, Serialize};

use super::SusClassification;

/// Standard descriptive statistics over the scored respondents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreStats {
    /// Compute statistics over a score slice; `None` for an empty dataset.
    pub fn compute(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let sum: f64 = sorted.iter().sum();
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            mean: sum / sorted.len() as f64,
            median,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Frequency of each classification label, kept in fixed band order for
/// presentation (zero-count bands included).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    counts: [usize; 5],
}

impl Distribution {
    pub fn tally(classifications: impl Iterator<Item = SusClassification>) -> Self {
        let mut counts = [0usize; 5];
        for class in classifications {
            counts[class as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, class: SusClassification) -> usize {
        self.counts[class as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Bands with their counts, lowest band first.
    pub fn entries(&self) -> impl Iterator<Item = (SusClassification, usize)> + '_ {
        SusClassification::ALL
            .iter()
            .map(move |&class| (class, self.count(class)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_of_empty_dataset_is_none() {
        assert_eq!(ScoreStats::compute(&[]), None);
    }

    #[test]
    fn stats_of_single_score_repeat_it_everywhere() {
        let stats = ScoreStats::compute(&[72.5]).unwrap();
        assert_eq!(stats.mean, 72.5);
        assert_eq!(stats.median, 72.5);
        assert_eq!(stats.min, 72.5);
        assert_eq!(stats.max, 72.5);
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        let stats = ScoreStats::compute(&[90.0, 50.0, 70.0, 60.0]).unwrap();
        assert_eq!(stats.median, 65.0);
        assert_eq!(stats.mean, 67.5);
        assert_eq!(stats.min, 50.0);
        assert_eq!(stats.max, 90.0);
    }

    #[test]
    fn median_of_odd_count_takes_middle_value() {
        let stats = ScoreStats::compute(&[100.0, 0.0, 75.0]).unwrap();
        assert_eq!(stats.median, 75.0);
    }

    #[test]
    fn stats_do_not_depend_on_input_order() {
        let a = ScoreStats::compute(&[10.0, 20.0, 30.0]).unwrap();
        let b = ScoreStats::compute(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tally_counts_each_band() {
        let dist = Distribution::tally(
            [
                SusClassification::Good,
                SusClassification::Unacceptable,
                SusClassification::Good,
                SusClassification::BestImaginable,
            ]
            .into_iter(),
        );
        assert_eq!(dist.count(SusClassification::Unacceptable), 1);
        assert_eq!(dist.count(SusClassification::Marginal), 0);
        assert_eq!(dist.count(SusClassification::Good), 2);
        assert_eq!(dist.count(SusClassification::Excellent), 0);
        assert_eq!(dist.count(SusClassification::BestImaginable), 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn entries_follow_band_order_and_include_zero_counts() {
        let dist = Distribution::tally([SusClassification::Excellent].into_iter());
        let entries: Vec<_> = dist.entries().collect();
        assert_eq!(
            entries,
            vec![
                (SusClassification::Unacceptable, 0),
                (SusClassification::Marginal, 0),
                (SusClassification::Good, 0),
                (SusClassification::Excellent, 1),
                (SusClassification::BestImaginable, 0),
            ]
        );
    }
}
