use std::fmt::Write as _;

use tracing::info;

use crate::core::config::SaxConfig;
use crate::core::word::LabeledSeries;

/// What evaluation does with a test sample shorter than the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortSeriesPolicy {
    /// Stop and return the error.
    #[default]
    Abort,
    /// Log a warning, leave the sample out of the totals and continue.
    Skip,
}

/// Aggregated 0/1 classification outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Correctly classified samples.
    pub correct: usize,
    /// Classified samples.
    pub total: usize,
    /// Samples left out under [`ShortSeriesPolicy::Skip`].
    pub skipped: usize,
}

impl Evaluation {
    /// Record one correctness signal.
    pub fn record(&mut self, hit: u32) {
        self.correct += hit as usize;
        self.total += 1;
    }

    /// `correct / total`, or 0 when nothing was classified.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn error(&self) -> f64 {
        1.0 - self.accuracy()
    }

    /// One-line report of the parameters and the outcome.
    ///
    /// ```
    /// use saxvsm_rs::{Evaluation, SaxConfig};
    ///
    /// let eval = Evaluation { correct: 14, total: 15, skipped: 0 };
    /// assert_eq!(
    ///     eval.summary(&SaxConfig::new(30, 6, 6)),
    ///     "strategy EXACT, window 30, PAA 6, alphabet 6,  accuracy 0.93333,  error 0.06667"
    /// );
    /// ```
    pub fn summary(&self, config: &SaxConfig) -> String {
        format!(
            "strategy {}, window {}, PAA {}, alphabet {},  accuracy {},  error {}",
            config.strategy,
            config.window_size,
            config.paa_size,
            config.alphabet_size,
            format_ratio(self.accuracy()),
            format_ratio(self.error()),
        )
    }
}

impl std::ops::AddAssign for Evaluation {
    fn add_assign(&mut self, other: Self) {
        self.correct += other.correct;
        self.total += other.total;
        self.skipped += other.skipped;
    }
}

/// Format with at least two and at most five decimals.
pub fn format_ratio(v: f64) -> String {
    let mut s = format!("{v:.5}");
    while s.ends_with('0') && s.len() - s.find('.').map_or(s.len(), |i| i + 1) > 2 {
        s.pop();
    }
    s
}

/// Log the class count, per-class sample counts and per-sample dimension
/// lengths of a multi-dimensional dataset.
pub fn log_data_statistics(data: &[LabeledSeries], description: &str) {
    let Some(first) = data.first() else {
        info!("{description}: no dimensions");
        return;
    };
    info!("{description} classes count: {}", first.len());
    for (label, series) in first {
        info!("  class {label}, samples {}", series.len());
        for idx in 0..series.len() {
            let mut lengths = String::new();
            for dim in data {
                let len = dim.get(label).and_then(|s| s.get(idx)).map_or(0, Vec::len);
                let _ = write!(lengths, "{len} ");
            }
            info!("    sample dim lengths {}", lengths.trim_end());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NumerosityReduction;

    #[test]
    fn test_accuracy_and_error() {
        let mut eval = Evaluation::default();
        for hit in [1, 0, 1, 1] {
            eval.record(hit);
        }
        assert_eq!(eval.correct, 3);
        assert_eq!(eval.total, 4);
        assert!((eval.accuracy() - 0.75).abs() < 1e-12);
        assert!((eval.error() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_evaluation() {
        let eval = Evaluation::default();
        assert_eq!(eval.accuracy(), 0.0);
        assert_eq!(eval.error(), 1.0);
    }

    #[test]
    fn test_add_assign() {
        let mut a = Evaluation {
            correct: 2,
            total: 3,
            skipped: 1,
        };
        a += Evaluation {
            correct: 1,
            total: 1,
            skipped: 0,
        };
        assert_eq!(
            a,
            Evaluation {
                correct: 3,
                total: 4,
                skipped: 1
            }
        );
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(1.0), "1.00");
        assert_eq!(format_ratio(0.5), "0.50");
        assert_eq!(format_ratio(0.125), "0.125");
        assert_eq!(format_ratio(2.0 / 3.0), "0.66667");
        assert_eq!(format_ratio(0.0), "0.00");
    }

    #[test]
    fn test_summary_strategy_name() {
        let eval = Evaluation {
            correct: 1,
            total: 2,
            skipped: 0,
        };
        let config = SaxConfig::new(10, 5, 4).with_strategy(NumerosityReduction::MinDist);
        assert_eq!(
            eval.summary(&config),
            "strategy MINDIST, window 10, PAA 5, alphabet 4,  accuracy 0.50,  error 0.50"
        );
    }
}
