use std::fmt;

use crate::core::error::{Result, SaxError};

/// Largest supported alphabet; symbols are the lowercase letters `a..=z`.
pub const MAX_ALPHABET_SIZE: usize = 26;

/// Policy for suppressing redundant consecutive words produced by the
/// sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumerosityReduction {
    /// Keep every word.
    None,
    /// Drop a word identical to the previously retained word.
    #[default]
    Exact,
    /// Drop a word whose every symbol lies within `mindist_tolerance`
    /// alphabet steps of the previously retained word.
    MinDist,
}

impl fmt::Display for NumerosityReduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumerosityReduction::None => "NONE",
            NumerosityReduction::Exact => "EXACT",
            NumerosityReduction::MinDist => "MINDIST",
        };
        f.write_str(name)
    }
}

/// Configuration for SAX discretization and numerosity reduction.
///
/// # Examples
///
/// ```
/// use saxvsm_rs::{NumerosityReduction, SaxConfig};
///
/// let config = SaxConfig::new(30, 6, 6).with_strategy(NumerosityReduction::MinDist);
/// assert!(config.validate().is_ok());
/// assert!(SaxConfig::new(4, 5, 3).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaxConfig {
    /// Sliding window length.
    pub window_size: usize,
    /// Number of PAA segments per window (word length).
    pub paa_size: usize,
    /// Number of symbols.
    pub alphabet_size: usize,
    /// Windows with a standard deviation below this are treated as flat.
    pub norm_threshold: f64,
    /// Numerosity reduction applied to consecutive words of one series.
    pub strategy: NumerosityReduction,
    /// Largest per-symbol drift that `MinDist` still treats as a repeat.
    pub mindist_tolerance: usize,
}

impl SaxConfig {
    pub fn new(window_size: usize, paa_size: usize, alphabet_size: usize) -> Self {
        Self {
            window_size,
            paa_size,
            alphabet_size,
            norm_threshold: 0.01,
            strategy: NumerosityReduction::Exact,
            mindist_tolerance: 1,
        }
    }

    pub fn with_norm_threshold(mut self, threshold: f64) -> Self {
        self.norm_threshold = threshold;
        self
    }

    pub fn with_strategy(mut self, strategy: NumerosityReduction) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_mindist_tolerance(mut self, tolerance: usize) -> Self {
        self.mindist_tolerance = tolerance;
        self
    }

    /// Check the parameter invariants. Every core entry point calls this
    /// before touching any series.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SaxError::invalid("window_size", "must be > 0"));
        }
        if self.paa_size == 0 {
            return Err(SaxError::invalid("paa_size", "must be > 0"));
        }
        if self.paa_size > self.window_size {
            return Err(SaxError::invalid(
                "paa_size",
                format!(
                    "must be <= window_size ({}), got {}",
                    self.window_size, self.paa_size
                ),
            ));
        }
        if self.alphabet_size < 2 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(SaxError::invalid(
                "alphabet_size",
                format!(
                    "must be in 2..={MAX_ALPHABET_SIZE}, got {}",
                    self.alphabet_size
                ),
            ));
        }
        if !self.norm_threshold.is_finite() || self.norm_threshold < 0.0 {
            return Err(SaxError::invalid(
                "norm_threshold",
                format!("must be finite and >= 0, got {}", self.norm_threshold),
            ));
        }
        Ok(())
    }
}
