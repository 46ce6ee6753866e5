use crate::algorithms::alphabet::{breakpoints, symbol_index};
use crate::algorithms::paa::{paa, znorm_into};
use crate::core::config::{NumerosityReduction, SaxConfig};
use crate::core::error::{Result, SaxError};
use crate::core::word::{Word, WordCounts};

/// Convert a series into one SAX word per sliding-window position.
///
/// The window advances one point at a time, so a series of length `n` yields
/// `n - window_size + 1` words. No numerosity reduction is applied here.
///
/// # Examples
///
/// ```
/// use saxvsm_rs::{discretize, SaxConfig};
///
/// let ts: Vec<f64> = (1..=8).map(f64::from).collect();
/// let words = discretize(&ts, &SaxConfig::new(4, 2, 3)).unwrap();
/// assert_eq!(words.len(), 5);
/// assert!(words.iter().all(|w| w.as_str() == "ac"));
/// ```
pub fn discretize(series: &[f64], config: &SaxConfig) -> Result<Vec<Word>> {
    config.validate()?;
    let w = config.window_size;
    if series.len() < w {
        return Err(SaxError::SeriesTooShort {
            len: series.len(),
            window: w,
        });
    }

    let cuts = breakpoints(config.alphabet_size);
    let mut normalized = Vec::with_capacity(w);
    let mut indices = Vec::with_capacity(config.paa_size);

    Ok(series
        .windows(w)
        .map(|window| {
            znorm_into(window, config.norm_threshold, &mut normalized);
            indices.clear();
            indices.extend(
                paa(&normalized, config.paa_size)
                    .into_iter()
                    .map(|v| symbol_index(v, cuts)),
            );
            Word::from_indices(&indices)
        })
        .collect())
}

/// Stateful filter applying a numerosity-reduction policy to the words of
/// one series, in order.
#[derive(Debug, Clone)]
pub struct NumerosityReducer {
    strategy: NumerosityReduction,
    tolerance: usize,
    last: Option<Word>,
}

impl NumerosityReducer {
    pub fn new(config: &SaxConfig) -> Self {
        Self {
            strategy: config.strategy,
            tolerance: config.mindist_tolerance,
            last: None,
        }
    }

    /// Decide whether `word` is retained, remembering it if so.
    pub fn admit(&mut self, word: &Word) -> bool {
        let redundant = match (&self.last, self.strategy) {
            (None, _) | (_, NumerosityReduction::None) => false,
            (Some(prev), NumerosityReduction::Exact) => prev == word,
            (Some(prev), NumerosityReduction::MinDist) => prev
                .max_symbol_gap(word)
                .is_some_and(|gap| gap <= self.tolerance),
        };
        if !redundant {
            self.last = Some(word.clone());
        }
        !redundant
    }

    /// Forget the previously retained word, e.g. at a series boundary.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Apply the configured numerosity reduction to one series' words.
pub fn reduce(words: Vec<Word>, config: &SaxConfig) -> Vec<Word> {
    let mut reducer = NumerosityReducer::new(config);
    words.into_iter().filter(|w| reducer.admit(w)).collect()
}

/// Discretize a series, reduce it and count the retained words.
pub fn series_word_counts(series: &[f64], config: &SaxConfig) -> Result<WordCounts> {
    let mut counts = WordCounts::new();
    for word in reduce(discretize(series, config)?, config) {
        *counts.entry(word).or_insert(0) += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<Word> {
        ws.iter().map(|&w| Word::from(w)).collect()
    }

    #[test]
    fn test_discretize_length() {
        let ts: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
        let config = SaxConfig::new(10, 4, 5);
        let out = discretize(&ts, &config).unwrap();
        assert_eq!(out.len(), 50 - 10 + 1);
        for w in &out {
            assert_eq!(w.len(), 4);
            assert!(w.indices().all(|i| i < 5));
        }
    }

    #[test]
    fn test_discretize_ramp() {
        // Every window of a linear ramp has the same z-normalized shape:
        // PAA of [-1.16, -0.39, 0.39, 1.16] is [-0.77, 0.77] → "ac"
        let ts: Vec<f64> = (1..=8).map(f64::from).collect();
        let config = SaxConfig::new(4, 2, 3).with_norm_threshold(0.01);
        let out = discretize(&ts, &config).unwrap();
        assert_eq!(out, words(&["ac"; 5]));
    }

    #[test]
    fn test_discretize_flat_series_is_middle_symbol() {
        let ts = vec![3.0; 12];
        let config = SaxConfig::new(6, 3, 3);
        let out = discretize(&ts, &config).unwrap();
        assert!(out.iter().all(|w| w.as_str() == "bbb"));

        let config = SaxConfig::new(6, 3, 4);
        let out = discretize(&ts, &config).unwrap();
        assert!(out.iter().all(|w| w.as_str() == "ccc"));
    }

    #[test]
    fn test_discretize_too_short() {
        let config = SaxConfig::new(10, 4, 3);
        let err = discretize(&[1.0, 2.0, 3.0], &config).unwrap_err();
        assert_eq!(err, SaxError::SeriesTooShort { len: 3, window: 10 });
    }

    #[test]
    fn test_discretize_rejects_bad_config() {
        let config = SaxConfig::new(4, 6, 3);
        let err = discretize(&[1.0; 10], &config).unwrap_err();
        assert!(matches!(err, SaxError::InvalidParameter { .. }));
    }

    #[test]
    fn test_increasing_series_gives_nondecreasing_symbols() {
        let ts: Vec<f64> = (0..20).map(|i| (i as f64).powf(1.7) + 0.1 * i as f64).collect();
        let config = SaxConfig::new(6, 6, 2);
        for w in discretize(&ts, &config).unwrap() {
            let idx: Vec<usize> = w.indices().collect();
            assert!(idx.windows(2).all(|p| p[0] <= p[1]), "word {w}");
        }
    }

    #[test]
    fn test_exact_reduction() {
        let config = SaxConfig::new(4, 2, 3).with_strategy(NumerosityReduction::Exact);
        let out = reduce(words(&["ab", "ab", "ac", "ab", "ab", "ab"]), &config);
        assert_eq!(out, words(&["ab", "ac", "ab"]));
    }

    #[test]
    fn test_none_reduction_keeps_everything() {
        let config = SaxConfig::new(4, 2, 3).with_strategy(NumerosityReduction::None);
        let input = words(&["ab", "ab", "ab"]);
        assert_eq!(reduce(input.clone(), &config), input);
    }

    #[test]
    fn test_mindist_reduction() {
        let config = SaxConfig::new(4, 3, 4).with_strategy(NumerosityReduction::MinDist);
        // "abc"→"bbd" drifts one step everywhere: suppressed.
        // "abc"→"acd" drifts one step: suppressed.
        // "abc"→"add" drifts two steps: kept, and becomes the new reference.
        let out = reduce(words(&["abc", "bbd", "acd", "add", "add"]), &config);
        assert_eq!(out, words(&["abc", "add"]));
    }

    #[test]
    fn test_mindist_zero_tolerance_is_exact() {
        let input = words(&["abc", "abc", "abd", "abd", "abc"]);
        let mindist = SaxConfig::new(4, 3, 4)
            .with_strategy(NumerosityReduction::MinDist)
            .with_mindist_tolerance(0);
        let exact = SaxConfig::new(4, 3, 4).with_strategy(NumerosityReduction::Exact);
        assert_eq!(reduce(input.clone(), &mindist), reduce(input, &exact));
    }

    #[test]
    fn test_reducer_reset() {
        let config = SaxConfig::new(4, 2, 3);
        let mut reducer = NumerosityReducer::new(&config);
        let w = Word::from("ab");
        assert!(reducer.admit(&w));
        assert!(!reducer.admit(&w));
        reducer.reset();
        assert!(reducer.admit(&w));
    }

    #[test]
    fn test_series_word_counts() {
        let ts: Vec<f64> = (1..=8).map(f64::from).collect();
        let exact = SaxConfig::new(4, 2, 3);
        let counts = series_word_counts(&ts, &exact).unwrap();
        assert_eq!(counts.get("ac"), Some(&1));

        let none = exact.clone().with_strategy(NumerosityReduction::None);
        let counts = series_word_counts(&ts, &none).unwrap();
        assert_eq!(counts.get("ac"), Some(&5));
    }
}
