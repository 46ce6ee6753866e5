use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Series of every class for one dimension, keyed by class label.
pub type LabeledSeries = BTreeMap<String, Vec<Vec<f64>>>;

/// Word → occurrence count. Ordered so that scoring sums in a fixed order.
pub type WordCounts = BTreeMap<Word, usize>;

/// One word bag per class label, for one dimension.
pub type WordBags = BTreeMap<String, WordBag>;

/// One weighted vector per class label, for one dimension.
pub type WeightedVectors = BTreeMap<String, WeightedVector>;

/// Per-class models across all dimensions.
pub type ClassModels = BTreeMap<String, ClassModel>;

/// A SAX word: one symbol per PAA segment, `'a'` being the lowest region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Word(String);

impl Word {
    /// Build a word from symbol indices (0 → `'a'`).
    pub fn from_indices(indices: &[usize]) -> Self {
        Word(
            indices
                .iter()
                .map(|&i| char::from(b'a' + i as u8))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbol indices of this word.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.bytes().map(|b| (b - b'a') as usize)
    }

    /// Largest per-position symbol distance to `other`, or `None` when the
    /// words have different lengths.
    pub fn max_symbol_gap(&self, other: &Word) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.indices()
                .zip(other.indices())
                .map(|(a, b)| a.abs_diff(b))
                .max()
                .unwrap_or(0),
        )
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word(s.to_owned())
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Word frequencies of one class on one dimension.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordBag {
    /// Class label the bag belongs to.
    pub label: String,
    /// Retained word counts.
    pub counts: WordCounts,
}

impl WordBag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            counts: WordCounts::new(),
        }
    }

    pub fn add_word(&mut self, word: Word) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    /// Add every count of `counts` into this bag.
    pub fn merge_counts(&mut self, counts: &WordCounts) {
        for (word, &n) in counts {
            *self.counts.entry(word.clone()).or_insert(0) += n;
        }
    }

    /// Occurrences of `word` (0 when absent).
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Discriminative tf·idf weights of one class on one dimension.
///
/// Only strictly positive weights are stored.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedVector {
    pub weights: HashMap<Word, f64>,
}

impl WeightedVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of `word` (0 when absent).
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sparse dot product with a sample's word counts.
    ///
    /// Words unknown to this vector contribute nothing. The sum runs in the
    /// sample's word order so equal inputs always give bit-identical scores.
    pub fn dot(&self, counts: &WordCounts) -> f64 {
        counts
            .iter()
            .filter_map(|(word, &n)| self.weights.get(word).map(|w| n as f64 * w))
            .sum()
    }
}

/// Weighted vectors of one class, indexed by dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassModel {
    pub label: String,
    pub vectors: Vec<WeightedVector>,
}

impl ClassModel {
    pub fn n_dimensions(&self) -> usize {
        self.vectors.len()
    }
}
