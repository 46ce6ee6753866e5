use std::collections::HashMap;

use crate::core::word::{WeightedVector, Word, WordBags, WeightedVectors};

/// Number of bags containing each word.
pub fn document_frequencies(bags: &WordBags) -> HashMap<&Word, usize> {
    let mut df: HashMap<&Word, usize> = HashMap::new();
    for bag in bags.values() {
        for word in bag.counts.keys() {
            *df.entry(word).or_insert(0) += 1;
        }
    }
    df
}

/// Inverse document frequency `ln(n_classes / df)`.
///
/// Zero when the word occurs in every class; `ln(n_classes)` when it is
/// exclusive to one class.
#[inline]
pub fn idf(n_classes: usize, df: usize) -> f64 {
    debug_assert!(df > 0 && df <= n_classes);
    (n_classes as f64 / df as f64).ln()
}

/// Weight every class's words by `tf · idf`.
///
/// `tf` is the raw count of the word in the class bag and `N` counts every
/// bag, empty ones included. Words found in all classes carry no
/// discriminative power and are left out of every vector, as are all other
/// zero weights. Empty bags produce empty vectors.
///
/// # Examples
///
/// ```
/// use saxvsm_rs::{compute_weights, Word, WordBag, WordBags};
///
/// let mut bags = WordBags::new();
/// for (label, word) in [("A", "aa"), ("B", "bb")] {
///     let mut bag = WordBag::new(label);
///     bag.add_word(Word::from(word));
///     bags.insert(label.to_string(), bag);
/// }
/// let weights = compute_weights(&bags);
/// assert!((weights["A"].weight("aa") - 2f64.ln()).abs() < 1e-12);
/// assert_eq!(weights["A"].weight("bb"), 0.0);
/// ```
pub fn compute_weights(bags: &WordBags) -> WeightedVectors {
    let n_classes = bags.len();
    let df = document_frequencies(bags);

    bags.iter()
        .map(|(label, bag)| {
            let weights = bag
                .counts
                .iter()
                .filter_map(|(word, &tf)| {
                    let w = tf as f64 * idf(n_classes, df[word]);
                    (w > 0.0).then(|| (word.clone(), w))
                })
                .collect();
            (label.clone(), WeightedVector { weights })
        })
        .collect()
}
