use crate::algorithms::sax::series_word_counts;
use crate::core::config::SaxConfig;
use crate::core::error::Result;
use crate::core::word::{LabeledSeries, WordBag, WordBags};

/// Build one word bag per class from the series of one dimension.
///
/// Each series is discretized and reduced on its own (the reduction state
/// never spans two series); the retained words of all series of a class are
/// pooled into that class's single bag. A class with no series gets an empty
/// bag.
///
/// # Errors
/// Configuration errors, or `SeriesTooShort` for the first series shorter
/// than the window.
pub fn build_bags(labeled: &LabeledSeries, config: &SaxConfig) -> Result<WordBags> {
    config.validate()?;
    labeled
        .iter()
        .map(|(label, series)| -> Result<(String, WordBag)> {
            let mut bag = WordBag::new(label.clone());
            for ts in series {
                bag.merge_counts(&series_word_counts(ts, config)?);
            }
            Ok((label.clone(), bag))
        })
        .collect()
}
