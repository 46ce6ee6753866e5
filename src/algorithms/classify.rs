use crate::algorithms::sax::series_word_counts;
use crate::core::config::SaxConfig;
use crate::core::error::{Result, SaxError};
use crate::core::word::{ClassModel, ClassModels, WeightedVector, WeightedVectors, WordCounts};

/// Combine per-dimension weighted vectors into per-class models.
///
/// `per_dimension[d]` holds the vectors computed for dimension `d`. A class
/// missing from some dimension gets an empty vector there, so every model has
/// exactly `per_dimension.len()` vectors.
pub fn assemble_class_models(per_dimension: Vec<WeightedVectors>) -> ClassModels {
    let n_dims = per_dimension.len();
    let mut models = ClassModels::new();
    for (dim, vectors) in per_dimension.into_iter().enumerate() {
        for (label, vector) in vectors {
            let model = models.entry(label.clone()).or_insert_with(|| ClassModel {
                label,
                vectors: vec![WeightedVector::default(); n_dims],
            });
            model.vectors[dim] = vector;
        }
    }
    models
}

/// Word counts of a sample, one map per dimension, reduced with the same
/// policy as the training data.
pub fn sample_word_counts<S: AsRef<[f64]>>(
    sample: &[S],
    config: &SaxConfig,
) -> Result<Vec<WordCounts>> {
    sample
        .iter()
        .map(|ts| series_word_counts(ts.as_ref(), config))
        .collect()
}

/// Score every class against pre-computed sample word counts.
///
/// The score of a class is the sum over dimensions of the sparse dot product
/// between the sample's counts and the class's weighted vector. Scores are
/// returned in ascending label order.
pub fn score_counts<'a>(
    counts: &[WordCounts],
    models: &'a ClassModels,
) -> Result<Vec<(&'a str, f64)>> {
    models
        .values()
        .map(|model| {
            if model.n_dimensions() != counts.len() {
                return Err(SaxError::DimensionMismatch {
                    expected: model.n_dimensions(),
                    actual: counts.len(),
                });
            }
            let score: f64 = model
                .vectors
                .iter()
                .zip(counts)
                .map(|(vector, c)| vector.dot(c))
                .sum();
            Ok((model.label.as_str(), score))
        })
        .collect()
}

/// Pick the best-scoring class. Ties keep the earliest entry, i.e. the
/// smallest label.
pub fn arg_max<'a>(scores: &[(&'a str, f64)]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for &(label, score) in scores {
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((label, score)),
        }
    }
    best.map(|(label, _)| label)
}

/// Per-class scores of a sample given as one series per dimension.
pub fn score<'a, S: AsRef<[f64]>>(
    sample: &[S],
    models: &'a ClassModels,
    config: &SaxConfig,
) -> Result<Vec<(&'a str, f64)>> {
    config.validate()?;
    let counts = sample_word_counts(sample, config)?;
    score_counts(&counts, models)
}

/// Predict the label of a sample given as one series per dimension.
///
/// # Errors
/// `NoClasses` for an empty model set, `DimensionMismatch` when the sample's
/// dimension count differs from the models', and any discretization error.
pub fn predict<'a, S: AsRef<[f64]>>(
    sample: &[S],
    models: &'a ClassModels,
    config: &SaxConfig,
) -> Result<&'a str> {
    if models.is_empty() {
        return Err(SaxError::NoClasses);
    }
    let scores = score(sample, models, config)?;
    arg_max(&scores).ok_or(SaxError::NoClasses)
}

/// Classify a sample and report whether the prediction matches
/// `true_label`: 1 on a hit, 0 on a miss.
pub fn classify<S: AsRef<[f64]>>(
    true_label: &str,
    sample: &[S],
    models: &ClassModels,
    config: &SaxConfig,
) -> Result<u32> {
    let predicted = predict(sample, models, config)?;
    Ok(u32::from(predicted == true_label))
}
