pub mod algorithms;
pub mod core;
pub mod evaluation;
pub mod io;

pub use crate::algorithms::bags::build_bags;
pub use crate::algorithms::classify::{assemble_class_models, classify, predict};
pub use crate::algorithms::sax::{discretize, NumerosityReducer};
pub use crate::algorithms::tfidf::compute_weights;
pub use crate::core::config::{NumerosityReduction, SaxConfig};
pub use crate::core::error::{Result, SaxError};
pub use crate::core::word::{
    ClassModel, ClassModels, LabeledSeries, WeightedVector, WeightedVectors, Word, WordBag,
    WordBags, WordCounts,
};
pub use crate::evaluation::{log_data_statistics, Evaluation, ShortSeriesPolicy};
pub use crate::io::ucr::{load_dimensions, load_ucr_file, read_ucr, LoadError};

use tracing::{debug, info, warn};

/// High-level SAX-VSM classifier over multi-dimensional time series.
///
/// Training data is a slice of [`LabeledSeries`], one per dimension; sample
/// `i` of a class is the `i`-th series of that class in every dimension.
///
/// # Examples
///
/// ```
/// use saxvsm_rs::{LabeledSeries, SaxConfig, SaxVsm};
///
/// let sine: Vec<f64> = (0..64).map(|i| (i as f64 * 0.4).sin()).collect();
/// let saw: Vec<f64> = (0..64).map(|i| (i % 8) as f64).collect();
///
/// let mut train = LabeledSeries::new();
/// train.insert("sine".into(), vec![sine.clone()]);
/// train.insert("saw".into(), vec![saw.clone()]);
///
/// let clf = SaxVsm::new(SaxConfig::new(8, 4, 4)).unwrap();
/// let models = clf.fit(&[train]).unwrap();
/// assert_eq!(clf.predict(&[&saw[..]], &models).unwrap(), "saw");
/// ```
#[derive(Debug, Clone)]
pub struct SaxVsm {
    config: SaxConfig,
}

impl SaxVsm {
    /// Create a classifier, rejecting invalid configurations up front.
    pub fn new(config: SaxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaxConfig {
        &self.config
    }

    /// Build word bags and tf·idf vectors for one dimension.
    pub fn train_dimension(&self, dim: usize, labeled: &LabeledSeries) -> Result<WeightedVectors> {
        let bags = build_bags(labeled, &self.config)?;
        let weights = compute_weights(&bags);
        debug!(
            dimension = dim,
            classes = bags.len(),
            vocabulary = algorithms::tfidf::document_frequencies(&bags).len(),
            weighted_words = weights.values().map(WeightedVector::len).sum::<usize>(),
            "trained dimension"
        );
        Ok(weights)
    }

    /// Train class models for every dimension.
    ///
    /// With the `parallel` feature the dimensions are trained concurrently;
    /// the result does not depend on the schedule.
    pub fn fit(&self, train: &[LabeledSeries]) -> Result<ClassModels> {
        #[cfg(feature = "parallel")]
        let per_dimension = {
            use rayon::prelude::*;
            train
                .par_iter()
                .enumerate()
                .map(|(dim, labeled)| self.train_dimension(dim, labeled))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let per_dimension = train
            .iter()
            .enumerate()
            .map(|(dim, labeled)| self.train_dimension(dim, labeled))
            .collect::<Result<Vec<_>>>()?;

        Ok(assemble_class_models(per_dimension))
    }

    /// Predict the label of a sample given as one series per dimension.
    pub fn predict<'a, S: AsRef<[f64]>>(
        &self,
        sample: &[S],
        models: &'a ClassModels,
    ) -> Result<&'a str> {
        predict(sample, models, &self.config)
    }

    /// 1 if the sample is classified as `true_label`, else 0.
    pub fn classify<S: AsRef<[f64]>>(
        &self,
        true_label: &str,
        sample: &[S],
        models: &ClassModels,
    ) -> Result<u32> {
        classify(true_label, sample, models, &self.config)
    }

    /// Classify every test sample and aggregate the outcomes.
    ///
    /// Labels and sample counts are taken from dimension 0; every other
    /// dimension must hold the matching samples.
    pub fn evaluate(
        &self,
        test: &[LabeledSeries],
        models: &ClassModels,
        policy: ShortSeriesPolicy,
    ) -> Result<Evaluation> {
        let expected = models
            .values()
            .next()
            .map(ClassModel::n_dimensions)
            .ok_or(SaxError::NoClasses)?;
        if test.len() != expected {
            return Err(SaxError::DimensionMismatch {
                expected,
                actual: test.len(),
            });
        }

        let samples = collect_samples(test)?;

        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::prelude::*;
            samples
                .par_iter()
                .map(|(label, sample)| self.evaluate_sample(label, sample, models, policy))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes = samples
            .iter()
            .map(|(label, sample)| self.evaluate_sample(label, sample, models, policy))
            .collect::<Result<Vec<_>>>()?;

        let mut eval = Evaluation::default();
        for outcome in outcomes {
            eval += outcome;
        }
        info!(
            correct = eval.correct,
            total = eval.total,
            skipped = eval.skipped,
            "evaluation finished"
        );
        Ok(eval)
    }

    fn evaluate_sample(
        &self,
        label: &str,
        sample: &[&[f64]],
        models: &ClassModels,
        policy: ShortSeriesPolicy,
    ) -> Result<Evaluation> {
        let mut eval = Evaluation::default();
        match self.classify(label, sample, models) {
            Ok(hit) => eval.record(hit),
            Err(SaxError::SeriesTooShort { len, window }) if policy == ShortSeriesPolicy::Skip => {
                warn!(label, len, window, "skipping sample shorter than the window");
                eval.skipped += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(eval)
    }
}

/// Gather every test sample as `(label, one series per dimension)`.
fn collect_samples(test: &[LabeledSeries]) -> Result<Vec<(&str, Vec<&[f64]>)>> {
    let Some(first) = test.first() else {
        return Ok(Vec::new());
    };
    let mut samples = Vec::new();
    for (label, series) in first {
        for index in 0..series.len() {
            let sample = test
                .iter()
                .enumerate()
                .map(|(dimension, dim)| {
                    dim.get(label)
                        .and_then(|s| s.get(index))
                        .map(Vec::as_slice)
                        .ok_or_else(|| SaxError::MissingSample {
                            label: label.clone(),
                            index,
                            dimension,
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            samples.push((label.as_str(), sample));
        }
    }
    Ok(samples)
}
