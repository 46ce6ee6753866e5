//! SAX-VSM on a synthetic two-dimensional dataset.
//!
//! Three classes of co-evolving signals (think x/y axes of a gesture sensor):
//! - "wave":   slow sine on x, slow cosine on y
//! - "square": square wave on x, its negation on y
//! - "spike":  sparse pulses on x, flat-ish noise on y
//!
//! Run with: cargo run --release --example synthetic_classification

use saxvsm_rs::{LabeledSeries, SaxConfig, SaxVsm, ShortSeriesPolicy};

const LEN: usize = 120;

/// Deterministic pseudo-noise in [-0.5, 0.5).
fn noise(i: usize, seed: usize) -> f64 {
    let x = ((i * 7919 + seed * 104_729) % 1000) as f64 / 1000.0;
    x - 0.5
}

fn sample(class: &str, dim: usize, seed: usize) -> Vec<f64> {
    let phase = seed as f64 * 0.7;
    (0..LEN)
        .map(|i| {
            let t = i as f64;
            let base = match (class, dim) {
                ("wave", 0) => (t * 0.12 + phase).sin(),
                ("wave", _) => (t * 0.12 + phase).cos(),
                ("square", 0) => {
                    if ((i + seed * 3) / 10) % 2 == 0 { 1.0 } else { -1.0 }
                }
                ("square", _) => {
                    if ((i + seed * 3) / 10) % 2 == 0 { -1.0 } else { 1.0 }
                }
                ("spike", 0) => {
                    if (i + seed * 5) % 25 < 3 { 2.0 } else { 0.0 }
                }
                _ => 0.0,
            };
            base + 0.2 * noise(i, seed + dim * 31)
        })
        .collect()
}

fn dataset(n_per_class: usize, seed_offset: usize) -> Vec<LabeledSeries> {
    (0..2)
        .map(|dim| {
            ["wave", "square", "spike"]
                .iter()
                .map(|&class| {
                    let series = (0..n_per_class)
                        .map(|k| sample(class, dim, seed_offset + k))
                        .collect();
                    (class.to_string(), series)
                })
                .collect()
        })
        .collect()
}

fn main() {
    let train = dataset(5, 0);
    let test = dataset(10, 100);

    let config = SaxConfig::new(24, 6, 5);
    let clf = SaxVsm::new(config).expect("valid parameters");

    println!("SAX-VSM synthetic classification");
    println!("================================");
    println!("Dimensions: {}", train.len());
    println!("Series length: {LEN}");
    println!(
        "Window {}, PAA {}, alphabet {}, strategy {}\n",
        clf.config().window_size,
        clf.config().paa_size,
        clf.config().alphabet_size,
        clf.config().strategy
    );

    let models = clf.fit(&train).expect("training succeeds");
    for (label, model) in &models {
        let sizes: Vec<usize> = model.vectors.iter().map(|v| v.len()).collect();
        println!("  class {label:>6}: weighted words per dimension {sizes:?}");
    }

    // Per-sample predictions for the first few test samples of each class
    println!("\nPredictions:");
    for (label, series) in &test[0] {
        for idx in 0..3.min(series.len()) {
            let sample: Vec<&[f64]> = test.iter().map(|d| d[label][idx].as_slice()).collect();
            let predicted = clf.predict(&sample, &models).expect("prediction");
            println!("  {label:>6} #{idx} → {predicted}");
        }
    }

    let eval = clf
        .evaluate(&test, &models, ShortSeriesPolicy::Abort)
        .expect("evaluation");
    println!("\nclassification results: {}", eval.summary(clf.config()));
}
