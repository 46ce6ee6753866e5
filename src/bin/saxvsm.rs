//! SAX-VSM classifier command-line driver.
//!
//! Reads `{train}{dim}.txt` / `{test}{dim}.txt` UCR files for every
//! dimension, trains class models and reports the test accuracy.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use saxvsm_rs::{
    load_dimensions, log_data_statistics, NumerosityReduction, SaxConfig, SaxVsm,
    ShortSeriesPolicy,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    None,
    Exact,
    Mindist,
}

impl From<Strategy> for NumerosityReduction {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::None => NumerosityReduction::None,
            Strategy::Exact => NumerosityReduction::Exact,
            Strategy::Mindist => NumerosityReduction::MinDist,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "saxvsm")]
#[command(about = "SAX-VSM classification of multi-dimensional time series")]
struct Args {
    /// Training data prefix; dimension `i` is read from `{prefix}{i}.txt`.
    #[arg(long)]
    train: String,

    /// Test data prefix; dimension `i` is read from `{prefix}{i}.txt`.
    #[arg(long)]
    test: String,

    /// Number of dimensions.
    #[arg(short, long, default_value = "1")]
    dimensions: usize,

    /// SAX sliding window size.
    #[arg(short, long, default_value = "30")]
    window: usize,

    /// SAX PAA size.
    #[arg(short, long, default_value = "6")]
    paa: usize,

    /// SAX alphabet size.
    #[arg(short, long, default_value = "6")]
    alphabet: usize,

    /// SAX numerosity reduction strategy.
    #[arg(short, long, value_enum, default_value = "exact")]
    strategy: Strategy,

    /// SAX normalization threshold.
    #[arg(long, default_value = "0.01")]
    threshold: f64,

    /// Largest per-symbol drift treated as a repeat by the mindist strategy.
    #[arg(long, default_value = "1")]
    mindist_tolerance: usize,

    /// Skip test samples shorter than the window instead of failing.
    #[arg(long)]
    skip_short: bool,

    /// Print the evaluation as JSON.
    #[arg(long)]
    json: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SaxConfig::new(args.window, args.paa, args.alphabet)
        .with_norm_threshold(args.threshold)
        .with_strategy(args.strategy.into())
        .with_mindist_tolerance(args.mindist_tolerance);

    info!("SAX-VSM Classifier");
    info!("parameters:");
    info!("  train data:                  {}", args.train);
    info!("  test data:                   {}", args.test);
    info!("  num dimensions:              {}", args.dimensions);
    info!("  SAX sliding window size:     {}", config.window_size);
    info!("  SAX PAA size:                {}", config.paa_size);
    info!("  SAX alphabet size:           {}", config.alphabet_size);
    info!("  SAX numerosity reduction:    {}", config.strategy);
    info!("  SAX normalization threshold: {}", config.norm_threshold);

    let clf = SaxVsm::new(config).context("invalid SAX parameters")?;

    let train = load_dimensions(&args.train, args.dimensions)
        .with_context(|| format!("loading training data from {}*.txt", args.train))?;
    let test = load_dimensions(&args.test, args.dimensions)
        .with_context(|| format!("loading test data from {}*.txt", args.test))?;
    log_data_statistics(&train, "train");
    log_data_statistics(&test, "test");

    let models = clf.fit(&train).context("training failed")?;
    let policy = if args.skip_short {
        ShortSeriesPolicy::Skip
    } else {
        ShortSeriesPolicy::Abort
    };
    let eval = clf
        .evaluate(&test, &models, policy)
        .context("classification failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
    } else {
        println!("classification results: {}", eval.summary(clf.config()));
    }
    Ok(())
}
