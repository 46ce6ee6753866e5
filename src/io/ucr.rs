//! Reader for the UCR archive text format.
//!
//! One sample per line: the class label followed by the series values,
//! separated by whitespace and/or commas. Multi-dimensional datasets are
//! stored as one file per dimension, `"{prefix}{dim}.txt"`, with samples in
//! the same order in every file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::core::word::LabeledSeries;

/// Errors raised while reading UCR-formatted data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: label '{label}' has no values")]
    NoValues { line: usize, label: String },

    #[error("no samples found in {0}")]
    Empty(String),

    #[error("dimension {dimension}: {reason}")]
    Inconsistent { dimension: usize, reason: String },
}

/// Normalize a label token: integral numbers (`1`, `1.0`, `1.0e+00`) become
/// their integer text, anything else is kept verbatim.
pub fn normalize_label(token: &str) -> String {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
            format!("{}", v as i64)
        }
        _ => token.to_string(),
    }
}

/// Read UCR-formatted samples, grouped by class label in file order.
pub fn read_ucr<R: BufRead>(reader: R, source: &str) -> Result<LabeledSeries, LoadError> {
    let mut data = LabeledSeries::new();
    let mut n_samples = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| LoadError::Io {
            path: source.to_string(),
            source: e,
        })?;

        let mut tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        let Some(label) = tokens.next() else {
            continue;
        };

        let values = tokens
            .map(|t| {
                t.parse::<f64>().map_err(|_| LoadError::Parse {
                    line: line_no,
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        if values.is_empty() {
            return Err(LoadError::NoValues {
                line: line_no,
                label: label.to_string(),
            });
        }

        data.entry(normalize_label(label)).or_default().push(values);
        n_samples += 1;
    }

    if n_samples == 0 {
        return Err(LoadError::Empty(source.to_string()));
    }
    Ok(data)
}

/// Read one UCR file.
pub fn load_ucr_file(path: impl AsRef<Path>) -> Result<LabeledSeries, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: display.clone(),
        source: e,
    })?;
    read_ucr(BufReader::new(file), &display)
}

/// Read `n_dimensions` files named `"{prefix}{dim}.txt"` and check that they
/// describe the same samples.
pub fn load_dimensions(prefix: &str, n_dimensions: usize) -> Result<Vec<LabeledSeries>, LoadError> {
    let data = (0..n_dimensions)
        .map(|dim| load_ucr_file(format!("{prefix}{dim}.txt")))
        .collect::<Result<Vec<_>, _>>()?;
    check_dimensions(&data)?;
    Ok(data)
}

/// Check that every dimension lists the same classes with the same number of
/// samples as dimension 0.
pub fn check_dimensions(data: &[LabeledSeries]) -> Result<(), LoadError> {
    let Some(first) = data.first() else {
        return Ok(());
    };
    for (dimension, dim) in data.iter().enumerate().skip(1) {
        if dim.len() != first.len() {
            return Err(LoadError::Inconsistent {
                dimension,
                reason: format!("{} classes, dimension 0 has {}", dim.len(), first.len()),
            });
        }
        for (label, series) in first {
            let n = dim.get(label).map_or(0, Vec::len);
            if n != series.len() {
                return Err(LoadError::Inconsistent {
                    dimension,
                    reason: format!(
                        "class '{label}' has {n} samples, dimension 0 has {}",
                        series.len()
                    ),
                });
            }
        }
    }
    Ok(())
}
