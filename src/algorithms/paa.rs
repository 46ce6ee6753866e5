/// Mean and sample standard deviation of a window.
///
/// Uses the `n - 1` denominator; a single-point window has deviation 0.
pub fn mean_std(window: &[f64]) -> (f64, f64) {
    let n = window.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let n_f = n as f64;
    let mean = window.iter().sum::<f64>() / n_f;
    if n < 2 {
        return (mean, 0.0);
    }
    let ss: f64 = window.iter().map(|x| (x - mean) * (x - mean)).sum();
    (mean, (ss / (n_f - 1.0)).sqrt())
}

/// Z-normalize `window` into `out`.
///
/// Windows whose standard deviation is below `threshold` are flat: they
/// normalize to all zeros instead of amplifying noise by a tiny divisor.
pub fn znorm_into(window: &[f64], threshold: f64, out: &mut Vec<f64>) {
    out.clear();
    let (mean, sd) = mean_std(window);
    if sd < threshold || sd == 0.0 {
        out.resize(window.len(), 0.0);
    } else {
        out.extend(window.iter().map(|x| (x - mean) / sd));
    }
}

/// Z-normalize a window, returning a new vector.
pub fn znorm(window: &[f64], threshold: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(window.len());
    znorm_into(window, threshold, &mut out);
    out
}

/// Piecewise Aggregate Approximation: average `values` over `segments`
/// equal-width segments.
///
/// When `segments` does not divide the length, a point straddling a segment
/// boundary contributes to both segments in proportion to its overlap.
///
/// # Panics
/// If `segments` is 0 or larger than `values.len()`.
pub fn paa(values: &[f64], segments: usize) -> Vec<f64> {
    let n = values.len();
    assert!(
        segments > 0 && segments <= n,
        "PAA size ({segments}) must be in 1..={n}"
    );
    if segments == n {
        return values.to_vec();
    }

    let width = n as f64 / segments as f64;
    (0..segments)
        .map(|s| {
            let start = s as f64 * width;
            let end = (s + 1) as f64 * width;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(n);
            let mut acc = 0.0;
            for (j, &v) in values.iter().enumerate().take(last).skip(first) {
                let overlap = end.min((j + 1) as f64) - start.max(j as f64);
                if overlap > 0.0 {
                    acc += v * overlap;
                }
            }
            acc / width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_std_simple() {
        // [1, 2, 3, 4]: mean 2.5, sample variance 5/3
        let (mean, sd) = mean_std(&[1.0, 2.0, 3.0, 4.0]);
        assert!((mean - 2.5).abs() < 1e-12);
        assert!((sd - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_std_single_point() {
        let (mean, sd) = mean_std(&[7.0]);
        assert!((mean - 7.0).abs() < 1e-12);
        assert_eq!(sd, 0.0);
    }

    #[test]
    fn test_znorm_regular() {
        let z = znorm(&[2.0, 4.0, 6.0], 0.01);
        // mean 4, sd 2
        assert!((z[0] + 1.0).abs() < 1e-12);
        assert!(z[1].abs() < 1e-12);
        assert!((z[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_znorm_flat_window_is_zero() {
        let z = znorm(&[5.0, 5.0, 5.001, 5.0], 0.01);
        assert_eq!(z, vec![0.0; 4]);
        // large offsets must not leak noise either
        let z = znorm(&[1e9; 6], 0.01);
        assert_eq!(z, vec![0.0; 6]);
    }

    #[test]
    fn test_paa_even_split() {
        let v = [1.0, 3.0, 5.0, 7.0, 9.0, 11.0];
        let p = paa(&v, 3);
        assert_eq!(p.len(), 3);
        assert!((p[0] - 2.0).abs() < 1e-12);
        assert!((p[1] - 6.0).abs() < 1e-12);
        assert!((p[2] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_paa_fractional_boundaries() {
        // 5 points into 2 segments of width 2.5: point 2 is split half/half
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        let p = paa(&v, 2);
        assert!((p[0] - (1.0 + 2.0 + 0.5 * 3.0) / 2.5).abs() < 1e-12);
        assert!((p[1] - (0.5 * 3.0 + 4.0 + 5.0) / 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_paa_preserves_mean() {
        let v: Vec<f64> = (0..7).map(|i| (i as f64 * 0.7).sin()).collect();
        for segments in 1..=7 {
            let p = paa(&v, segments);
            let mean_v = v.iter().sum::<f64>() / v.len() as f64;
            let mean_p = p.iter().sum::<f64>() / p.len() as f64;
            assert!((mean_v - mean_p).abs() < 1e-12, "segments={segments}");
        }
    }

    #[test]
    fn test_paa_identity() {
        let v = [3.0, 1.0, 2.0];
        assert_eq!(paa(&v, 3), v.to_vec());
    }
}
