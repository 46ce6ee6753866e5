use std::sync::OnceLock;

use crate::core::config::MAX_ALPHABET_SIZE;

/// Breakpoint tables for every alphabet size, indexed by size.
/// Entries 0 and 1 are empty.
static TABLES: OnceLock<Vec<Vec<f64>>> = OnceLock::new();

/// Return the `alphabet_size - 1` ascending breakpoints that split the
/// standard normal distribution into `alphabet_size` equiprobable regions.
///
/// Tables for all supported sizes are computed once on first use and shared.
///
/// # Panics
/// If `alphabet_size` is outside `2..=26`.
pub fn breakpoints(alphabet_size: usize) -> &'static [f64] {
    assert!(
        (2..=MAX_ALPHABET_SIZE).contains(&alphabet_size),
        "Alphabet size must be in 2..={MAX_ALPHABET_SIZE}, got {alphabet_size}"
    );
    let tables = TABLES.get_or_init(|| {
        (0..=MAX_ALPHABET_SIZE)
            .map(|a| {
                if a < 2 {
                    Vec::new()
                } else {
                    (1..a).map(|i| inverse_normal_cdf(i as f64 / a as f64)).collect()
                }
            })
            .collect()
    });
    &tables[alphabet_size]
}

/// Map a value to its symbol index: the number of breakpoints `<= value`.
///
/// A value lying exactly on a breakpoint belongs to the upper region.
#[inline]
pub fn symbol_index(value: f64, cuts: &[f64]) -> usize {
    cuts.iter().take_while(|&&c| c <= value).count()
}

// Rational approximation coefficients (P. J. Acklam), relative error < 1.15e-9.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];
const P_LOW: f64 = 0.02425;

/// Quantile function of the standard normal distribution for `p` in (0, 1).
pub fn inverse_normal_cdf(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p < 1.0);
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

#[inline]
fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}
