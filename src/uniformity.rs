//! Chi-squared uniformity test for pseudorandom sequences.
//!
//! After generating a pseudorandom sequence it is necessary to check the
//! goodness of the obtained sample: does it actually follow a uniform
//! distribution on `[0, 1)`? The test here partitions the unit interval
//! into `s` equal-width bins, counts the samples falling in each, and
//! computes the chi-squared statistic
//!
//! ```text
//! V = Σᵢ (Rᵢ − N/s)² / (N/s)
//! ```
//!
//! where `Rᵢ` is the count in bin `i`. A perfectly uniform sequence puts
//! `N/s` samples in every bin and yields `V = 0`; larger values indicate
//! departure from uniformity.

use crate::error::SimulationError;

/// Result of a chi-squared uniformity test.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityReport {
    /// Samples counted per bin; sums to `sample_count`.
    pub counts: Vec<usize>,
    /// Left edge of each bin (`i / s` for bin `i`).
    pub bin_edges: Vec<f64>,
    /// The chi-squared statistic `V`.
    pub statistic: f64,
    /// Number of samples tested.
    pub sample_count: usize,
}

/// Runs the chi-squared uniformity test on samples assumed uniform on `[0, 1)`.
///
/// Bins are lower-inclusive, upper-exclusive; a sample at exactly `1.0` is
/// folded into the last bin so that every sample lands in exactly one bin
/// and the counts always sum to `samples.len()`.
///
/// # Errors
/// Returns [`SimulationError::InvalidParameter`] if `bins == 0` or there
/// are fewer samples than bins.
///
/// # Examples
/// ```
/// use simstat::uniformity::chi_squared_uniformity;
/// // A perfectly even grid of 100 points in 10 bins: V = 0.
/// let samples: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
/// let report = chi_squared_uniformity(&samples, 10).unwrap();
/// assert_eq!(report.counts, vec![10; 10]);
/// assert_eq!(report.statistic, 0.0);
/// ```
pub fn chi_squared_uniformity(
    samples: &[f64],
    bins: usize,
) -> Result<UniformityReport, SimulationError> {
    if bins == 0 {
        return Err(SimulationError::InvalidParameter(
            "bin count must be positive".into(),
        ));
    }
    let n = samples.len();
    if n < bins {
        return Err(SimulationError::InvalidParameter(format!(
            "need at least as many samples as bins, got {n} samples for {bins} bins"
        )));
    }

    let mut counts = vec![0_usize; bins];
    for &u in samples {
        let i = ((u * bins as f64) as usize).min(bins - 1);
        counts[i] += 1;
    }

    let expected = n as f64 / bins as f64;
    let mut statistic = 0.0;
    for &count in &counts {
        let dev = count as f64 - expected;
        statistic += dev * dev / expected;
    }

    let bin_edges = (0..bins).map(|i| i as f64 / bins as f64).collect();
    Ok(UniformityReport {
        counts,
        bin_edges,
        statistic,
        sample_count: n,
    })
}

// ============================================================================
// Tests
// ============================================================================
