//! Bootstrap and jackknife resampling estimators.
//!
//! Both estimators approximate the sampling distribution of a statistic
//! using only one observed empirical sample, without assuming a
//! distribution model. The statistic is an injected strategy — any
//! `Fn(&[f64]) -> f64`, such as a mean, a variance, or a coefficient of
//! variation built from [`crate::stats`] — so the machinery stays generic.
//!
//! - **Bootstrap**: resample with replacement `m` times, statistic of each
//!   resample; the resulting distribution approximates the statistic's
//!   sampling distribution (plug-in principle).
//! - **Jackknife**: one leave-one-out subsample per observation, combined
//!   into pseudo-values whose mean is a bias-corrected estimate and whose
//!   variance over `n` estimates the estimator variance.

use rand::Rng;

use crate::error::SimulationError;
use crate::stats::WelfordAccumulator;

/// Draws `resamples` bootstrap resamples of the empirical sample and
/// returns the statistic of each.
///
/// Each resample has the same size `n` as the empirical sample and is drawn
/// with replacement: every observation has probability `1/n` per draw, so
/// the resamples are i.i.d. conditional on the empirical sample. The
/// returned `resamples`-length distribution can then be reduced further —
/// its mean approximates the population statistic, and
/// [`crate::stats::quantile`] extracts percentile confidence intervals.
///
/// # Errors
/// Returns [`SimulationError::InvalidParameter`] if the sample is empty or
/// `resamples == 0`.
///
/// # Examples
/// ```
/// use simstat::{create_rng, resampling::bootstrap, stats};
/// let sample = [12.0, 15.0, 11.0, 19.0, 14.0, 16.0, 13.0];
/// let mut rng = create_rng(7);
/// let dist = bootstrap(&sample, 1000, |s| stats::mean(s).unwrap_or(f64::NAN), &mut rng).unwrap();
/// assert_eq!(dist.len(), 1000);
/// // Every bootstrap mean lies within the sample's range.
/// assert!(dist.iter().all(|&v| v >= 11.0 && v <= 19.0));
/// ```
pub fn bootstrap<F, R>(
    sample: &[f64],
    resamples: usize,
    statistic: F,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError>
where
    F: Fn(&[f64]) -> f64,
    R: Rng,
{
    if sample.is_empty() {
        return Err(SimulationError::InvalidParameter(
            "bootstrap requires a non-empty sample".into(),
        ));
    }
    if resamples == 0 {
        return Err(SimulationError::InvalidParameter(
            "resample count must be positive".into(),
        ));
    }

    let n = sample.len();
    let mut resample = vec![0.0; n];
    let mut distribution = Vec::with_capacity(resamples);
    for _ in 0..resamples {
        for slot in resample.iter_mut() {
            *slot = sample[rng.random_range(0..n)];
        }
        distribution.push(statistic(&resample));
    }
    Ok(distribution)
}

/// Result of a jackknife estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct JackknifeEstimate {
    /// The `n` pseudo-values `PVᵢ = n·E(full) − (n−1)·E(without i)`.
    pub pseudo_values: Vec<f64>,
    /// Mean of the pseudo-values: the bias-corrected estimate.
    pub estimate: f64,
    /// Variance of the estimator: `variance(pseudo-values) / n`.
    pub variance: f64,
}

/// Jackknife-estimates a statistic of the empirical sample.
///
/// For each observation `i` the statistic is recomputed on the leave-one-out
/// subsample of size `n − 1` and combined with the full-sample value into
/// the pseudo-value
///
/// ```text
/// PVᵢ = n·E(full) − (n−1)·E(without i)
/// ```
///
/// The pseudo-values' mean is the bias-corrected estimate; their sample
/// variance divided by `n` estimates the variance of the estimator.
///
/// # Errors
/// Returns [`SimulationError::InvalidParameter`] if `sample.len() < 2`
/// (at least one leave-one-out subsample of non-zero size is needed).
///
/// # Examples
/// ```
/// use simstat::{resampling::jackknife, stats};
/// let sample = [1.0, 2.0, 3.0, 4.0];
/// let est = jackknife(&sample, |s| stats::mean(s).unwrap_or(f64::NAN)).unwrap();
/// // For the mean, pseudo-values reproduce the observations themselves.
/// for (pv, x) in est.pseudo_values.iter().zip(&sample) {
///     assert!((pv - x).abs() < 1e-9);
/// }
/// assert!((est.estimate - 2.5).abs() < 1e-9);
/// ```
pub fn jackknife<F>(sample: &[f64], statistic: F) -> Result<JackknifeEstimate, SimulationError>
where
    F: Fn(&[f64]) -> f64,
{
    let n = sample.len();
    if n < 2 {
        return Err(SimulationError::InvalidParameter(format!(
            "jackknife requires at least 2 observations, got {n}"
        )));
    }

    let nf = n as f64;
    let full = statistic(sample);
    let mut acc = WelfordAccumulator::new();
    let mut pseudo_values = Vec::with_capacity(n);
    let mut subsample = Vec::with_capacity(n - 1);
    for i in 0..n {
        subsample.clear();
        subsample.extend_from_slice(&sample[..i]);
        subsample.extend_from_slice(&sample[i + 1..]);
        let pv = nf * full - (nf - 1.0) * statistic(&subsample);
        acc.update(pv);
        pseudo_values.push(pv);
    }

    let estimate = acc.mean().expect("n >= 2 pseudo-values");
    let variance = acc.sample_variance().expect("n >= 2 pseudo-values") / nf;
    Ok(JackknifeEstimate {
        pseudo_values,
        estimate,
        variance,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_rng;
    use crate::stats;
    use rand::Rng;

    fn mean_stat(s: &[f64]) -> f64 {
        stats::mean(s).unwrap_or(f64::NAN)
    }

    #[test]
    fn test_bootstrap_distribution_size() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut rng = create_rng(7);
        let dist = bootstrap(&sample, 500, mean_stat, &mut rng).unwrap();
        assert_eq!(dist.len(), 500);
    }

    #[test]
    fn test_bootstrap_mean_approximates_sample_mean() {
        // Population: 1000 values uniform on [0, 50); the bootstrap mean
        // of means converges on the empirical mean.
        let mut rng = create_rng(7);
        let population: Vec<f64> = (0..1000).map(|_| 50.0 * rng.random::<f64>()).collect();
        let empirical_mean = stats::mean(&population).unwrap();

        let dist = bootstrap(&population, 2000, mean_stat, &mut rng).unwrap();
        let boot_mean = stats::mean(&dist).unwrap();
        // One bootstrap mean has standard error ≈ 0.46; averaged over
        // 2000 resamples that drops to ≈ 0.01.
        assert!(
            (boot_mean - empirical_mean).abs() < 0.1,
            "bootstrap mean {boot_mean} vs empirical {empirical_mean}"
        );
    }

    #[test]
    fn test_bootstrap_values_within_sample_range() {
        let sample = [3.0, 8.0, 1.0, 9.0, 4.0];
        let mut rng = create_rng(21);
        let dist = bootstrap(&sample, 200, mean_stat, &mut rng).unwrap();
        assert!(dist.iter().all(|&v| (1.0..=9.0).contains(&v)));
    }

    #[test]
    fn test_bootstrap_single_observation_is_constant() {
        let mut rng = create_rng(0);
        let dist = bootstrap(&[42.0], 50, mean_stat, &mut rng).unwrap();
        assert!(dist.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_bootstrap_rejects_bad_parameters() {
        let mut rng = create_rng(0);
        assert!(bootstrap(&[], 10, mean_stat, &mut rng).is_err());
        assert!(bootstrap(&[1.0], 0, mean_stat, &mut rng).is_err());
    }

    #[test]
    fn test_jackknife_mean_pseudo_values_are_observations() {
        // For E = mean: PVᵢ = n·x̄ − (n−1)·x̄₍₋ᵢ₎ = xᵢ exactly.
        let sample = [2.0, 7.0, 1.0, 9.0, 4.0, 6.0];
        let est = jackknife(&sample, mean_stat).unwrap();
        assert_eq!(est.pseudo_values.len(), sample.len());
        for (pv, x) in est.pseudo_values.iter().zip(&sample) {
            assert!((pv - x).abs() < 1e-9);
        }
        assert!((est.estimate - stats::mean(&sample).unwrap()).abs() < 1e-9);
        let expected_var = stats::variance(&sample).unwrap() / sample.len() as f64;
        assert!((est.variance - expected_var).abs() < 1e-9);
    }

    #[test]
    fn test_jackknife_coefficient_of_variation() {
        // CV is biased; the jackknife estimate must stay near the plug-in
        // value without pathologies.
        let sample: Vec<f64> = (1..=100).map(|i| (i as f64 * 7.3) % 10.0 + 1.0).collect();
        let cv_stat = |s: &[f64]| stats::coefficient_of_variation(s).unwrap_or(f64::NAN);
        let est = jackknife(&sample, cv_stat).unwrap();
        let plug_in = stats::coefficient_of_variation(&sample).unwrap();
        assert!(est.variance >= 0.0);
        assert!(
            (est.estimate - plug_in).abs() < 0.1,
            "jackknife CV {} vs plug-in {plug_in}",
            est.estimate
        );
    }

    #[test]
    fn test_jackknife_rejects_tiny_samples() {
        assert!(jackknife(&[], mean_stat).is_err());
        assert!(jackknife(&[1.0], mean_stat).is_err());
    }

    #[test]
    fn test_jackknife_constant_sample_has_zero_variance() {
        let est = jackknife(&[5.0; 10], mean_stat).unwrap();
        assert!((est.estimate - 5.0).abs() < 1e-12);
        assert!(est.variance.abs() < 1e-12);
    }
}
