//! Bounding-domain Monte Carlo estimators.
//!
//! Both estimators follow the same pattern: draw `N` points uniformly in a
//! bounding domain of known measure, count the fraction `M/N` satisfying a
//! containment predicate, and scale by the domain measure. Accuracy
//! improves as `N` grows; the result converges to the true value almost
//! surely but carries no confidence interval of its own — callers can
//! bootstrap one from repeated runs if needed.
//!
//! Draws come from any [`rand::Rng`], typically a seeded `SmallRng` from
//! [`crate::create_rng`] for reproducible experiments.

use rand::Rng;

use crate::error::SimulationError;

/// Estimates the definite integral of `f` over `[a, b]` by Monte Carlo
/// sampling.
///
/// A deterministic pre-scan of `samples` evenly spaced points over `[a, b]`
/// finds the extrema `ymin` and `ymax` of `f`, bounding the graph in the
/// rectangle `[a, b] × [ymin, ymax]`. `samples` points `(x, y)` are then
/// drawn uniformly in that rectangle, the fraction `M/N` with `y ≤ f(x)` is
/// counted, and the estimate is `(M/N)·(b − a)·(ymax − ymin)`.
///
/// A constant function yields a zero-height rectangle and therefore a zero
/// estimate; the method needs `f` to vary over the interval.
///
/// # Errors
/// Returns [`SimulationError::InvalidParameter`] if `samples == 0`,
/// `a >= b`, or either bound is non-finite.
///
/// # Examples
/// ```
/// use simstat::{create_rng, monte_carlo::integrate};
/// let mut rng = create_rng(2);
/// // ∫₀³ x² dx = 9
/// let estimate = integrate(|x| x * x, 0.0, 3.0, 100_000, &mut rng).unwrap();
/// assert!((estimate - 9.0).abs() < 0.5);
/// ```
pub fn integrate<F, R>(
    f: F,
    a: f64,
    b: f64,
    samples: usize,
    rng: &mut R,
) -> Result<f64, SimulationError>
where
    F: Fn(f64) -> f64,
    R: Rng,
{
    if samples == 0 {
        return Err(SimulationError::InvalidParameter(
            "sample count must be positive".into(),
        ));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(SimulationError::InvalidParameter(format!(
            "integration bounds must satisfy a < b, got a={a}, b={b}"
        )));
    }

    // Deterministic pre-scan for the extrema of f over [a, b].
    let mut ymin = f(a);
    let mut ymax = ymin;
    for i in 0..samples {
        let x = a + (b - a) * i as f64 / samples as f64;
        let y = f(x);
        if y < ymin {
            ymin = y;
        }
        if y > ymax {
            ymax = y;
        }
    }

    let area = (b - a) * (ymax - ymin);
    let mut hits = 0_usize;
    for _ in 0..samples {
        let x = a + (b - a) * rng.random::<f64>();
        let y = ymin + (ymax - ymin) * rng.random::<f64>();
        if y <= f(x) {
            hits += 1;
        }
    }
    Ok(hits as f64 / samples as f64 * area)
}

/// Estimates π by sampling the unit square.
///
/// Draws `samples` points `(x, y)` uniformly in `[0, 1)²` and counts the
/// fraction `M/N` inside the quarter circle `x² + y² ≤ 1`, whose area is
/// π/4. The estimate is `4·M/N`.
///
/// # Errors
/// Returns [`SimulationError::InvalidParameter`] if `samples == 0`.
///
/// # Examples
/// ```
/// use simstat::{create_rng, monte_carlo::estimate_pi};
/// let mut rng = create_rng(7);
/// let pi = estimate_pi(10_000, &mut rng).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn estimate_pi<R: Rng>(samples: usize, rng: &mut R) -> Result<f64, SimulationError> {
    if samples == 0 {
        return Err(SimulationError::InvalidParameter(
            "sample count must be positive".into(),
        ));
    }
    let mut hits = 0_usize;
    for _ in 0..samples {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    Ok(4.0 * hits as f64 / samples as f64)
}

// ============================================================================
// Tests
// ============================================================================
