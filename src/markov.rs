//! Discrete-state Markov stepper and one-dimensional random walks.
//!
//! States are indices into a finite set; transitions are governed by a
//! row-stochastic matrix `P`, where `P[s]` is the probability vector over
//! next states given current state `s`. The walk is unbounded — callers
//! drive it for however many steps they want — and the marginal
//! distribution converges to the matrix's stationary distribution when one
//! exists.

use rand::Rng;

use crate::error::SimulationError;

/// Tolerance for the row-sum check: each row of a transition matrix must
/// sum to 1 within this bound.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// A validated row-stochastic transition matrix.
///
/// # Examples
/// ```
/// use simstat::{create_rng, markov::TransitionMatrix};
/// // Weather model: state 0 = sunny, state 1 = rainy.
/// let weather = TransitionMatrix::new(vec![
///     vec![0.80, 0.20],
///     vec![0.25, 0.75],
/// ]).unwrap();
/// let mut rng = create_rng(3);
/// let tomorrow = weather.step(0, &mut rng).unwrap();
/// assert!(tomorrow < 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Validates and wraps a transition matrix.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] — before any step can
    /// be taken — if the matrix is empty or non-square, any entry is
    /// negative or non-finite, or any row's sum deviates from 1 by more
    /// than [`ROW_SUM_TOLERANCE`].
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, SimulationError> {
        let order = rows.len();
        if order == 0 {
            return Err(SimulationError::InvalidParameter(
                "transition matrix must have at least one state".into(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != order {
                return Err(SimulationError::InvalidParameter(format!(
                    "transition matrix must be square: row {i} has {} entries, expected {order}",
                    row.len()
                )));
            }
            if row.iter().any(|&p| !p.is_finite() || p < 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "row {i} contains a negative or non-finite probability"
                )));
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(SimulationError::InvalidParameter(format!(
                    "row {i} sums to {sum}, expected 1"
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Returns the number of states.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns the probability vector over next states given `state`.
    pub fn row(&self, state: usize) -> Option<&[f64]> {
        self.rows.get(state).map(Vec::as_slice)
    }

    /// Draws the next state from the categorical distribution `P[state]`.
    ///
    /// Uses a cumulative-probability scan: a uniform threshold is drawn and
    /// the first state whose cumulative probability exceeds it is returned.
    /// The result is always a valid state index.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] if `state` is not a
    /// valid state index.
    pub fn step<R: Rng>(&self, state: usize, rng: &mut R) -> Result<usize, SimulationError> {
        let row = self.rows.get(state).ok_or_else(|| {
            SimulationError::InvalidParameter(format!(
                "state {state} out of range for a {}-state chain",
                self.order()
            ))
        })?;

        let threshold = rng.random::<f64>();
        let mut cumulative = 0.0;
        for (next, &p) in row.iter().enumerate() {
            cumulative += p;
            if threshold < cumulative {
                return Ok(next);
            }
        }
        // Floating-point edge case: cumulative row sum landed a hair
        // below the threshold.
        Ok(self.order() - 1)
    }

    /// Drives the chain for `steps` transitions starting from `start` and
    /// returns the visited states (excluding `start`, so the result has
    /// length `steps`).
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] if `start` is not a
    /// valid state index.
    pub fn walk<R: Rng>(
        &self,
        start: usize,
        steps: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, SimulationError> {
        if start >= self.order() {
            return Err(SimulationError::InvalidParameter(format!(
                "state {start} out of range for a {}-state chain",
                self.order()
            )));
        }
        let mut path = Vec::with_capacity(steps);
        let mut state = start;
        for _ in 0..steps {
            state = self.step(state, rng)?;
            path.push(state);
        }
        Ok(path)
    }
}

/// Simulates a one-dimensional random walk of `steps` ±1 increments.
///
/// Each position is the previous position plus an equiprobable ±1 step, so
/// consecutive values differ by exactly 1 — unlike a plain sequence of
/// independent draws. Returns the path of length `steps`, starting from the
/// first increment (origin 0 is not included).
///
/// # Examples
/// ```
/// use simstat::{create_rng, markov::random_walk};
/// let mut rng = create_rng(1);
/// let path = random_walk(1000, &mut rng);
/// assert_eq!(path.len(), 1000);
/// for pair in path.windows(2) {
///     assert_eq!((pair[1] - pair[0]).abs(), 1);
/// }
/// ```
pub fn random_walk<R: Rng>(steps: usize, rng: &mut R) -> Vec<i64> {
    let mut path = Vec::with_capacity(steps);
    let mut position = 0_i64;
    for _ in 0..steps {
        position += if rng.random::<f64>() < 0.5 { -1 } else { 1 };
        path.push(position);
    }
    path
}

// ============================================================================
// Tests
// ============================================================================
