//! Single-feature logistic regression fit by iteratively reweighted least
//! squares. Each iteration scales the design rows by `sqrt(w)` and solves
//! the resulting least-squares problem with SVD, which stays well behaved
//! even when the working weights get small near saturation.

use anyhow::{ensure, Result};
use nalgebra::{DMatrix, DVector};
use tracing::warn;

const MAX_ITER: usize = 100;
const STEP_TOL: f64 = 1e-8;
const MIN_WEIGHT: f64 = 1e-6;

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Fitted cancellation-probability model: `P(canceled) = σ(intercept + coef·speed)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticModel {
    pub intercept: f64,
    pub coef: f64,
}

impl LogisticModel {
    pub fn predict_proba(&self, speed: f64) -> f64 {
        sigmoid(self.intercept + self.coef * speed)
    }

    pub fn predict(&self, speed: f64) -> u8 {
        u8::from(self.predict_proba(speed) >= 0.5)
    }
}

/// Solve a least-squares problem via SVD, loosening the tolerance in steps
/// for near-singular systems. `None` if no tolerance yields finite
/// coefficients.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }
    None
}

/// Fit on `(speed, label)` pairs with labels in {0, 1}.
///
/// Stops when the IRLS step norm drops below tolerance. Hitting the
/// iteration cap keeps the last estimate (separable data saturates instead
/// of converging) and logs a warning; an unsolvable weighted system is an
/// error.
pub fn fit(speeds: &[f64], labels: &[u8]) -> Result<LogisticModel> {
    ensure!(speeds.len() == labels.len(), "speeds and labels differ in length");
    ensure!(!speeds.is_empty(), "cannot fit on an empty dataset");
    ensure!(
        labels.contains(&0) && labels.contains(&1),
        "need both operational and canceled samples to fit"
    );

    let n = speeds.len();
    let mut beta = DVector::<f64>::zeros(2);

    for _ in 0..MAX_ITER {
        let eta: Vec<f64> = speeds.iter().map(|&s| beta[0] + beta[1] * s).collect();
        let p: Vec<f64> = eta.iter().map(|&e| sigmoid(e)).collect();
        let w: Vec<f64> = p.iter().map(|&pi| (pi * (1.0 - pi)).max(MIN_WEIGHT)).collect();
        // Working response of the IRLS step.
        let z: Vec<f64> = (0..n)
            .map(|i| eta[i] + (f64::from(labels[i]) - p[i]) / w[i])
            .collect();

        let design = DMatrix::from_fn(n, 2, |i, j| {
            let sw = w[i].sqrt();
            if j == 0 {
                sw
            } else {
                sw * speeds[i]
            }
        });
        let target = DVector::from_fn(n, |i, _| z[i] * w[i].sqrt());

        let next = match solve_least_squares(&design, &target) {
            Some(next) => next,
            None => anyhow::bail!("weighted least-squares step is unsolvable"),
        };

        let step = (&next - &beta).norm();
        beta = next;
        if step < STEP_TOL {
            return Ok(LogisticModel { intercept: beta[0], coef: beta[1] });
        }
    }

    warn!(max_iter = MAX_ITER, "logistic fit hit the iteration cap");
    Ok(LogisticModel { intercept: beta[0], coef: beta[1] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_and_bounded() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(40.0) > 0.999);
        assert!(sigmoid(-40.0) < 0.001);
    }

    #[test]
    fn fit_separates_overlapping_classes() {
        // Mostly-low speeds operate, mostly-high speeds cancel, with overlap
        // so the likelihood has a finite optimum.
        let speeds = vec![2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 9.0, 10.0, 11.0, 12.0, 7.0, 7.5];
        let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0];
        let model = fit(&speeds, &labels).unwrap();

        assert!(model.coef > 0.0);
        assert!(model.predict_proba(2.0) < 0.5);
        assert!(model.predict_proba(12.0) > 0.5);
        assert_eq!(model.predict(12.0), 1);
    }

    #[test]
    fn probability_is_monotone_in_speed_for_positive_coef() {
        let model = LogisticModel { intercept: -3.0, coef: 0.5 };
        let probs: Vec<f64> = (0..20).map(|s| model.predict_proba(f64::from(s))).collect();
        assert!(probs.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn single_class_data_is_rejected() {
        assert!(fit(&[1.0, 2.0, 3.0], &[0, 0, 0]).is_err());
        assert!(fit(&[], &[]).is_err());
    }
}
