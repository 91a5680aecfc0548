//! Linear SVM and SVR trained by online subgradient steps.
//!
//! These are heuristics: a fixed number of passes with a fixed step, no
//! dual problem and no convergence guarantee. They fit the primal
//! objectives
//!
//! ```text
//! SVM: λ‖w‖² + Σ max(0, 1 − yᵢ(w·xᵢ + b))
//! SVR: λ/2 ‖w‖² + Σ max(0, |w·xᵢ + b − yᵢ| − ε)
//! ```
//!
//! one sample at a time, starting from `w = 0, b = 0`.

use super::check_labelled;
use crate::config::SvmOptions;
use crate::core::traits::InnerProduct;
use crate::error::{NError, Result};

fn dot(a: &[f64], b: &[f64]) -> f64 {
    ().dot(a, b)
}

fn check_options(opts: &SvmOptions) -> Result<()> {
    if !(opts.learning_rate > 0.0) || !(opts.regularization >= 0.0) || !(opts.epsilon >= 0.0) {
        return Err(NError::InvalidArgument(format!(
            "svm options must be non-negative with a positive learning rate, got {opts:?}"
        )));
    }
    Ok(())
}

/// `(w, b)` of the linear soft-margin classifier.
fn train_svm(data: &[(Vec<f64>, f64)], dim: usize, opts: &SvmOptions) -> (Vec<f64>, f64) {
    let lr = opts.learning_rate;
    let lambda = opts.regularization;
    let mut w = vec![0.0; dim];
    let mut b = 0.0;
    for _ in 0..opts.iterations {
        for (x, y) in data {
            let margin = y * (dot(&w, x) + b);
            if margin < 1.0 {
                for (wj, xj) in w.iter_mut().zip(x) {
                    *wj -= lr * (2.0 * lambda * *wj - y * xj);
                }
                b += lr * y;
            } else {
                for wj in w.iter_mut() {
                    *wj -= lr * 2.0 * lambda * *wj;
                }
            }
        }
    }
    (w, b)
}

fn train_svr(data: &[(Vec<f64>, f64)], dim: usize, opts: &SvmOptions) -> (Vec<f64>, f64) {
    let lr = opts.learning_rate;
    let lambda = opts.regularization;
    let mut w = vec![0.0; dim];
    let mut b = 0.0;
    for _ in 0..opts.iterations {
        for (x, y) in data {
            let err = dot(&w, x) + b - y;
            if err.abs() > opts.epsilon {
                let s = err.signum();
                for (wj, xj) in w.iter_mut().zip(x) {
                    *wj -= lr * (lambda * *wj + s * xj);
                }
                b -= lr * s;
            } else {
                for wj in w.iter_mut() {
                    *wj -= lr * lambda * *wj;
                }
            }
        }
    }
    (w, b)
}

/// Predicts `+1.0` or `-1.0` for `point`; training labels must be `±1`.
pub fn svm_classify(data: &[(Vec<f64>, f64)], point: &[f64]) -> Result<f64> {
    svm_classify_with(data, point, &SvmOptions::default())
}

/// [`svm_classify`] with explicit training settings. A point exactly on
/// the boundary is assigned `+1.0`.
pub fn svm_classify_with(data: &[(Vec<f64>, f64)], point: &[f64], opts: &SvmOptions) -> Result<f64> {
    let dim = check_labelled(data, point)?;
    check_options(opts)?;
    if let Some((_, y)) = data.iter().find(|(_, y)| *y != 1.0 && *y != -1.0) {
        return Err(NError::InvalidArgument(format!("svm labels must be 1 or -1, got {y}")));
    }
    let (w, b) = train_svm(data, dim, opts);
    Ok(if dot(&w, point) + b >= 0.0 { 1.0 } else { -1.0 })
}

/// Real-valued prediction of the ε-insensitive linear regressor.
pub fn svr_predict(data: &[(Vec<f64>, f64)], point: &[f64]) -> Result<f64> {
    svr_predict_with(data, point, &SvmOptions::default())
}

pub fn svr_predict_with(data: &[(Vec<f64>, f64)], point: &[f64], opts: &SvmOptions) -> Result<f64> {
    let dim = check_labelled(data, point)?;
    check_options(opts)?;
    let (w, b) = train_svr(data, dim, opts);
    Ok(dot(&w, point) + b)
}
