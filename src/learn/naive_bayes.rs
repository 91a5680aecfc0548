//! Gaussian naive Bayes.

use super::check_labelled;
use crate::config::constants::VARIANCE_FLOOR;
use crate::error::Result;
use std::f64::consts::PI;

/// Members of one class, then its per-feature Gaussian once fitted.
struct ClassModel<'a, L> {
    label: &'a L,
    members: Vec<&'a [f64]>,
    mean: Vec<f64>,
    var: Vec<f64>,
}

impl<'a, L> ClassModel<'a, L> {
    fn new(label: &'a L) -> Self {
        Self {
            label,
            members: Vec::new(),
            mean: Vec::new(),
            var: Vec::new(),
        }
    }

    /// Two passes: means first, then squared deviations from them.
    fn fit(&mut self, dim: usize) {
        let n = self.members.len() as f64;
        self.mean = (0..dim)
            .map(|j| self.members.iter().map(|x| x[j]).sum::<f64>() / n)
            .collect();
        self.var = (0..dim)
            .map(|j| {
                let m = self.mean[j];
                let ss: f64 = self.members.iter().map(|x| (x[j] - m) * (x[j] - m)).sum();
                (ss / n).max(VARIANCE_FLOOR)
            })
            .collect();
    }

    /// log P(class) + sum_j log N(x_j | mean_j, var_j)
    fn log_posterior(&self, point: &[f64], total: usize) -> f64 {
        let mut lp = (self.members.len() as f64 / total as f64).ln();
        for ((&x, &mean), &var) in point.iter().zip(&self.mean).zip(&self.var) {
            let d = x - mean;
            lp += -0.5 * (2.0 * PI * var).ln() - d * d / (2.0 * var);
        }
        lp
    }
}

/// Class of `point` under independent per-feature Gaussians.
///
/// Priors are the empirical class frequencies. Variances are population
/// variances clamped below at `VARIANCE_FLOOR`, so a constant feature never
/// divides by zero.
/// Equal posteriors resolve to the class seen first in `data`.
pub fn naive_bayes_classify<L: Clone + PartialEq>(data: &[(Vec<f64>, L)], point: &[f64]) -> Result<L> {
    let dim = check_labelled(data, point)?;
    let mut models: Vec<ClassModel<'_, L>> = Vec::new();
    for (x, label) in data {
        let idx = match models.iter().position(|m| m.label == label) {
            Some(i) => i,
            None => {
                models.push(ClassModel::new(label));
                models.len() - 1
            }
        };
        models[idx].members.push(x.as_slice());
    }
    for m in &mut models {
        m.fit(dim);
    }

    let mut best = (&models[0], f64::NEG_INFINITY);
    for m in &models {
        let lp = m.log_posterior(point, data.len());
        if lp > best.1 {
            best = (m, lp);
        }
    }
    Ok(best.0.label.clone())
}
