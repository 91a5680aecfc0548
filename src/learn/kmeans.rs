//! k-means clustering (Lloyd's algorithm).
//!
//! Initial centroids are the first `k` points, so results are deterministic
//! but depend on input order. Iteration stops once no centroid coordinate
//! moves by [`CENTROID_EPSILON`] or more, or at the iteration cap.
//!
//! A cluster that loses all its members during an update is dropped rather
//! than re-seeded, so the result may hold fewer than `k` centroids.

use super::check_points;
use crate::config::constants::CENTROID_EPSILON;
use crate::error::{NError, Result};
use crate::stats::distance::squared_euclidean;
use crate::utils::convergence::{Convergence, SolveStats};
use std::collections::BTreeMap;

/// Centroids, their members, and how the iteration ended.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    pub centroids: Vec<Vec<f64>>,
    /// Cluster index (into `centroids`) → member points
    pub clusters: BTreeMap<usize, Vec<Vec<f64>>>,
    /// `final_residual` is the largest centroid shift of the last update
    pub stats: SolveStats<f64>,
}

fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = squared_euclidean(point, centroid);
        if d < best_d {
            best = c;
            best_d = d;
        }
    }
    best
}

fn assign(data: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<Vec<usize>> {
    let mut members = vec![Vec::new(); centroids.len()];
    for (i, p) in data.iter().enumerate() {
        members[nearest(p, centroids)].push(i);
    }
    members
}

fn recentre(data: &[Vec<f64>], members: &[Vec<usize>], dim: usize) -> Vec<Vec<f64>> {
    members
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| {
            let mut sum = vec![0.0; dim];
            for &i in m {
                for (s, x) in sum.iter_mut().zip(&data[i]) {
                    *s += x;
                }
            }
            sum.iter().map(|s| s / m.len() as f64).collect()
        })
        .collect()
}

fn max_shift(old: &[Vec<f64>], new: &[Vec<f64>]) -> f64 {
    if old.len() != new.len() {
        return f64::INFINITY;
    }
    old.iter()
        .zip(new)
        .flat_map(|(a, b)| a.iter().zip(b).map(|(x, y)| (x - y).abs()))
        .fold(0.0, f64::max)
}

/// Partition `data` into at most `k` clusters.
pub fn k_means(data: &[Vec<f64>], k: usize, max_iterations: usize) -> Result<KMeansResult> {
    let dim = check_points(data.iter().map(Vec::as_slice))?;
    if k == 0 || k > data.len() {
        return Err(NError::InvalidArgument(format!(
            "k must be in 1..={}, got {k}",
            data.len()
        )));
    }
    let conv = Convergence::new(CENTROID_EPSILON, max_iterations);
    let mut centroids: Vec<Vec<f64>> = data[..k].to_vec();
    let mut stats = SolveStats { iterations: 0, final_residual: f64::INFINITY, converged: false };

    for it in 1..=conv.max_iters {
        let members = assign(data, &centroids);
        let updated = recentre(data, &members, dim);
        let shift = max_shift(&centroids, &updated);
        centroids = updated;
        let (stop, s) = conv.check(shift, it);
        stats = s;
        if stop {
            break;
        }
    }

    let clusters = assign(data, &centroids)
        .into_iter()
        .enumerate()
        .map(|(c, m)| (c, m.into_iter().map(|i| data[i].clone()).collect()))
        .collect();
    Ok(KMeansResult { centroids, clusters, stats })
}
