//! DBSCAN (Density-Based Spatial Clustering of Applications with Noise).
//!
//! A point is a core point when at least `min_pts` points, itself included,
//! lie within `eps` of it. Clusters grow from core points through their
//! neighbours; border points join the first cluster that reaches them and
//! everything left over is noise. Expansion is breadth-first over a queue.
//!
//! Time complexity is O(n²) distance evaluations.

use super::check_points;
use crate::error::{NError, Result};
use crate::stats::distance::squared_euclidean;
use bitflags::bitflags;
use std::collections::{BTreeMap, VecDeque};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct PointFlags: u8 {
        const VISITED   = 0b001;
        const CORE      = 0b010;
        const CLUSTERED = 0b100;
    }
}

/// Labels, cluster members and noise of one DBSCAN run.
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanResult {
    /// Per input point: `Some(cluster)` or `None` for noise
    pub labels: Vec<Option<usize>>,
    pub clusters: BTreeMap<usize, Vec<Vec<f64>>>,
    pub noise: Vec<Vec<f64>>,
    /// Per input point: whether it is a core point
    pub core: Vec<bool>,
}

fn region_query(data: &[Vec<f64>], i: usize, eps_sq: f64) -> Vec<usize> {
    (0..data.len())
        .filter(|&j| squared_euclidean(&data[i], &data[j]) <= eps_sq)
        .collect()
}

/// Cluster `data` by density.
pub fn dbscan(data: &[Vec<f64>], eps: f64, min_pts: usize) -> Result<DbscanResult> {
    check_points(data.iter().map(Vec::as_slice))?;
    if !(eps > 0.0) {
        return Err(NError::InvalidArgument(format!("eps must be positive, got {eps}")));
    }
    if min_pts == 0 {
        return Err(NError::InvalidArgument("min_pts must be at least 1".into()));
    }
    let eps_sq = eps * eps;
    let n = data.len();
    let mut flags = vec![PointFlags::empty(); n];
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut next_cluster = 0;

    for i in 0..n {
        if flags[i].contains(PointFlags::VISITED) {
            continue;
        }
        flags[i].insert(PointFlags::VISITED);
        let neighbours = region_query(data, i, eps_sq);
        if neighbours.len() < min_pts {
            // noise for now; may become a border point later
            continue;
        }
        let cluster = next_cluster;
        next_cluster += 1;
        flags[i].insert(PointFlags::CORE | PointFlags::CLUSTERED);
        labels[i] = Some(cluster);

        let mut queue: VecDeque<usize> = neighbours.into();
        while let Some(j) = queue.pop_front() {
            if !flags[j].contains(PointFlags::CLUSTERED) {
                flags[j].insert(PointFlags::CLUSTERED);
                labels[j] = Some(cluster);
            }
            if flags[j].contains(PointFlags::VISITED) {
                continue;
            }
            flags[j].insert(PointFlags::VISITED);
            let reach = region_query(data, j, eps_sq);
            if reach.len() >= min_pts {
                flags[j].insert(PointFlags::CORE);
                queue.extend(reach.into_iter().filter(|&k| !flags[k].contains(PointFlags::CLUSTERED)));
            }
        }
    }

    let mut clusters: BTreeMap<usize, Vec<Vec<f64>>> = BTreeMap::new();
    let mut noise = Vec::new();
    for (p, label) in data.iter().zip(&labels) {
        match label {
            Some(c) => clusters.entry(*c).or_default().push(p.clone()),
            None => noise.push(p.clone()),
        }
    }
    let core = flags.iter().map(|f| f.contains(PointFlags::CORE)).collect();
    Ok(DbscanResult { labels, clusters, noise, core })
}
