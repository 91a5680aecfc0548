//! End-to-end checks of the clustering, classification and regression models
//! on jittered synthetic clouds.

use approx::assert_abs_diff_eq;
use numerix::learn::{
    dbscan, k_means, knn_classify, least_squares, linear_regression, multiple_regression,
    naive_bayes_classify, svm_classify,
};
use rand::Rng;

const CENTRES: [[f64; 2]; 3] = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];

/// `per_cloud` points around each centre, interleaved cloud by cloud, each
/// coordinate jittered by at most 0.5.
fn clouds(per_cloud: usize) -> Vec<(Vec<f64>, usize)> {
    let mut rng = rand::thread_rng();
    let mut out = Vec::new();
    for _ in 0..per_cloud {
        for (label, c) in CENTRES.iter().enumerate() {
            let p = vec![c[0] + rng.gen_range(-0.5..0.5), c[1] + rng.gen_range(-0.5..0.5)];
            out.push((p, label));
        }
    }
    out
}

#[test]
fn k_means_recovers_centres() {
    let data: Vec<Vec<f64>> = clouds(20).into_iter().map(|(p, _)| p).collect();
    let r = k_means(&data, 3, 100).unwrap();
    assert!(r.stats.converged);
    assert_eq!(r.centroids.len(), 3);
    for (c, centre) in r.centroids.iter().zip(CENTRES) {
        assert_abs_diff_eq!(c[0], centre[0], epsilon = 0.5);
        assert_abs_diff_eq!(c[1], centre[1], epsilon = 0.5);
    }
    for members in r.clusters.values() {
        assert_eq!(members.len(), 20);
    }
}

#[test]
fn dbscan_marks_isolated_point_as_noise() {
    let mut data: Vec<Vec<f64>> = clouds(10).into_iter().map(|(p, _)| p).collect();
    data.push(vec![50.0, 50.0]);
    let r = dbscan(&data, 1.5, 3).unwrap();
    assert_eq!(r.clusters.len(), 3);
    assert_eq!(r.noise, vec![vec![50.0, 50.0]]);
    assert_eq!(r.labels.last(), Some(&None));
    // interleaving means cluster ids follow the cloud order
    for (i, label) in r.labels[..30].iter().enumerate() {
        assert_eq!(*label, Some(i % 3));
    }
}

#[test]
fn classifiers_agree_on_clear_cases() {
    let data = clouds(15);
    let queries = [([0.2, -0.1], 0), ([9.7, 0.3], 1), ([-0.3, 10.2], 2)];
    for (q, expected) in queries {
        assert_eq!(knn_classify(&data, &q, 5).unwrap(), expected);
        assert_eq!(naive_bayes_classify(&data, &q).unwrap(), expected);
    }
}

#[test]
fn svm_splits_two_clouds() {
    // cloud 0 against cloud 1, labels ±1
    let data: Vec<(Vec<f64>, f64)> = clouds(10)
        .into_iter()
        .filter(|(_, l)| *l < 2)
        .map(|(p, l)| (p, if l == 0 { -1.0 } else { 1.0 }))
        .collect();
    assert_eq!(svm_classify(&data, &[0.0, 0.0]).unwrap(), -1.0);
    assert_eq!(svm_classify(&data, &[10.0, 0.0]).unwrap(), 1.0);
}

#[test]
fn regression_recovers_slope() {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 3.0).collect();
    let fit = linear_regression(&x, &y).unwrap();
    assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.intercept, -3.0, epsilon = 1e-9);

    let pts: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    assert_eq!(least_squares(&pts).unwrap(), fit);
}

#[test]
fn multiple_regression_recovers_plane() {
    // y = 1 + 2a - 0.5b
    let mut rng = rand::thread_rng();
    let data: Vec<(Vec<f64>, f64)> = (0..30)
        .map(|_| {
            let a: f64 = rng.gen_range(-5.0..5.0);
            let b: f64 = rng.gen_range(-5.0..5.0);
            (vec![a, b], 1.0 + 2.0 * a - 0.5 * b)
        })
        .collect();
    let beta = multiple_regression(&data).unwrap();
    assert_abs_diff_eq!(beta[0], 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(beta[1], 2.0, epsilon = 1e-8);
    assert_abs_diff_eq!(beta[2], -0.5, epsilon = 1e-8);
}
