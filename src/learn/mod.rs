//! Clustering, classification and regression on in-memory datasets.
//!
//! A dataset is a slice of `(features, label)` pairs; unsupervised routines
//! take bare feature vectors. Nothing here mutates its input or keeps state
//! between calls: every "model" is fitted and applied within one call.

use crate::error::{NError, Result, check_same_len};

pub mod dbscan;
pub mod kmeans;
pub mod knn;
pub mod naive_bayes;
pub mod regression;
pub mod svm;

pub use dbscan::{DbscanResult, dbscan};
pub use kmeans::{KMeansResult, k_means};
pub use knn::knn_classify;
pub use naive_bayes::naive_bayes_classify;
pub use regression::{LinearFit, least_squares, linear_regression, multiple_regression};
pub use svm::{svm_classify, svm_classify_with, svr_predict, svr_predict_with};

/// Checks that `points` is non-empty and rectangular; returns the dimension.
pub(crate) fn check_points<'a, I>(points: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut iter = points.into_iter();
    let dim = iter.next().ok_or(NError::EmptyInput("dataset"))?.len();
    if dim == 0 {
        return Err(NError::EmptyInput("feature vector"));
    }
    for p in iter {
        check_same_len(dim, p.len())?;
    }
    Ok(dim)
}

/// [`check_points`] over a labelled dataset, plus the query point.
pub(crate) fn check_labelled<L>(data: &[(Vec<f64>, L)], point: &[f64]) -> Result<usize> {
    let dim = check_points(data.iter().map(|(x, _)| x.as_slice()))?;
    check_same_len(dim, point.len())?;
    Ok(dim)
}
