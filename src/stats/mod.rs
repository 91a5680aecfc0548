//! Distances, similarity, descriptive statistics and probability distributions.

pub mod descriptive;
pub mod distance;
pub mod distributions;

pub use descriptive::{covariance, mean, median, pearson_correlation, sample_variance, std_dev, variance};
pub use distance::{
    chebyshev_distance, cosine_similarity, dot_product, euclidean_distance, manhattan_distance,
    minkowski_distance, norm,
};
pub use distributions::{binomial_pmf, exponential_pdf, normal_cdf, normal_pdf, poisson_pmf};
