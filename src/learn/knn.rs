//! k-nearest-neighbour classification.

use super::check_labelled;
use crate::error::{NError, Result};
use crate::stats::distance::squared_euclidean;

/// Majority label among the `k` training points closest to `point`.
///
/// Distance ties keep training order. Vote ties go to the label whose first
/// vote came from the nearer neighbour.
pub fn knn_classify<L: Clone + PartialEq>(data: &[(Vec<f64>, L)], point: &[f64], k: usize) -> Result<L> {
    check_labelled(data, point)?;
    if k == 0 || k > data.len() {
        return Err(NError::InvalidArgument(format!(
            "k must be in 1..={}, got {k}",
            data.len()
        )));
    }
    let mut ranked: Vec<(f64, &L)> = data
        .iter()
        .map(|(x, label)| (squared_euclidean(x, point), label))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    // (label, votes), in order of first appearance
    let mut tally: Vec<(&L, usize)> = Vec::new();
    for (_, label) in ranked.iter().take(k) {
        match tally.iter_mut().find(|(l, _)| *l == *label) {
            Some((_, votes)) => *votes += 1,
            None => tally.push((*label, 1)),
        }
    }
    let mut best = &tally[0];
    for entry in &tally[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    Ok(best.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<(Vec<f64>, &'static str)> {
        vec![
            (vec![1.0, 1.0], "a"),
            (vec![1.5, 2.0], "a"),
            (vec![2.0, 1.0], "a"),
            (vec![6.0, 6.0], "b"),
            (vec![7.0, 7.0], "b"),
        ]
    }

    #[test]
    fn majority_vote() {
        assert_eq!(knn_classify(&data(), &[1.2, 1.4], 3).unwrap(), "a");
        assert_eq!(knn_classify(&data(), &[6.5, 6.4], 3).unwrap(), "b");
        assert_eq!(knn_classify(&data(), &[6.5, 6.4], 1).unwrap(), "b");
    }

    #[test]
    fn tie_goes_to_nearest_label() {
        // k = 2 with one vote each: the closer neighbour wins
        assert_eq!(knn_classify(&data(), &[4.0, 4.0], 2).unwrap(), "b");
        let d = vec![(vec![0.0], 1), (vec![2.0], 2)];
        assert_eq!(knn_classify(&d, &[0.9], 2).unwrap(), 1);
    }

    #[test]
    fn bad_k_or_shape() {
        assert!(knn_classify(&data(), &[1.0, 1.0], 0).is_err());
        assert!(knn_classify(&data(), &[1.0, 1.0], 6).is_err());
        assert!(knn_classify(&data(), &[1.0], 1).is_err());
    }
}
