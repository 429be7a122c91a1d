//! Pairwise distance computation for raw observation matrices.

use ndarray::Array2;

/// Compute the pairwise Euclidean distance matrix of an observation matrix.
///
/// Rows are objects, columns are features. The result is an n x n
/// symmetric matrix with a zero diagonal.
///
/// ## Example
/// ```
/// let obs = ndarray::arr2(&[[0.0, 0.0], [3.0, 4.0]]);
/// let distances = pam_medoids::euclidean_distances(&obs);
/// assert_eq!(distances[[0, 1]], 5.0);
/// ```
pub fn euclidean_distances(observations: &Array2<f64>) -> Array2<f64> {
	let n = observations.nrows();
	let mut distances = Array2::<f64>::zeros((n, n));
	for i in 0..n {
		for j in (i + 1)..n {
			let diff = &observations.row(i) - &observations.row(j);
			let d = diff.dot(&diff).sqrt();
			distances[[i, j]] = d;
			distances[[j, i]] = d;
		}
	}
	distances
}

#[cfg(test)]
mod tests {
	use super::euclidean_distances;

	#[test]
	fn test_euclidean_distances() {
		let obs = ndarray::arr2(&[[0.0, 0.0], [3.0, 4.0], [0.0, 1.0]]);
		let d = euclidean_distances(&obs);
		assert_eq!(d.shape(), &[3, 3]);
		for i in 0..3 {
			assert_eq!(d[[i, i]], 0.0);
			for j in 0..3 {
				assert_eq!(d[[i, j]], d[[j, i]]);
			}
		}
		assert_eq!(d[[0, 1]], 5.0);
		assert_eq!(d[[0, 2]], 1.0);
		assert!((d[[1, 2]] - 18.0_f64.sqrt()).abs() < 1e-12);
	}
}
