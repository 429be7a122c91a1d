use crate::arrayadapter::ArrayAdapter;
use crate::build::pam_build;
use crate::error::PamError;
use crate::refine::pam_refine;
use crate::state::ClusteringState;
use core::ops::AddAssign;
use num_traits::{Signed, Zero};
use std::collections::BTreeSet;
use std::convert::From;

/// Final clustering produced by [`pam`] or [`partition`].
///
/// Immutable once assembled; the working state of the algorithm does not
/// escape the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PamResult {
	/// The objects chosen as cluster representatives.
	pub medoids: BTreeSet<usize>,
	/// The medoid each object is assigned to; medoids map to themselves.
	pub classification: Vec<usize>,
}

impl From<ClusteringState> for PamResult {
	fn from(state: ClusteringState) -> Self {
		PamResult {
			medoids: state.medoids,
			classification: state.classification,
		}
	}
}

/// Run the PAM algorithm (BUILD and SWAP) on a dissimilarity matrix.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `pam_medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * type `L` - number data type such as `i64` or `f64` for the loss (must be signed)
/// * `mat` - a pairwise dissimilarity matrix
/// * `k` - the number of medoids to pick
///
/// returns the final loss and the clustering result, or an error when
/// `k < 2` or the matrix has fewer than `k` rows.
///
/// ## Panics
///
/// * panics when the dissimilarity matrix is not square
///
/// ## Example
/// Given a dissimilarity matrix of size 4 x 4, use:
/// ```
/// let data = ndarray::arr2(&[[0, 1, 9, 9], [1, 0, 9, 9], [9, 9, 0, 1], [9, 9, 9, 0]]);
/// let (loss, result): (f64, _) = pam_medoids::pam(&data, 2).unwrap();
/// println!("Loss is: {}", loss);
/// ```
pub fn pam<M, N, L>(mat: &M, k: usize) -> Result<(L, PamResult), PamError>
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let (loss, mut state) = pam_build(mat, k)?;
	let (loss, _, _) = pam_refine(mat, &mut state, loss);
	Ok((loss, PamResult::from(state)))
}

/// Partition raw observations around k medoids.
///
/// Validates the request, computes the pairwise Euclidean distance matrix
/// of the observations (rows = objects, columns = features), and runs PAM
/// BUILD and SWAP on it. Invalid requests are rejected before any distance
/// is computed.
///
/// * `k` - the number of medoids to pick, at least 2
/// * `observations` - the observation matrix
///
/// returns the clustering result, or an error when `k < 2` or the matrix
/// has fewer than `k` rows.
///
/// ## Example
/// ```
/// let obs = ndarray::arr2(&[[0.0, 0.0], [0.1, 0.0], [5.0, 5.0], [5.1, 5.0]]);
/// let result = pam_medoids::partition(2, &obs).unwrap();
/// assert_eq!(result.medoids.len(), 2);
/// ```
#[cfg(feature = "ndarray")]
pub fn partition(k: usize, observations: &ndarray::Array2<f64>) -> Result<PamResult, PamError> {
	if k < 2 {
		return Err(PamError::TooFewPartitions(k));
	}
	if observations.nrows() < k {
		return Err(PamError::NotEnoughObjects {
			rows: observations.nrows(),
			k,
		});
	}
	let distances = crate::distance::euclidean_distances(observations);
	let (_, result): (f64, _) = pam(&distances, k)?;
	Ok(result)
}
