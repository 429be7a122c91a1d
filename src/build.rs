use crate::arrayadapter::ArrayAdapter;
use crate::error::PamError;
use crate::state::ClusteringState;
use core::ops::AddAssign;
use log::debug;
use num_traits::{Signed, Zero};
use std::convert::From;

/// Run the PAM BUILD phase.
///
/// Greedily selects k initial medoids: the first is the object with the
/// minimum sum of dissimilarities to all others, each further one is the
/// nonselected object whose selection decreases the total dissimilarity
/// the most. Every addition is followed by a full reclassification pass.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `pam_medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * type `L` - number data type such as `i64` or `f64` for the loss (must be signed)
/// * `mat` - a pairwise dissimilarity matrix
/// * `k` - the number of medoids to pick
///
/// returns the total dissimilarity and the clustering state, or an error
/// when `k < 2` or the matrix has fewer than `k` rows.
///
/// ## Panics
///
/// * panics when the dissimilarity matrix is not square
///
/// ## Example
/// Given a dissimilarity matrix of size 4 x 4, use:
/// ```
/// let data = ndarray::arr2(&[[0, 1, 9, 9], [1, 0, 9, 9], [9, 9, 0, 1], [9, 9, 9, 0]]);
/// let (loss, state): (f64, _) = pam_medoids::pam_build(&data, 2).unwrap();
/// println!("Loss is: {}", loss);
/// ```
pub fn pam_build<M, N, L>(mat: &M, k: usize) -> Result<(L, ClusteringState), PamError>
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let n = mat.len();
	assert!(mat.is_square(), "Dissimilarity matrix is not square");
	if k < 2 {
		return Err(PamError::TooFewPartitions(k));
	}
	if n < k {
		return Err(PamError::NotEnoughObjects { rows: n, k });
	}
	let mut state = ClusteringState::new(n, find_initial_medoid::<M, N, L>(mat));
	let mut loss = L::zero();
	for _ in 1..k {
		let next = find_next_medoid::<M, N, L>(mat, &state);
		state.add_medoid(next);
		loss = state.reclassify::<M, N, L>(mat);
	}
	debug!("BUILD selected {} medoids", state.medoids.len());
	Ok((loss, state))
}

/// The object with the minimum sum of dissimilarities to all others.
///
/// Ties keep the first object in index order.
fn find_initial_medoid<M, N, L>(mat: &M) -> usize
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let n = mat.len();
	let mut best = (L::zero(), n);
	for i in 0..n {
		let mut sum = L::zero();
		for j in 0..n {
			if j != i {
				sum += L::from(mat.get(i, j));
			}
		}
		if i == 0 || sum < best.0 {
			best = (sum, i);
		}
	}
	best.1
}

/// The nonselected object whose selection as a medoid decreases the total
/// dissimilarity the most.
///
/// The gain of a candidate is the sum, over all other nonselected objects,
/// of how much closer the candidate is than their current medoid; objects
/// that would not profit contribute zero. Ties keep the first candidate in
/// ascending index order, so equal gains still produce a fresh medoid.
fn find_next_medoid<M, N, L>(mat: &M, state: &ClusteringState) -> usize
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let mut best = (L::zero(), usize::MAX);
	for (pos, &i) in state.nonselected.iter().enumerate() {
		let mut gain = L::zero();
		for &j in state.nonselected.iter() {
			if j == i {
				continue;
			}
			let d_j = mat.get(j, state.classification[j]);
			let d_j_i = mat.get(j, i);
			if d_j_i < d_j {
				gain += L::from(d_j) - L::from(d_j_i);
			}
		}
		if pos == 0 || gain > best.0 {
			best = (gain, i);
		}
	}
	best.1
}
