use crate::arrayadapter::ArrayAdapter;
use crate::state::ClusteringState;
use core::ops::AddAssign;
use log::debug;
use num_traits::{Signed, Zero};
use std::convert::From;

/// Run the PAM SWAP phase until no improving swap exists.
///
/// Every (medoid, nonselected) exchange is evaluated per iteration and the
/// one with the most negative cost change is performed, followed by a full
/// reclassification pass. The loop stops when the best exchange no longer
/// strictly reduces the total dissimilarity.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `pam_medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * type `L` - number data type such as `i64` or `f64` for the loss (must be signed)
/// * `mat` - a pairwise dissimilarity matrix
/// * `state` - clustering state produced by [`pam_build`](crate::pam_build)
/// * `loss` - total dissimilarity of `state`
///
/// returns a tuple containing:
/// * the final loss
/// * the number of iterations needed
/// * the number of swaps performed
///
/// ## Example
/// Given a dissimilarity matrix of size 5 x 5, use:
/// ```
/// let data = pam_medoids::arrayadapter::LowerTriangle {
/// 	n: 5,
/// 	data: vec![1, 10, 9, 20, 19, 10, 21, 20, 11, 1],
/// };
/// let (loss, mut state): (i64, _) = pam_medoids::pam_build(&data, 2).unwrap();
/// let (loss, n_iter, n_swap) = pam_medoids::pam_refine(&data, &mut state, loss);
/// println!("Loss is: {}", loss);
/// ```
pub fn pam_refine<M, N, L>(mat: &M, state: &mut ClusteringState, mut loss: L) -> (L, usize, usize)
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let (mut n_swaps, mut iter) = (0, 0);
	loop {
		iter += 1;
		let mut best = (L::zero(), usize::MAX, usize::MAX);
		for &i in state.medoids.iter() {
			for &h in state.nonselected.iter() {
				let change = swap_cost::<M, N, L>(mat, state, i, h);
				if change >= best.0 {
					continue; // No improvement
				}
				best = (change, i, h);
			}
		}
		if best.1 == usize::MAX {
			debug!("SWAP converged after {} iterations, {} swaps", iter, n_swaps);
			break; // No improvement, or NaN.
		}
		n_swaps += 1;
		debug!("swapping medoid {} for object {}", best.1, best.2);
		state.swap_medoid(best.1, best.2);
		let newloss = state.reclassify::<M, N, L>(mat);
		if newloss >= loss {
			break; // Probably numerically unstable now.
		}
		loss = newloss;
	}
	(loss, iter, n_swaps)
}

/// Net change in total dissimilarity if medoid `i` were replaced by `h`.
///
/// Sums the contribution of every nonselected object other than `h`. An
/// object currently served by `i` moves to `h` or to its second-closest
/// medoid, whichever is nearer; an object served elsewhere only
/// contributes when `h` comes closer than its current medoid.
fn swap_cost<M, N, L>(mat: &M, state: &ClusteringState, i: usize, h: usize) -> L
where
	N: Zero + PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	M: ArrayAdapter<N>,
{
	let mut total = L::zero();
	for &j in state.nonselected.iter() {
		if j == h {
			continue;
		}
		let d_j = mat.get(j, state.classification[j]);
		let d_j_i = mat.get(j, i);
		let d_j_h = mat.get(j, h);
		if d_j >= d_j_i {
			// j is served by i; it moves to h or to its fallback
			let e_j = mat.get(j, state.second_closest[j]);
			if d_j_h < e_j {
				total += L::from(d_j_h) - L::from(d_j_i);
			} else {
				total += L::from(e_j) - L::from(d_j_i);
			}
		} else if d_j > d_j_h {
			// j keeps a medoid closer than i, but h is closer still
			total += L::from(d_j_h) - L::from(d_j);
		} // else no change
	}
	total
}

#[cfg(test)]
mod tests {
	use super::{pam_refine, swap_cost};
	use crate::arrayadapter::LowerTriangle;
	use crate::build::pam_build;

	// objects on a line at 0, 1, 10, 20, 21; BUILD picks the central
	// object first, SWAP has to move it into the left cluster
	fn line_fixture() -> LowerTriangle<i32> {
		LowerTriangle {
			n: 5,
			data: vec![1, 10, 9, 20, 19, 10, 21, 20, 11, 1],
		}
	}

	#[test]
	fn test_swap_cost_simple() {
		let data = line_fixture();
		let (_, state): (i64, _) = pam_build(&data, 2).unwrap();
		// BUILD selects medoids 2 and 3
		assert_eq!(
			state.medoids.iter().copied().collect::<Vec<_>>(),
			vec![2, 3]
		);
		let delta: i64 = swap_cost(&data, &state, 2, 1);
		assert_eq!(delta, -9);
		let delta: i64 = swap_cost(&data, &state, 2, 0);
		assert_eq!(delta, -8);
		let delta: i64 = swap_cost(&data, &state, 3, 4);
		assert_eq!(delta, 0);
	}

	#[test]
	fn test_refine_performs_best_swap() {
		let data = line_fixture();
		let (loss, mut state): (i64, _) = pam_build(&data, 2).unwrap();
		assert_eq!(loss, 20);
		let (loss, n_iter, n_swap) = pam_refine(&data, &mut state, loss);
		assert_eq!(loss, 11, "loss not as expected");
		assert_eq!(n_swap, 1, "swaps not as expected");
		assert_eq!(n_iter, 2, "iterations not as expected");
		assert_eq!(
			state.medoids.iter().copied().collect::<Vec<_>>(),
			vec![1, 3],
			"medoids not as expected"
		);
		assert_eq!(
			state.classification,
			vec![1, 1, 1, 3, 3],
			"assignment not as expected"
		);
	}

	#[test]
	fn test_refine_is_a_fixed_point() {
		let data = line_fixture();
		let (loss, mut state): (i64, _) = pam_build(&data, 2).unwrap();
		let (loss, _, _) = pam_refine(&data, &mut state, loss);
		let (loss2, n_iter, n_swap) = pam_refine(&data, &mut state, loss);
		assert_eq!(n_swap, 0);
		assert_eq!(n_iter, 1);
		assert_eq!(loss2, loss);
	}

	#[test]
	fn test_refine_loss_never_increases() {
		let data = LowerTriangle {
			n: 5,
			data: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 1],
		};
		let (build_loss, mut state): (i64, _) = pam_build(&data, 3).unwrap();
		let (loss, _, _) = pam_refine(&data, &mut state, build_loss);
		assert!(loss <= build_loss);
	}
}
