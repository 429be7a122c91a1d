use crate::arrayadapter::ArrayAdapter;
use core::ops::AddAssign;
use num_traits::Zero;
use std::collections::BTreeSet;
use std::convert::From;

/// Bookkeeping for one clustering run.
///
/// The medoid set and its complement always partition `0..n`, every medoid
/// is classified to itself, and all four fields are mutated together. The
/// sets are ordered, so every scan over them visits objects in ascending
/// index order; all tie-breaking in the algorithm relies on that order.
///
/// `second_closest` is only guaranteed accurate directly after a
/// [`reclassify`](ClusteringState::reclassify) pass; between passes it may
/// lag behind the medoid set. The swap-cost evaluation uses it as-is.
#[derive(Debug, Clone)]
pub struct ClusteringState {
	/// Objects currently serving as medoids.
	pub medoids: BTreeSet<usize>,
	/// All other objects.
	pub nonselected: BTreeSet<usize>,
	/// For each object, the medoid it is assigned to.
	pub classification: Vec<usize>,
	/// For each object, the medoid that would take over if its current
	/// medoid were removed.
	pub second_closest: Vec<usize>,
}

impl ClusteringState {
	/// Create the state for `n` objects with a single initial medoid.
	///
	/// Every object is provisionally assigned to the initial medoid, which
	/// also serves as the second-closest placeholder until more medoids
	/// exist.
	pub(crate) fn new(n: usize, initial_medoid: usize) -> Self {
		let mut nonselected: BTreeSet<usize> = (0..n).collect();
		nonselected.remove(&initial_medoid);
		let mut medoids = BTreeSet::new();
		medoids.insert(initial_medoid);
		ClusteringState {
			medoids,
			nonselected,
			classification: vec![initial_medoid; n],
			second_closest: vec![initial_medoid; n],
		}
	}

	/// Assign `object` to `medoid`.
	pub(crate) fn assign(&mut self, object: usize, medoid: usize) {
		self.classification[object] = medoid;
	}

	/// Promote a nonselected object to the medoid set.
	pub(crate) fn add_medoid(&mut self, medoid: usize) {
		self.medoids.insert(medoid);
		self.nonselected.remove(&medoid);
		self.assign(medoid, medoid);
	}

	/// Replace `old` with `new` in the medoid set.
	///
	/// Every classification and second-closest reference to the removed
	/// medoid is repointed to its replacement, so no entry names an object
	/// that is no longer a medoid. The distances behind those references
	/// are settled by the following reclassification pass.
	pub(crate) fn swap_medoid(&mut self, old: usize, new: usize) {
		self.medoids.remove(&old);
		self.nonselected.insert(old);
		self.add_medoid(new);
		for medoid in self.classification.iter_mut() {
			if *medoid == old {
				*medoid = new;
			}
		}
		for medoid in self.second_closest.iter_mut() {
			if *medoid == old {
				*medoid = new;
			}
		}
	}

	/// Full reassignment pass after a medoid-set change.
	///
	/// Recomputes the nearest and second-nearest medoid of every
	/// nonselected object against the complete current medoid set, and
	/// returns the total dissimilarity (medoids contribute zero). This is
	/// the only place `second_closest` is corrected in full.
	pub(crate) fn reclassify<M, N, L>(&mut self, mat: &M) -> L
	where
		N: Zero + PartialOrd + Copy,
		L: AddAssign + Zero + Copy + From<N>,
		M: ArrayAdapter<N>,
	{
		let ClusteringState {
			medoids,
			nonselected,
			classification,
			second_closest,
		} = self;
		let mut total = L::zero();
		for &o in nonselected.iter() {
			for &m in medoids.iter() {
				let current = classification[o];
				if current == m {
					continue;
				}
				let current_d = mat.get(o, current);
				let second_d = mat.get(o, second_closest[o]);
				let candidate_d = mat.get(o, m);
				if candidate_d < current_d {
					classification[o] = m;
					second_closest[o] = current;
				} else if candidate_d < second_d {
					second_closest[o] = m;
				}
			}
			total += L::from(mat.get(o, classification[o]));
		}
		total
	}
}

#[cfg(test)]
mod tests {
	use super::ClusteringState;

	#[test]
	fn test_new_partitions_objects() {
		let state = ClusteringState::new(4, 2);
		assert_eq!(state.medoids.iter().copied().collect::<Vec<_>>(), vec![2]);
		assert_eq!(
			state.nonselected.iter().copied().collect::<Vec<_>>(),
			vec![0, 1, 3]
		);
		assert_eq!(state.classification, vec![2, 2, 2, 2]);
		assert_eq!(state.second_closest, vec![2, 2, 2, 2]);
	}

	#[test]
	fn test_add_medoid() {
		let mut state = ClusteringState::new(4, 2);
		state.add_medoid(0);
		assert!(state.medoids.contains(&0) && state.medoids.contains(&2));
		assert!(!state.nonselected.contains(&0));
		assert_eq!(state.classification[0], 0);
		assert_eq!(state.medoids.len() + state.nonselected.len(), 4);
	}

	#[test]
	fn test_swap_medoid_repoints_references() {
		let mut state = ClusteringState::new(5, 0);
		state.add_medoid(3);
		state.assign(4, 3);
		state.second_closest[4] = 0;
		state.swap_medoid(0, 1);
		assert!(!state.medoids.contains(&0));
		assert!(state.medoids.contains(&1) && state.medoids.contains(&3));
		assert!(state.nonselected.contains(&0));
		// references to the removed medoid follow the replacement
		assert_eq!(state.classification, vec![1, 1, 1, 3, 3]);
		assert_eq!(state.second_closest[4], 1);
		assert_eq!(state.classification[1], 1);
	}

	#[test]
	fn test_reclassify_corrects_second_closest() {
		// objects on a line at 0, 5, 6, 20
		let mat = crate::arrayadapter::LowerTriangle {
			n: 4,
			data: vec![5, 6, 1, 20, 15, 14],
		};
		let mut state = ClusteringState::new(4, 0);
		state.add_medoid(2);
		let total: i64 = state.reclassify(&mat);
		assert_eq!(state.classification, vec![0, 2, 2, 2]);
		assert_eq!(total, 15);
		// the demoted medoid becomes the fallback
		assert_eq!(state.second_closest[1], 0);
		state.add_medoid(1);
		let total: i64 = state.reclassify(&mat);
		assert_eq!(state.classification, vec![0, 1, 2, 2]);
		assert_eq!(total, 14);
		// a medoid closer than the stale fallback replaces it
		assert_eq!(state.second_closest[3], 1);
	}
}
