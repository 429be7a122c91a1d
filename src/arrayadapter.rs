//! Adapter trait for accessing different types of dissimilarity matrices.
//!
//! The PAM core only ever reads single cells of a square matrix, so any
//! storage layout that can answer `get(x, y)` works. Adapters are included
//! for `ndarray::Array2` and for a lower triangular matrix serialized into
//! a `Vec`.

/// Read access to a square dissimilarity matrix.
#[allow(clippy::len_without_is_empty)]
pub trait ArrayAdapter<N: Copy> {
	/// Get the number of rows (= number of objects)
	fn len(&self) -> usize;
	/// Verify that it is a square matrix
	fn is_square(&self) -> bool;
	/// Get the dissimilarity of objects x and y
	fn get(&self, x: usize, y: usize) -> N;
}

/// Adapter implementation for `ndarray::Array2`
#[cfg(feature = "ndarray")]
impl<N: Copy> ArrayAdapter<N> for ndarray::Array2<N> {
	#[inline]
	fn len(&self) -> usize {
		self.shape()[0]
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.shape()[0] == self.shape()[1]
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		self[[x, y]]
	}
}

/// Lower triangular matrix in serial form (without diagonal)
///
/// ## Example
/// ```
/// let data = pam_medoids::arrayadapter::LowerTriangle {
/// 	n: 5,
/// 	data: vec![1, 10, 9, 20, 19, 10, 21, 20, 11, 1],
/// };
/// let (loss, result): (i64, _) = pam_medoids::pam(&data, 2).unwrap();
/// println!("Loss is {}", loss);
/// ```
#[derive(Debug, Clone)]
pub struct LowerTriangle<N> {
	/// Matrix size
	pub n: usize,
	// Matrix data, lower triangular form without diagonal
	pub data: Vec<N>,
}
/// Adapter implementation for LowerTriangle
impl<N: Copy + num_traits::Zero> ArrayAdapter<N> for LowerTriangle<N> {
	#[inline]
	fn len(&self) -> usize {
		self.n
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.data.len() == (self.n * (self.n - 1)) >> 1
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		match x.cmp(&y) {
			std::cmp::Ordering::Less => self.data[((y * (y - 1)) >> 1) + x],
			std::cmp::Ordering::Greater => self.data[((x * (x - 1)) >> 1) + y],
			std::cmp::Ordering::Equal => N::zero(),
		}
	}
}
