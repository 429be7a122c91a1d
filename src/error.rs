use thiserror::Error;

/// Errors reported by the clustering entry points.
///
/// Both variants are rejected requests, checked before any distance
/// computation takes place. Given a valid request, BUILD and SWAP always
/// terminate with a valid result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PamError {
	/// Fewer than two partitions is not a valid clustering request.
	#[error("less than two partitions were requested (k = {0})")]
	TooFewPartitions(usize),
	/// Too few objects to form k non-empty partitions.
	#[error("not enough objects ({rows}) to create {k} partitions")]
	NotEnoughObjects {
		/// Number of objects in the input.
		rows: usize,
		/// Requested number of partitions.
		k: usize,
	},
}

#[cfg(test)]
mod tests {
	use super::PamError;

	#[test]
	fn test_error_messages() {
		assert_eq!(
			PamError::TooFewPartitions(1).to_string(),
			"less than two partitions were requested (k = 1)"
		);
		assert_eq!(
			PamError::NotEnoughObjects { rows: 4, k: 5 }.to_string(),
			"not enough objects (4) to create 5 partitions"
		);
	}
}
