//! k-Medoids Clustering with the classic PAM Algorithm
//!
//! Computes a k-medoids partition of a data set from its pairwise
//! dissimilarities: the greedy BUILD phase selects an initial set of k
//! medoids, the SWAP phase then exchanges medoids for non-medoids as long
//! as an exchange strictly reduces the total dissimilarity.
//!
//! For details on the algorithm, please see:
//!
//! Leonard Kaufman, Peter J. Rousseeuw:
//! **Partitioning Around Medoids (Program PAM)**
//! In: Finding Groups in Data: An Introduction to Cluster Analysis, 1990, 68-125.
//! <https://doi.org/10.1002/9780470316801.ch2>
//!
//! ## Example
//!
//! Given a dissimilarity matrix of size 4 x 4, use:
//! ```
//! let data = ndarray::arr2(&[[0, 1, 9, 9], [1, 0, 9, 9], [9, 9, 0, 1], [9, 9, 9, 0]]);
//! let (loss, result): (f64, _) = pam_medoids::pam(&data, 2).unwrap();
//! println!("Loss is: {}", loss);
//! ```
//!
//! Or start from raw observations (rows = objects, columns = features) and
//! let the crate compute Euclidean distances:
//! ```
//! let obs = ndarray::arr2(&[[0.0, 0.0], [0.1, 0.0], [5.0, 5.0], [5.1, 5.0]]);
//! let result = pam_medoids::partition(2, &obs).unwrap();
//! println!("Medoids: {:?}", result.medoids);
//! ```
pub mod arrayadapter;
mod build;
#[cfg(feature = "ndarray")]
mod distance;
mod error;
mod pam;
mod refine;
mod state;

pub use crate::arrayadapter::ArrayAdapter;
pub use crate::build::pam_build;
#[cfg(feature = "ndarray")]
pub use crate::distance::euclidean_distances;
pub use crate::error::PamError;
pub use crate::pam::*;
pub use crate::refine::pam_refine;
pub use crate::state::ClusteringState;
