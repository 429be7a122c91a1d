#![feature(test)]
//! Note that benchmarks can easily be misleading.
//! PAM evaluates every (medoid, non-medoid) pair per iteration, so the
//! runtime grows quickly with n; keep the matrices small.
extern crate test;

use ndarray::Array2;
use pam_medoids::{pam, pam_build};
use rand::{rngs::StdRng, Rng, SeedableRng};
use test::{black_box, Bencher};

fn random_matrix(n: usize, seed: u64) -> Array2<i32> {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut mat = Array2::<i32>::from_elem((n, n), 0);
	for i in 0..n {
		for j in (i + 1)..n {
			let v = rng.gen_range(1..100);
			mat[[i, j]] = v;
			mat[[j, i]] = v;
		}
	}
	mat
}

#[bench]
fn bench_pam(b: &mut Bencher) {
	let mat = random_matrix(100, 42);
	b.iter(|| {
		let (loss, result): (i64, _) = pam(&mat, 5).unwrap();
		black_box(loss);
		black_box(result);
	});
}

#[bench]
fn bench_pam_build(b: &mut Bencher) {
	let mat = random_matrix(100, 42);
	b.iter(|| {
		let (loss, state): (i64, _) = pam_build(&mat, 5).unwrap();
		black_box(loss);
		black_box(state);
	});
}
