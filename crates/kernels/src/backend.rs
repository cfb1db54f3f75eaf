// Copyright 2025 RTB House S.A.

use std::num::NonZeroUsize;

use super::error::Error;

/// The delegated numeric engine behind the kernel contract layer.
///
/// The contract layer validates every dimension combination before invoking
/// a hook, so implementations may assume the stated preconditions and skip
/// their own bounds checks. Implementations must be callable from
/// arbitrarily many threads at once without serializing through a global
/// lock; the contract layer holds no shared mutable state and adds no
/// locking of its own.
///
/// An engine with bounded internal capacity (scratch regions, an internal
/// thread pool) reports it through [`ComputeBackend::concurrency_capacity`].
/// Deployments must configure a backend whose capacity covers the serving
/// system's thread-pool size; a call that exhausts the engine's capacity
/// fails with [`Error::Backend`] and is not retried here, since sizing the
/// engine is an operational concern rather than a per-call recovery path.
pub trait ComputeBackend: Sync {
	/// Stride-parameterized matrix-vector multiply with accumulation:
	///
	/// ```text
	/// y[i] += sum_j a[i * row_stride + j * col_stride] * x[j]
	/// ```
	///
	/// for `i` in `[0, n)` and `j` in `[0, m)`. The stride pair is how a
	/// transposed weight orientation is walked without materializing a
	/// transposed copy.
	///
	/// ## Preconditions
	///
	/// * `x.len() >= m` and `y.len() >= n`
	/// * `a` covers every index reachable by the stride walk
	fn gemv(
		&self,
		a: &[f32],
		x: &[f32],
		y: &mut [f32],
		m: usize,
		n: usize,
		row_stride: usize,
		col_stride: usize,
	) -> Result<(), Error>;

	/// Matrix-matrix multiply with accumulation, `Y = A·B + Y`, with `A`
	/// `m` x `k`, `B` `k` x `n` and `Y` `m` x `n`, all row-major.
	///
	/// ## Preconditions
	///
	/// * `a.len() >= m * k`, `b.len() >= k * n`, `y.len() >= m * n`
	fn gemm(
		&self,
		a: &[f32],
		b: &[f32],
		y: &mut [f32],
		m: usize,
		n: usize,
		k: usize,
	) -> Result<(), Error>;

	/// Upper bound on simultaneously in-flight calls the engine sustains,
	/// or `None` when unbounded.
	fn concurrency_capacity(&self) -> Option<NonZeroUsize> {
		None
	}
}

/// Reference CPU implementation of the numeric backend.
///
/// Not optimized to use multi-threading or SIMD arithmetic. It is optimized
/// for readability, used to validate the contract layer and provide an
/// algorithmic reference for optimized BLAS-backed implementations. It holds
/// no internal state, so its concurrency capacity is unbounded.
#[derive(Debug, Default, Clone)]
pub struct CpuBackend;

impl ComputeBackend for CpuBackend {
	fn gemv(
		&self,
		a: &[f32],
		x: &[f32],
		y: &mut [f32],
		m: usize,
		n: usize,
		row_stride: usize,
		col_stride: usize,
	) -> Result<(), Error> {
		for i in 0..n {
			let mut acc = y[i];
			for j in 0..m {
				acc += a[i * row_stride + j * col_stride] * x[j];
			}
			y[i] = acc;
		}
		Ok(())
	}

	fn gemm(
		&self,
		a: &[f32],
		b: &[f32],
		y: &mut [f32],
		m: usize,
		n: usize,
		k: usize,
	) -> Result<(), Error> {
		for i in 0..m {
			for j in 0..n {
				let mut acc = y[i * n + j];
				for l in 0..k {
					acc += a[i * k + l] * b[l * n + j];
				}
				y[i * n + j] = acc;
			}
		}
		Ok(())
	}
}
