// Copyright 2025 RTB House S.A.

//! Matrix-matrix multiply with accumulation.

use neurops_buffer::{FloatBuffer, FloatBufferMut};

use super::{backend::ComputeBackend, error::Error, validate::validate_gemm};

/// Computes `Y = A·B + Y` where `A` is `m` x `k`, `B` is `k` x `n` and `Y`
/// is `m` x `n`, all row-major.
///
/// The result accumulates into the existing contents of `Y`; callers that
/// want an overwrite must zero `Y` first. `a` and `b` are read-only, `y` is
/// read-modify-written.
pub fn gemm<Bk, A, B, Y>(
	backend: &Bk,
	a: &A,
	b: &B,
	y: &mut Y,
	m: usize,
	n: usize,
	k: usize,
) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	A: FloatBuffer + ?Sized,
	B: FloatBuffer + ?Sized,
	Y: FloatBufferMut + ?Sized,
{
	validate_gemm(m, n, k, a.limit(), b.limit(), y.limit())?;
	backend.gemm(a.as_floats(), b.as_floats(), y.as_floats_mut(), m, n, k)
}
