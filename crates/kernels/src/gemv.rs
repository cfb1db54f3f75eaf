// Copyright 2025 RTB House S.A.

//! Matrix-vector multiply with accumulation, the transpose-free baseline the
//! higher kernels reduce to.

use neurops_buffer::{FloatBuffer, FloatBufferMut};
use neurops_utils::{bail, checked_arithmetics::saturating_area};

use super::{backend::ComputeBackend, error::Error, validate::validate_gemv};

/// Computes `y = A·x + y` where `A` is logically `n` x `m` row-major, `x`
/// supplies `m` elements and `y` supplies `n`.
///
/// The result accumulates into the existing contents of `y`; callers that
/// want an overwrite must zero `y` first. `a` and `x` are read-only, `y` is
/// read-modify-written.
pub fn gemv<Bk, A, X, Y>(
	backend: &Bk,
	a: &A,
	x: &X,
	y: &mut Y,
	m: usize,
	n: usize,
) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	A: FloatBuffer + ?Sized,
	X: FloatBuffer + ?Sized,
	Y: FloatBufferMut + ?Sized,
{
	validate_gemv(m, n, a.limit(), x.limit(), y.limit())?;
	backend.gemv(a.as_floats(), x.as_floats(), y.as_floats_mut(), m, n, m, 1)
}

/// [`gemv`] with `m = x.limit()` and `n = y.limit()`.
///
/// With no explicit dimensions to resolve the ambiguity, the matrix operand
/// must match the inferred shape exactly: `x.limit() * y.limit() ==
/// a.limit()`.
pub fn gemv_full<Bk, A, X, Y>(backend: &Bk, a: &A, x: &X, y: &mut Y) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	A: FloatBuffer + ?Sized,
	X: FloatBuffer + ?Sized,
	Y: FloatBufferMut + ?Sized,
{
	let m = x.limit();
	let n = y.limit();
	let expected = saturating_area(m, n);
	if expected != a.limit() {
		bail!(Error::SizeMismatch {
			arg: "a",
			expected,
			actual: a.limit(),
		});
	}
	gemv(backend, a, x, y, m, n)
}
