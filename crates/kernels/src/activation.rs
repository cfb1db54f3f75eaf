// Copyright 2025 RTB House S.A.

//! In-place element-wise activation kernels.

use neurops_buffer::FloatBufferMut;

use super::{error::Error, validate::validate_prefix};

/// Applies the rectified linear unit, `v <- max(0, v)`, to `in_out[0, end)`
/// in place. Elements at `end` and beyond are untouched.
pub fn relu<B: FloatBufferMut + ?Sized>(in_out: &mut B, end: usize) -> Result<(), Error> {
	validate_prefix(end, in_out.limit())?;
	for v in &mut in_out.as_floats_mut()[..end] {
		if *v < 0.0 {
			*v = 0.0;
		}
	}
	Ok(())
}

/// [`relu`] over the whole logical extent of `in_out`.
pub fn relu_full<B: FloatBufferMut + ?Sized>(in_out: &mut B) -> Result<(), Error> {
	let end = in_out.limit();
	relu(in_out, end)
}

/// Applies the exponential linear unit to `in_out[0, end)` in place:
///
/// ```text
/// ELU(v) = v                      if v >= 0
///          alpha * (exp(v) - 1)   otherwise
/// ```
///
/// `alpha` sets the value the function converges to below zero.
pub fn elu<B: FloatBufferMut + ?Sized>(in_out: &mut B, end: usize, alpha: f32) -> Result<(), Error> {
	validate_prefix(end, in_out.limit())?;
	for v in &mut in_out.as_floats_mut()[..end] {
		if *v < 0.0 {
			*v = alpha * (v.exp() - 1.0);
		}
	}
	Ok(())
}

/// [`elu`] over the whole logical extent of `in_out`.
pub fn elu_full<B: FloatBufferMut + ?Sized>(in_out: &mut B, alpha: f32) -> Result<(), Error> {
	let end = in_out.limit();
	elu(in_out, end, alpha)
}
