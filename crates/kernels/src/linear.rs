// Copyright 2025 RTB House S.A.

//! Single-row and batched linear-layer forward passes.
//!
//! The single-row kernel is the unit of correctness: it seeds the
//! destination with the bias vector and then dispatches one
//! stride-parameterized gemv. The batch kernel is an explicit loop over row
//! offsets reusing the same weights and biases, so its behavior is provable
//! from the single-row contract alone.

use neurops_buffer::{FloatBuffer, FloatBufferMut};
use neurops_utils::{bail, checked_arithmetics::saturating_area};

use super::{
	backend::ComputeBackend,
	error::Error,
	validate::{validate_linear, validate_linear_batch},
};

/// Orientation of the weight operand of a linear-layer call.
///
/// Weight matrices arrive serialized in whichever orientation training
/// produced. Forcing callers to materialize a transposed copy would double
/// memory traffic on the hot path, so the kernel absorbs the orientation as
/// a stride-selection parameter for the multiply walk instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
	/// Weights are stored `output_size` x `input_size` row-major.
	No,
	/// Weights are stored `input_size` x `output_size` row-major and are
	/// walked with swapped stride roles; memory is never reordered.
	Yes,
}

impl Transpose {
	/// The `(row_stride, col_stride)` pair locating weight element
	/// `W[out_idx, in_idx]` at `out_idx * row_stride + in_idx * col_stride`.
	fn strides(self, input_size: usize, output_size: usize) -> (usize, usize) {
		match self {
			Self::No => (input_size, 1),
			Self::Yes => (1, output_size),
		}
	}
}

/// Computes `output = W·input + biases`, discarding any prior content of
/// `output`.
///
/// Unlike [`gemv`](fn@crate::gemv) this overwrites the destination; the
/// additive term comes from `biases`, not from pre-existing `output`
/// contents. `transpose` declares which orientation `weights` is stored in
/// (see [`Transpose`]).
pub fn linear_forward<Bk, W, B, I, O>(
	backend: &Bk,
	transpose: Transpose,
	weights: &W,
	biases: &B,
	input: &I,
	output: &mut O,
	input_size: usize,
	output_size: usize,
) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	W: FloatBuffer + ?Sized,
	B: FloatBuffer + ?Sized,
	I: FloatBuffer + ?Sized,
	O: FloatBufferMut + ?Sized,
{
	validate_linear(
		input_size,
		output_size,
		weights.limit(),
		biases.limit(),
		input.limit(),
		output.limit(),
	)?;
	forward_row(
		backend,
		transpose,
		weights.as_floats(),
		&biases.as_floats()[..output_size],
		&input.as_floats()[..input_size],
		&mut output.as_floats_mut()[..output_size],
	)
}

/// [`linear_forward`] with `input_size = input.limit()` and `output_size =
/// output.limit()`.
///
/// With no explicit dimensions to resolve the ambiguity, the weight and bias
/// operands must match the inferred shape exactly: `input.limit() *
/// output.limit() == weights.limit()` and `output.limit() ==
/// biases.limit()`.
pub fn linear_forward_full<Bk, W, B, I, O>(
	backend: &Bk,
	transpose: Transpose,
	weights: &W,
	biases: &B,
	input: &I,
	output: &mut O,
) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	W: FloatBuffer + ?Sized,
	B: FloatBuffer + ?Sized,
	I: FloatBuffer + ?Sized,
	O: FloatBufferMut + ?Sized,
{
	let input_size = input.limit();
	let output_size = output.limit();

	let expected_weights = saturating_area(input_size, output_size);
	if expected_weights != weights.limit() {
		bail!(Error::SizeMismatch {
			arg: "weights",
			expected: expected_weights,
			actual: weights.limit(),
		});
	}
	if output_size != biases.limit() {
		bail!(Error::SizeMismatch {
			arg: "biases",
			expected: output_size,
			actual: biases.limit(),
		});
	}
	linear_forward(backend, transpose, weights, biases, input, output, input_size, output_size)
}

/// Applies the single-row transform independently to each of `batch_size`
/// consecutive rows of `input` (row stride `input_row_size`), writing each
/// result into the corresponding row of `output` (row stride
/// `output_row_size`).
///
/// The same `weights` and `biases` are reused, unmodified, across all rows;
/// this is the batching mechanism, not a decomposition of one larger
/// multiply. Prior `output` contents are discarded row by row.
pub fn linear_batch_forward<Bk, W, B, I, O>(
	backend: &Bk,
	transpose: Transpose,
	weights: &W,
	biases: &B,
	input: &I,
	output: &mut O,
	input_row_size: usize,
	output_row_size: usize,
	batch_size: usize,
) -> Result<(), Error>
where
	Bk: ComputeBackend + ?Sized,
	W: FloatBuffer + ?Sized,
	B: FloatBuffer + ?Sized,
	I: FloatBuffer + ?Sized,
	O: FloatBufferMut + ?Sized,
{
	validate_linear_batch(
		input_row_size,
		output_row_size,
		batch_size,
		weights.limit(),
		biases.limit(),
		input.limit(),
		output.limit(),
	)?;

	let weights = weights.as_floats();
	let biases = &biases.as_floats()[..output_row_size];
	let input = input.as_floats();
	let output = output.as_floats_mut();

	for row in 0..batch_size {
		let x = &input[row * input_row_size..(row + 1) * input_row_size];
		let y = &mut output[row * output_row_size..(row + 1) * output_row_size];
		forward_row(backend, transpose, weights, biases, x, y)?;
	}
	Ok(())
}

/// One bias-seeded gemv against pre-narrowed slices. Shared by the
/// single-row and batched entry points after their validation has passed.
fn forward_row<Bk: ComputeBackend + ?Sized>(
	backend: &Bk,
	transpose: Transpose,
	weights: &[f32],
	biases: &[f32],
	x: &[f32],
	y: &mut [f32],
) -> Result<(), Error> {
	y.copy_from_slice(biases);
	let (row_stride, col_stride) = transpose.strides(x.len(), y.len());
	backend.gemv(weights, x, y, x.len(), y.len(), row_stride, col_stride)
}
