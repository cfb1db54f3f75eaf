// Copyright 2025 RTB House S.A.

//! Dimension feasibility checks shared by every kernel.
//!
//! The checks are pure functions over declared logical sizes and buffer
//! limits; they know nothing about the numeric effect of the operation they
//! guard. Every kernel entry point runs the matching check before touching
//! the numeric backend, so an infeasible call is rejected while all operand
//! buffers are still in their pre-call state.
//!
//! Dimension products are computed with saturating arithmetic: a product
//! that overflows `usize` cannot fit in any buffer and fails the limit
//! comparison like any other oversized request.

use neurops_utils::{bail, checked_arithmetics::saturating_area};

use super::error::Error;

fn ensure_extent(arg: &'static str, required: usize, limit: usize) -> Result<(), Error> {
	if required > limit {
		tracing::debug!(arg, required, limit, "kernel call rejected");
		bail!(Error::BoundsViolation {
			arg,
			required,
			limit,
		});
	}
	Ok(())
}

/// An in-place element-wise operation over the prefix `[0, end)`.
pub fn validate_prefix(end: usize, in_out_limit: usize) -> Result<(), Error> {
	ensure_extent("in_out", end, in_out_limit)
}

/// `y = A·x + y` with `A` logically `n` x `m` row-major.
pub fn validate_gemv(
	m: usize,
	n: usize,
	a_limit: usize,
	x_limit: usize,
	y_limit: usize,
) -> Result<(), Error> {
	ensure_extent("x", m, x_limit)?;
	ensure_extent("y", n, y_limit)?;
	ensure_extent("a", saturating_area(n, m), a_limit)
}

/// `Y = A·B + Y` with `A` `m` x `k`, `B` `k` x `n`, `Y` `m` x `n`.
pub fn validate_gemm(
	m: usize,
	n: usize,
	k: usize,
	a_limit: usize,
	b_limit: usize,
	y_limit: usize,
) -> Result<(), Error> {
	ensure_extent("a", saturating_area(m, k), a_limit)?;
	ensure_extent("b", saturating_area(k, n), b_limit)?;
	ensure_extent("y", saturating_area(m, n), y_limit)
}

/// A single-row linear-layer forward pass, either weight orientation.
pub fn validate_linear(
	input_size: usize,
	output_size: usize,
	weights_limit: usize,
	biases_limit: usize,
	input_limit: usize,
	output_limit: usize,
) -> Result<(), Error> {
	ensure_extent("input", input_size, input_limit)?;
	ensure_extent("output", output_size, output_limit)?;
	ensure_extent("biases", output_size, biases_limit)?;
	ensure_extent("weights", saturating_area(output_size, input_size), weights_limit)
}

/// A batched linear-layer forward pass over `batch_size` strided rows.
pub fn validate_linear_batch(
	input_row_size: usize,
	output_row_size: usize,
	batch_size: usize,
	weights_limit: usize,
	biases_limit: usize,
	input_limit: usize,
	output_limit: usize,
) -> Result<(), Error> {
	ensure_extent("input", saturating_area(input_row_size, batch_size), input_limit)?;
	ensure_extent("output", saturating_area(output_row_size, batch_size), output_limit)?;
	ensure_extent("biases", output_row_size, biases_limit)?;
	ensure_extent(
		"weights",
		saturating_area(input_row_size, output_row_size),
		weights_limit,
	)
}
