// Copyright 2025 RTB House S.A.

/// Rejection signals raised by the kernel contract layer.
///
/// Bounds violations and size mismatches are both detected before any
/// numeric work begins, so a rejected call leaves every buffer in its
/// pre-call state. They are kept distinct because a [`Error::SizeMismatch`]
/// reflects a caller logic error in a sizeless call, not a malformed buffer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("operand {arg} requires {required} elements but its limit is {limit}")]
	BoundsViolation {
		arg: &'static str,
		required: usize,
		limit: usize,
	},
	#[error("operand {arg} must supply exactly {expected} elements, got {actual}")]
	SizeMismatch {
		arg: &'static str,
		expected: usize,
		actual: usize,
	},
	#[error("backend error: {0}")]
	Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
