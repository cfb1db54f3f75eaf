// Copyright 2025 RTB House S.A.

/// Number of elements a `rows` x `cols` row-major matrix spans.
///
/// Saturates on overflow, so an absurd dimension pair always fails a later
/// comparison against a real buffer limit instead of wrapping past it.
pub const fn saturating_area(rows: usize, cols: usize) -> usize {
	match rows.checked_mul(cols) {
		Some(n) => n,
		None => usize::MAX,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_saturating_area_exact() {
		assert_eq!(saturating_area(0, 7), 0);
		assert_eq!(saturating_area(3, 2), 6);
		assert_eq!(saturating_area(1, usize::MAX), usize::MAX);
	}

	#[test]
	fn test_saturating_area_overflow() {
		assert_eq!(saturating_area(usize::MAX, 2), usize::MAX);
		assert_eq!(saturating_area(usize::MAX, usize::MAX), usize::MAX);
	}
}
