// Copyright 2025 RTB House S.A.

/// A readable view of a contiguous run of 32-bit floats with a logical extent.
///
/// The trait abstracts over the underlying storage representation so that
/// kernel logic is written once against the capability, not against a concrete
/// storage type. The *limit* is the logical number of elements the view
/// exposes; it may be smaller than the physical capacity of the storage
/// behind it.
pub trait FloatBuffer {
	fn is_empty(&self) -> bool {
		self.limit() == 0
	}

	/// The logical extent of the view, in elements.
	fn limit(&self) -> usize;

	/// The viewed elements, exactly `limit()` of them.
	fn as_floats(&self) -> &[f32];
}

/// A [`FloatBuffer`] that can additionally be written in place.
///
/// Mutable access covers the same `limit()` elements the read side exposes.
/// Holding the view gives exclusive access to that region for its lifetime.
pub trait FloatBufferMut: FloatBuffer {
	fn as_floats_mut(&mut self) -> &mut [f32];
}

impl FloatBuffer for &[f32] {
	fn limit(&self) -> usize {
		self.len()
	}

	fn as_floats(&self) -> &[f32] {
		self
	}
}

impl FloatBuffer for &mut [f32] {
	fn limit(&self) -> usize {
		self.len()
	}

	fn as_floats(&self) -> &[f32] {
		self
	}
}

impl FloatBufferMut for &mut [f32] {
	fn as_floats_mut(&mut self) -> &mut [f32] {
		self
	}
}

impl FloatBuffer for Vec<f32> {
	fn limit(&self) -> usize {
		self.len()
	}

	fn as_floats(&self) -> &[f32] {
		self
	}
}

impl FloatBufferMut for Vec<f32> {
	fn as_floats_mut(&mut self) -> &mut [f32] {
		self
	}
}
