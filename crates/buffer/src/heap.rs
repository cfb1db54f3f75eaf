// Copyright 2025 RTB House S.A.

use bytemuck::zeroed_slice_box;
use getset::CopyGetters;

use super::{
	error::Error,
	memory::{FloatBuffer, FloatBufferMut},
};

/// An owned, heap-backed float buffer with a logical limit.
///
/// The physical capacity is fixed at construction; [`HeapBuffer::set_limit`]
/// can shrink or restore the logical extent within it, which lets one
/// allocation serve layers of different widths.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct HeapBuffer {
	elements: Box<[f32]>,
	#[getset(get_copy = "pub")]
	limit: usize,
}

impl HeapBuffer {
	/// A zero-filled buffer with `limit == capacity`.
	pub fn zeroed(capacity: usize) -> Self {
		Self {
			elements: zeroed_slice_box(capacity),
			limit: capacity,
		}
	}

	pub fn from_floats(src: &[f32]) -> Self {
		Self {
			elements: src.into(),
			limit: src.len(),
		}
	}

	pub fn capacity(&self) -> usize {
		self.elements.len()
	}

	pub fn set_limit(&mut self, limit: usize) -> Result<(), Error> {
		if limit > self.capacity() {
			return Err(Error::LimitExceedsCapacity {
				limit,
				capacity: self.capacity(),
			});
		}
		self.limit = limit;
		Ok(())
	}
}

impl FloatBuffer for HeapBuffer {
	fn limit(&self) -> usize {
		self.limit
	}

	fn as_floats(&self) -> &[f32] {
		&self.elements[..self.limit]
	}
}

impl FloatBufferMut for HeapBuffer {
	fn as_floats_mut(&mut self) -> &mut [f32] {
		&mut self.elements[..self.limit]
	}
}
