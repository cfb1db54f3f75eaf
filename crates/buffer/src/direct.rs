// Copyright 2025 RTB House S.A.

use std::{ptr::NonNull, slice};

use getset::CopyGetters;

use super::{
	error::Error,
	memory::{FloatBuffer, FloatBufferMut},
};

/// An unmanaged float buffer over a raw memory region owned by the caller.
///
/// Serving systems keep model parameters in memory this crate does not
/// manage: an mmap of the serialized model, an arena owned by foreign code,
/// or a region handed across a C ABI. `DirectBuffer` views such a region as a
/// fixed-capacity sequence of `f32` in native byte order, without copying it,
/// which is why it is the preferred storage on the inference hot path.
///
/// Dropping a `DirectBuffer` never touches the region; whoever allocated it
/// remains responsible for freeing it after the view is gone.
#[derive(Debug, CopyGetters)]
pub struct DirectBuffer {
	ptr: NonNull<f32>,
	#[getset(get_copy = "pub")]
	capacity: usize,
	#[getset(get_copy = "pub")]
	limit: usize,
}

impl DirectBuffer {
	/// Wraps a raw region of `capacity` floats. The initial limit is the
	/// full capacity.
	///
	/// # Safety
	///
	/// The caller must guarantee, for the lifetime of the returned view:
	///
	/// - `ptr` is non-null, aligned for `f32`, and valid for reads and
	///   writes of `capacity` consecutive elements within one allocation;
	/// - the `capacity * 4` byte region is initialized;
	/// - the region is not read or written through any other pointer while
	///   the view is alive (the view has exclusive access), and it stays
	///   allocated until the view is dropped.
	pub unsafe fn from_raw_parts(ptr: *mut f32, capacity: usize) -> Self {
		debug_assert!(!ptr.is_null());
		Self {
			ptr: NonNull::new_unchecked(ptr),
			capacity,
			limit: capacity,
		}
	}

	pub fn set_limit(&mut self, limit: usize) -> Result<(), Error> {
		if limit > self.capacity {
			return Err(Error::LimitExceedsCapacity {
				limit,
				capacity: self.capacity,
			});
		}
		self.limit = limit;
		Ok(())
	}
}

// SAFETY: the view has exclusive access to its region by the
// `from_raw_parts` contract, so it behaves like `&mut [f32]` with respect to
// thread transfer and sharing.
unsafe impl Send for DirectBuffer {}
unsafe impl Sync for DirectBuffer {}

impl FloatBuffer for DirectBuffer {
	fn limit(&self) -> usize {
		self.limit
	}

	fn as_floats(&self) -> &[f32] {
		// SAFETY: `ptr` is valid for `capacity >= limit` initialized
		// elements and the view is exclusive, both by the `from_raw_parts`
		// contract. The lifetime of the slice is tied to `&self`.
		unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.limit) }
	}
}

impl FloatBufferMut for DirectBuffer {
	fn as_floats_mut(&mut self) -> &mut [f32] {
		// SAFETY: as in `as_floats`, with write validity guaranteed by the
		// same contract; `&mut self` rules out a concurrent read through
		// this view.
		unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.limit) }
	}
}
