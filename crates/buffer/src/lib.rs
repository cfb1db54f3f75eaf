// Copyright 2025 RTB House S.A.

//! Flat `f32` buffer views shared by every neurops kernel.
//!
//! A kernel call never sees concrete storage. It sees a capability: a
//! contiguous run of 32-bit floats with a logical extent (the *limit*) that
//! can be read, and possibly written, in place. Two storage strategies
//! satisfy the capability:
//!
//! * [`HeapBuffer`], ordinary owned heap storage, convenient for tests and
//!   for callers that stage data themselves;
//! * [`DirectBuffer`], an unmanaged view over memory owned elsewhere (an
//!   mmap of serialized weights, a foreign-allocated arena), which avoids a
//!   copy per call and is preferred on the serving hot path.
//!
//! Kernels never allocate, resize, or retain a buffer beyond the call;
//! creation and destruction belong entirely to the caller.

mod direct;
mod error;
mod heap;
mod memory;

pub use direct::DirectBuffer;
pub use error::Error;
pub use heap::HeapBuffer;
pub use memory::{FloatBuffer, FloatBufferMut};
