// Copyright 2025 RTB House S.A.

//! Dense linear-algebra and activation kernels for neural-network inference.
//!
//! This crate is the contract layer around a delegated numeric backend: it
//! validates every dimension combination, narrows the operand buffers, and
//! dispatches the actual float accumulation to a [`ComputeBackend`]. The
//! operations are the ones a feed-forward layer needs at serving time:
//!
//! * ReLU and ELU activations, in place over a buffer prefix
//! * matrix-vector multiply with accumulation (gemv)
//! * matrix-matrix multiply with accumulation (gemm)
//! * single-row and batched linear-layer forward passes
//!
//! Every entry point is a pure function over [`neurops_buffer`] views and
//! explicit logical dimensions; the `*_full` variants infer the dimensions
//! from buffer limits and add stricter exact-shape checks. The layer holds
//! no state, allocates nothing on the hot path, and is safe to call from
//! arbitrarily many threads at once provided each call's buffers are
//! exclusively owned by that call.

mod activation;
mod backend;
mod error;
mod gemm;
mod gemv;
mod linear;
mod validate;

pub use activation::{elu, elu_full, relu, relu_full};
pub use backend::{ComputeBackend, CpuBackend};
pub use error::Error;
pub use gemm::gemm;
pub use gemv::{gemv, gemv_full};
pub use linear::{linear_batch_forward, linear_forward, linear_forward_full, Transpose};
pub use validate::{
	validate_gemm, validate_gemv, validate_linear, validate_linear_batch, validate_prefix,
};
