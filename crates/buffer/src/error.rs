// Copyright 2025 RTB House S.A.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("limit {limit} exceeds the buffer capacity {capacity}")]
	LimitExceedsCapacity { limit: usize, capacity: usize },
}
