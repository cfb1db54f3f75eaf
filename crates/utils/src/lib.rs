// Copyright 2025 RTB House S.A.

//! Shared helpers for the neurops workspace: error-return macros, checked
//! arithmetic for dimension products, and the tracing bootstrap.

pub mod checked_arithmetics;
pub mod error_utils;
pub mod tracing;
