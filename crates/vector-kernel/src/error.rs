// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for vector kernel operations.

/// Errors that can occur during a kernel call.
///
/// Every variant is raised before the kernel writes to any output slice,
/// so a failed call leaves the caller's vectors untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// A two-vector operation received vectors of different lengths.
    #[error("length mismatch in {op}: x has {x_len} elements, y has {y_len}")]
    LengthMismatch {
        op: &'static str,
        x_len: usize,
        y_len: usize,
    },

    /// The input has no well-defined result for the requested operation.
    #[error("invalid input to {op}: {detail}")]
    InvalidInput {
        op: &'static str,
        detail: &'static str,
    },
}

/// Fails with [`KernelError::LengthMismatch`] unless `x_len == y_len`.
pub(crate) fn ensure_same_len(
    op: &'static str,
    x_len: usize,
    y_len: usize,
) -> Result<(), KernelError> {
    if x_len != y_len {
        return Err(KernelError::LengthMismatch { op, x_len, y_len });
    }
    Ok(())
}
