// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Linear combination, scaling, copy and exchange of vectors.

use crate::error::ensure_same_len;
use crate::KernelError;

/// Computes `y = alpha * x + y` in place.
///
/// `alpha == 0` still walks the vectors, so NaN or infinite entries of `x`
/// are not special-cased away.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
/// `y` is untouched in that case.
///
/// # Examples
/// ```
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [10.0, 20.0, 30.0];
/// vector_kernel::axpy(2.0, &x, &mut y).unwrap();
/// assert_eq!(y, [12.0, 24.0, 36.0]);
/// ```
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
    tracing::trace!(n = x.len(), "axpy");
    ensure_same_len("axpy", x.len(), y.len())?;

    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi += alpha * xi;
    }

    Ok(())
}

/// Computes `x = alpha * x` in place.
///
/// Never fails: an empty vector is a no-op.
pub fn scal(alpha: f64, x: &mut [f64]) {
    tracing::trace!(n = x.len(), "scal");
    x.iter_mut().for_each(|xi| *xi *= alpha);
}

/// Copies `x` into `y`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
pub fn copy(x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
    tracing::trace!(n = x.len(), "copy");
    ensure_same_len("copy", x.len(), y.len())?;
    y.copy_from_slice(x);
    Ok(())
}

/// Exchanges the contents of `x` and `y` element by element.
///
/// Elements are moved, not recomputed, so NaN payloads, signed zeros and
/// infinities come through bit-for-bit.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
pub fn swap(x: &mut [f64], y: &mut [f64]) -> Result<(), KernelError> {
    tracing::trace!(n = x.len(), "swap");
    ensure_same_len("swap", x.len(), y.len())?;
    x.swap_with_slice(y);
    Ok(())
}
