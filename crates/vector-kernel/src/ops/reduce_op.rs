// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reductions: dot product, Euclidean norm, absolute sum and arg-max.
//!
//! All sums run strictly left to right, so results are reproducible to
//! the last bit for a given input.

use crate::error::ensure_same_len;
use crate::KernelError;

/// Computes the dot product `Σ x[i] * y[i]`.
///
/// Returns `0.0` for empty vectors.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
///
/// # Examples
/// ```
/// let d = vector_kernel::dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(d, 32.0);
/// ```
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64, KernelError> {
    tracing::trace!(n = x.len(), "dot");
    ensure_same_len("dot", x.len(), y.len())?;

    let mut sum = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum += xi * yi;
    }
    Ok(sum)
}

/// Computes the Euclidean norm `sqrt(Σ x[i]²)`.
///
/// Uses the scaled sum-of-squares recurrence: a running `scale` holds the
/// largest magnitude seen so far and `ssq` the sum of squares relative to
/// it, so no intermediate ever squares a raw element. Vectors whose entries
/// sit near `1e300` or `1e-300` neither overflow nor flush to zero.
///
/// A NaN element yields NaN; otherwise any infinite element yields `+∞`.
pub fn nrm2(x: &[f64]) -> f64 {
    tracing::trace!(n = x.len(), "nrm2");

    let mut scale = 0.0_f64;
    let mut ssq = 1.0_f64;
    let mut saw_inf = false;

    for &xi in x {
        if xi.is_nan() {
            return f64::NAN;
        }
        if xi.is_infinite() {
            saw_inf = true;
            continue;
        }
        if xi == 0.0 {
            continue;
        }
        let a = xi.abs();
        if scale < a {
            let ratio = scale / a;
            ssq = 1.0 + ssq * ratio * ratio;
            scale = a;
        } else {
            let ratio = a / scale;
            ssq += ratio * ratio;
        }
    }

    if saw_inf {
        f64::INFINITY
    } else {
        scale * ssq.sqrt()
    }
}

/// Computes the sum of absolute values `Σ |x[i]|`.
///
/// Returns `0.0` for an empty vector.
pub fn asum(x: &[f64]) -> f64 {
    tracing::trace!(n = x.len(), "asum");
    x.iter().fold(0.0, |acc, xi| acc + xi.abs())
}

/// Returns the 0-based index of the element with the largest absolute value.
///
/// Ties resolve to the first such index. NaN elements never win over a
/// non-NaN element; a vector of only NaNs yields `0`. Reference `idamax`
/// seeds its maximum from `x[0]` and so returns `0` for a leading NaN.
///
/// # Errors
/// Returns [`KernelError::InvalidInput`] for an empty vector, which has no
/// first maximal element.
///
/// # Examples
/// ```
/// assert_eq!(vector_kernel::iamax(&[3.0, -7.0, 2.0]).unwrap(), 1);
/// assert_eq!(vector_kernel::iamax(&[5.0, -5.0]).unwrap(), 0);
/// ```
pub fn iamax(x: &[f64]) -> Result<usize, KernelError> {
    tracing::trace!(n = x.len(), "iamax");
    if x.is_empty() {
        return Err(KernelError::InvalidInput {
            op: "iamax",
            detail: "empty vector has no maximum",
        });
    }

    let mut max_idx = 0;
    let mut max_val = f64::NEG_INFINITY;
    for (i, xi) in x.iter().enumerate() {
        let a = xi.abs();
        if a > max_val {
            max_val = a;
            max_idx = i;
        }
    }
    Ok(max_idx)
}
