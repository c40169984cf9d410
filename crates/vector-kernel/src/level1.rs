// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`Level1`] trait and its reference implementation.

use crate::{ops, KernelError, Rotation};

/// The Level-1 BLAS operation set over `f64` slices.
///
/// Each method carries the same contract as the free function of the same
/// name in this crate. Implementations hold no state that outlives a call,
/// so a single backend can be shared across threads.
///
/// The trait is object safe: callers pick a backend at runtime through
/// `Box<dyn Level1>`.
pub trait Level1: Send + Sync {
    /// Stable label of this backend.
    fn name(&self) -> &str;

    /// `y = alpha * x + y`.
    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) -> Result<(), KernelError>;

    /// `x = alpha * x`.
    fn scal(&self, alpha: f64, x: &mut [f64]);

    /// `y = x`.
    fn copy(&self, x: &[f64], y: &mut [f64]) -> Result<(), KernelError>;

    /// `x <-> y`.
    fn swap(&self, x: &mut [f64], y: &mut [f64]) -> Result<(), KernelError>;

    /// `Σ x[i] * y[i]`.
    fn dot(&self, x: &[f64], y: &[f64]) -> Result<f64, KernelError>;

    /// Euclidean norm of `x`.
    fn nrm2(&self, x: &[f64]) -> f64;

    /// `Σ |x[i]|`.
    fn asum(&self, x: &[f64]) -> f64;

    /// Index of the first element of largest magnitude.
    fn iamax(&self, x: &[f64]) -> Result<usize, KernelError>;

    /// Builds the Givens rotation zeroing `b` against `a`.
    fn rotg(&self, a: f64, b: f64) -> Rotation;

    /// Applies the plane rotation `(c, s)` to `x` and `y`.
    fn rot(&self, x: &mut [f64], y: &mut [f64], c: f64, s: f64) -> Result<(), KernelError>;
}

/// Portable scalar backend built on the crate's free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLevel1;

impl ReferenceLevel1 {
    pub fn new() -> Self {
        Self
    }
}

impl Level1 for ReferenceLevel1 {
    fn name(&self) -> &str {
        "reference"
    }

    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
        ops::axpy(alpha, x, y)
    }

    fn scal(&self, alpha: f64, x: &mut [f64]) {
        ops::scal(alpha, x)
    }

    fn copy(&self, x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
        ops::copy(x, y)
    }

    fn swap(&self, x: &mut [f64], y: &mut [f64]) -> Result<(), KernelError> {
        ops::swap(x, y)
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> Result<f64, KernelError> {
        ops::dot(x, y)
    }

    fn nrm2(&self, x: &[f64]) -> f64 {
        ops::nrm2(x)
    }

    fn asum(&self, x: &[f64]) -> f64 {
        ops::asum(x)
    }

    fn iamax(&self, x: &[f64]) -> Result<usize, KernelError> {
        ops::iamax(x)
    }

    fn rotg(&self, a: f64, b: f64) -> Rotation {
        ops::rotg(a, b)
    }

    fn rot(&self, x: &mut [f64], y: &mut [f64], c: f64, s: f64) -> Result<(), KernelError> {
        ops::rot(x, y, c, s)
    }
}
