// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # vector-kernel
//!
//! Level-1 BLAS kernels over dense `f64` vectors.
//!
//! This crate provides:
//! - Linear combination and data movement: [`axpy`], [`scal`], [`copy`], [`swap`].
//! - Reductions: [`dot`], [`nrm2`], [`asum`], [`iamax`].
//! - Givens rotations: [`rotg`] builds a [`Rotation`], [`rot`] applies one.
//! - [`Level1`]: the same operation set as an object-safe trait, with
//!   [`ReferenceLevel1`] as the portable implementation.
//!
//! # Design Goals
//! - Stateless: every kernel is a free function over explicit arguments.
//! - No heap allocation; vectors are caller-owned slices mutated in place.
//! - Strong error safety: a rejected call never writes to its outputs.
//! - Sequential left-to-right reductions, reproducible to the last bit.
//! - Clean error types via `thiserror`.

mod error;
mod level1;
mod ops;

pub use error::KernelError;
pub use level1::{Level1, ReferenceLevel1};
pub use ops::{asum, axpy, copy, dot, iamax, nrm2, rot, rotg, scal, swap, Rotation};
