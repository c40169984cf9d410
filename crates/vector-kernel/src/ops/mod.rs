// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Level-1 vector kernels.
//!
//! Every kernel works on caller-owned slices and never allocates. Output
//! slices are validated against their inputs before the first write.

mod linear_op;
mod reduce_op;
mod rotation_op;

pub use linear_op::{axpy, copy, scal, swap};
pub use reduce_op::{asum, dot, iamax, nrm2};
pub use rotation_op::{rot, rotg, Rotation};
