// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Fit a quadratic by least squares using Givens QR.
//!
//! Builds the factorisation from nothing but Level-1 kernels: `rotg` and
//! `rot` zero the sub-diagonal row by row, `dot` drives the back
//! substitution, and `nrm2` reports the residual.
//!
//! ```bash
//! cargo run -p vector-kernel --example givens_least_squares
//! ```

use anyhow::{bail, Context};
use vector_kernel::{axpy, dot, nrm2, rot, rotg, scal, KernelError};

/// Number of polynomial coefficients.
const DEGREE_PLUS_ONE: usize = 3;

fn main() -> anyhow::Result<()> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    // Samples of y = 1 - 2t + 0.5t² with a small deterministic wobble.
    let samples: Vec<(f64, f64)> = (0..12)
        .map(|i| {
            let t = i as f64 * 0.5;
            let noise = 0.01 * ((i * 7) as f64).sin();
            (t, 1.0 - 2.0 * t + 0.5 * t * t + noise)
        })
        .collect();
    tracing::info!("fitting {} samples", samples.len());

    // Augmented rows [1, t, t², y].
    let mut rows: Vec<Vec<f64>> = samples
        .iter()
        .map(|&(t, y)| vec![1.0, t, t * t, y])
        .collect();
    let original = rows.clone();

    triangularise(&mut rows).context("QR factorisation failed")?;
    let coeffs = back_substitute(&rows)?;
    let tail: Vec<f64> = rows[DEGREE_PLUS_ONE..]
        .iter()
        .map(|row| row[DEGREE_PLUS_ONE])
        .collect();
    let qr_residual = nrm2(&tail);

    println!("Coefficients: {coeffs:?}");
    println!("Residual (from Q^T b): {qr_residual:.3e}");

    // Cross-check against the residual computed directly as b - A x.
    let mut residual = vec![0.0; original.len()];
    for (r, row) in residual.iter_mut().zip(&original) {
        *r = row[DEGREE_PLUS_ONE] - dot(&row[..DEGREE_PLUS_ONE], &coeffs)?;
    }
    let direct_residual = nrm2(&residual);
    println!("Residual (direct):     {direct_residual:.3e}");

    if (direct_residual - qr_residual).abs() > 1e-9 {
        bail!("residual mismatch: {direct_residual} vs {qr_residual}");
    }

    // Relative error of the fitted coefficients against the generating ones.
    let truth = [1.0, -2.0, 0.5];
    let mut error = truth.to_vec();
    axpy(-1.0, &coeffs, &mut error)?;
    scal(1.0 / nrm2(&truth), &mut error);
    tracing::info!("relative coefficient error: {:.3e}", nrm2(&error));

    Ok(())
}

/// Reduces the augmented rows to upper-triangular form in place.
fn triangularise(rows: &mut [Vec<f64>]) -> Result<(), KernelError> {
    for col in 0..DEGREE_PLUS_ONE {
        for i in col + 1..rows.len() {
            let (upper, lower) = rows.split_at_mut(i);
            let pivot = &mut upper[col];
            let target = &mut lower[0];
            let g = rotg(pivot[col], target[col]);
            tracing::debug!(col, row = i, r = g.r, "rotating");
            rot(&mut pivot[col..], &mut target[col..], g.c, g.s)?;
        }
    }
    Ok(())
}

/// Solves the leading triangular block for the coefficients.
fn back_substitute(rows: &[Vec<f64>]) -> anyhow::Result<Vec<f64>> {
    let mut coeffs = vec![0.0; DEGREE_PLUS_ONE];
    for k in (0..DEGREE_PLUS_ONE).rev() {
        let diag = rows[k][k];
        if diag == 0.0 {
            bail!("rank-deficient system: zero pivot in column {k}");
        }
        let known = dot(&rows[k][k + 1..DEGREE_PLUS_ONE], &coeffs[k + 1..])?;
        coeffs[k] = (rows[k][DEGREE_PLUS_ONE] - known) / diag;
    }
    Ok(coeffs)
}
