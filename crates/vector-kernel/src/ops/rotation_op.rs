// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Givens plane rotations: construction and application.

use crate::error::ensure_same_len;
use crate::KernelError;

/// A plane rotation produced by [`rotg`].
///
/// Applying the rotation to the column `(a, b)` it was built from yields
/// `(r, 0)`. `z` packs `(c, s)` into one number so callers that can only
/// keep `r` and `z` (e.g. when overwriting `a` and `b` in a factorisation)
/// can recover the rotation later with [`Rotation::from_z`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Signed length of `(a, b)`.
    pub r: f64,
    /// Reconstruction value for `(c, s)`.
    pub z: f64,
    /// Cosine of the rotation angle.
    pub c: f64,
    /// Sine of the rotation angle.
    pub s: f64,
}

impl Rotation {
    /// Returns the rotation as the ordered tuple `[r, z, c, s]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.z, self.c, self.s]
    }

    /// Recovers `(c, s)` from the reconstruction value `z`.
    ///
    /// | `z`         | `c`              | `s`              |
    /// |-------------|------------------|------------------|
    /// | `1`         | `0`              | `1`              |
    /// | `\|z\| < 1` | `sqrt(1 - z²)`   | `z`              |
    /// | `\|z\| > 1` | `1 / z`          | `sqrt(1 - c²)`   |
    ///
    /// `z == 0` falls in the middle row and decodes to the identity.
    ///
    /// When [`rotg`] produced a subnormal `c`, `z = 1 / c` overflows to `±∞`
    /// and decodes to `(0, 1)` rather than the original `c`, as in classic
    /// BLAS. The decoded rotation still zeroes `b` to within that `c`.
    pub fn from_z(z: f64) -> (f64, f64) {
        if z == 1.0 {
            (0.0, 1.0)
        } else if z.abs() < 1.0 {
            ((1.0 - z * z).sqrt(), z)
        } else {
            let c = 1.0 / z;
            (c, (1.0 - c * c).sqrt())
        }
    }

    /// Applies this rotation to `x` and `y` via [`rot`].
    ///
    /// # Errors
    /// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn apply(&self, x: &mut [f64], y: &mut [f64]) -> Result<(), KernelError> {
        rot(x, y, self.c, self.s)
    }
}

impl From<Rotation> for [f64; 4] {
    fn from(rotation: Rotation) -> Self {
        rotation.to_array()
    }
}

/// Constructs the Givens rotation that zeroes `b` against `a`.
///
/// `r` takes the sign of whichever of `a`, `b` has the larger magnitude
/// (`b` on a tie). Both operands are divided by `max(|a|, |b|)` before
/// squaring, so inputs near the overflow threshold are handled.
///
/// `z` follows the classic encoding:
/// - `z = s` when `|a| > |b|`,
/// - `z = 1 / c` when `|b| >= |a|` and `c != 0`,
/// - `z = 1` when `c == 0`.
///
/// For `a = b = 0` the result is `r = 0, z = 0, c = 1, s = 0`.
///
/// Whenever `z` is written as `1 / c` the sine is non-negative, which is
/// what lets [`Rotation::from_z`] take the positive square root.
///
/// # Examples
/// ```
/// let g = vector_kernel::rotg(3.0, 4.0);
/// assert!((g.r - 5.0).abs() < 1e-12);
/// assert!((g.c - 0.6).abs() < 1e-12);
/// assert!((g.s - 0.8).abs() < 1e-12);
/// ```
pub fn rotg(a: f64, b: f64) -> Rotation {
    tracing::trace!(a, b, "rotg");

    let abs_a = a.abs();
    let abs_b = b.abs();
    let scale = abs_a.max(abs_b);

    if scale == 0.0 {
        return Rotation {
            r: 0.0,
            z: 0.0,
            c: 1.0,
            s: 0.0,
        };
    }

    let roe = if abs_a > abs_b { a } else { b };
    let (sa, sb) = (a / scale, b / scale);
    let r = (scale * (sa * sa + sb * sb).sqrt()).copysign(roe);
    let c = a / r;
    let s = b / r;

    let z = if abs_a > abs_b {
        s
    } else if c != 0.0 {
        1.0 / c
    } else {
        1.0
    };

    Rotation { r, z, c, s }
}

/// Applies the plane rotation `(c, s)` to every pair `(x[i], y[i])`:
///
/// `x[i] = c * x[i] + s * y[i]`, `y[i] = c * y[i] - s * x[i]`
///
/// Both updates use the values from before the step.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if `x` and `y` differ in length.
/// Neither slice is modified in that case.
pub fn rot(x: &mut [f64], y: &mut [f64], c: f64, s: f64) -> Result<(), KernelError> {
    tracing::trace!(n = x.len(), "rot");
    ensure_same_len("rot", x.len(), y.len())?;

    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let (xv, yv) = (*xi, *yi);
        *xi = c * xv + s * yv;
        *yi = c * yv - s * xv;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn assert_annihilates(a: f64, b: f64) {
        let g = rotg(a, b);
        let mut x = [a];
        let mut y = [b];
        rot(&mut x, &mut y, g.c, g.s).unwrap();
        let tol = 1e-12 * g.r.abs().max(1.0);
        assert!(approx_eq(x[0], g.r, tol), "rotg({a}, {b}): x = {} != r = {}", x[0], g.r);
        assert!(approx_eq(y[0], 0.0, tol), "rotg({a}, {b}): y = {} != 0", y[0]);
        assert!(approx_eq(g.r.abs(), a.hypot(b), tol));
    }

    #[test]
    fn test_rotg_3_4() {
        let g = rotg(3.0, 4.0);
        assert!(approx_eq(g.r, 5.0, 1e-12));
        assert!(approx_eq(g.c, 0.6, 1e-12));
        assert!(approx_eq(g.s, 0.8, 1e-12));
        // |b| >= |a| → z = 1/c.
        assert!(approx_eq(g.z, 1.0 / 0.6, 1e-12));
    }

    #[test]
    fn test_rotg_a_dominant() {
        let g = rotg(-4.0, 3.0);
        // r carries the sign of a.
        assert!(approx_eq(g.r, -5.0, 1e-12));
        assert!(approx_eq(g.c, 0.8, 1e-12));
        assert!(approx_eq(g.s, -0.6, 1e-12));
        assert_eq!(g.z, g.s);
    }

    #[test]
    fn test_rotg_zero_zero() {
        let g = rotg(0.0, 0.0);
        assert_eq!(g.to_array(), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rotg_a_zero() {
        // c = 0 → z = 1.
        let g = rotg(0.0, -2.0);
        assert_eq!(g.r, -2.0);
        assert_eq!(g.c, 0.0);
        assert_eq!(g.s, 1.0);
        assert_eq!(g.z, 1.0);
    }

    #[test]
    fn test_rotg_b_zero() {
        let g = rotg(-7.0, 0.0);
        assert_eq!(g.r, -7.0);
        assert_eq!(g.c, 1.0);
        assert_eq!(g.s, 0.0);
        assert_eq!(g.z, 0.0);
    }

    #[test]
    fn test_rotg_annihilates() {
        for &(a, b) in &[
            (1.0, 1.0),
            (3.0, -4.0),
            (-2.5, 0.1),
            (1e-3, 7.0),
            (-6.0, -6.0),
        ] {
            assert_annihilates(a, b);
        }
    }

    #[test]
    fn test_rotg_no_overflow() {
        let g = rotg(1e300, 1e300);
        assert!(g.r.is_finite());
        assert!(approx_eq(g.r / 1e300, 2f64.sqrt(), 1e-12));
        assert!(approx_eq(g.c, std::f64::consts::FRAC_1_SQRT_2, 1e-12));
    }

    #[test]
    fn test_rotg_no_underflow() {
        let g = rotg(3e-300, 4e-300);
        assert!(g.r > 0.0);
        assert!(approx_eq(g.r / 1e-300, 5.0, 1e-12));
        assert!(approx_eq(g.c, 0.6, 1e-12));
    }

    #[test]
    fn test_from_z_recovers_rotation() {
        for &(a, b) in &[
            (3.0, 4.0),
            (-4.0, 3.0),
            (0.0, 5.0),
            (2.0, 0.0),
            (1.0, -1.0),
            (0.0, 0.0),
        ] {
            let g = rotg(a, b);
            let (c, s) = Rotation::from_z(g.z);
            assert!(approx_eq(c, g.c, 1e-12), "c for ({a}, {b}): {c} vs {}", g.c);
            assert!(approx_eq(s, g.s, 1e-12), "s for ({a}, {b}): {s} vs {}", g.s);
        }
    }

    #[test]
    fn test_from_z_subnormal_cosine() {
        let (a, b) = (1e-310, 1.0);
        let g = rotg(a, b);
        assert!(g.c > 0.0 && g.c < f64::MIN_POSITIVE);
        assert_eq!(g.z, f64::INFINITY);

        let (c, s) = Rotation::from_z(g.z);
        assert_eq!((c, s), (0.0, 1.0));

        // The decoded rotation differs from the original only by the lost c.
        let mut x = [a];
        let mut y = [b];
        rot(&mut x, &mut y, c, s).unwrap();
        assert!(approx_eq(x[0], g.r, 1e-12));
        assert!(y[0].abs() <= 1e-300);
    }

    #[test]
    fn test_rot_identity() {
        let mut x = [1.0, -2.0, 3.0];
        let mut y = [4.0, 5.0, -6.0];
        rot(&mut x, &mut y, 1.0, 0.0).unwrap();
        assert_eq!(x, [1.0, -2.0, 3.0]);
        assert_eq!(y, [4.0, 5.0, -6.0]);
    }

    #[test]
    fn test_rot_quarter_turn() {
        let mut x = [1.0, 2.0];
        let mut y = [3.0, 4.0];
        rot(&mut x, &mut y, 0.0, 1.0).unwrap();
        assert_eq!(x, [3.0, 4.0]);
        assert_eq!(y, [-1.0, -2.0]);
    }

    #[test]
    fn test_rot_length_mismatch() {
        let mut x = [1.0, 2.0];
        let mut y = [3.0];
        assert!(rot(&mut x, &mut y, 0.6, 0.8).is_err());
        assert_eq!(x, [1.0, 2.0]);
        assert_eq!(y, [3.0]);
    }

    #[test]
    fn test_apply() {
        let g = rotg(6.0, 8.0);
        let mut x = [6.0, 1.0];
        let mut y = [8.0, 0.0];
        g.apply(&mut x, &mut y).unwrap();
        assert!(approx_eq(x[0], 10.0, 1e-12));
        assert!(approx_eq(y[0], 0.0, 1e-12));
        assert!(approx_eq(x[1], 0.6, 1e-12));
        assert!(approx_eq(y[1], -0.8, 1e-12));
    }

    #[test]
    fn test_into_array() {
        let g = rotg(3.0, 4.0);
        let arr: [f64; 4] = g.into();
        assert_eq!(arr, [g.r, g.z, g.c, g.s]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let g = rotg(-1.5, 2.0);
        let json = serde_json::to_string(&g).unwrap();
        let back: Rotation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
