//! Fixed-size 2×2 matrix value type.
//!
//! ## Purpose
//!
//! Every tensor in this engine is exactly 2×2, so instead of a general dense
//! matrix abstraction this module provides a dedicated [`Mat2`] value type
//! with closed-form operations. This removes runtime shape checks entirely
//! and keeps the per-point hot loop allocation-free.
//!
//! ## Design notes
//!
//! * **Row-major**: `m[row][col]`, matching the nested-array layout of the
//!   input contract.
//! * **Copy semantics**: `Mat2` is a small `Copy` value; operations return
//!   new values rather than mutating in place.
//! * **Closed-form inverse**: the 2×2 adjugate formula; a zero or non-finite
//!   determinant yields `None` rather than an unchecked division.
//!
//! ## Non-goals
//!
//! * This module does not perform decompositions (see `math::svd2` and
//!   `math::linalg`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Mat2
// ============================================================================

/// A 2×2 real matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2<T> {
    /// Entries as `m[row][col]`.
    pub m: [[T; 2]; 2],
}

impl<T: Float> Mat2<T> {
    /// Construct from row-major nested arrays.
    #[inline]
    pub fn from_rows(rows: [[T; 2]; 2]) -> Self {
        Self { m: rows }
    }

    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self {
            m: [[T::zero(); 2]; 2],
        }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: [[T::one(), T::zero()], [T::zero(), T::one()]],
        }
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0]],
                [self.m[0][1], self.m[1][1]],
            ],
        }
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Closed-form inverse via the adjugate formula.
    ///
    /// Returns `None` if the determinant is zero or non-finite.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            return None;
        }
        let inv_det = T::one() / det;
        Some(Self {
            m: [
                [self.m[1][1] * inv_det, -self.m[0][1] * inv_det],
                [-self.m[1][0] * inv_det, self.m[0][0] * inv_det],
            ],
        })
    }

    /// Matrix product `self · other`.
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self {
            m: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
        }
    }

    /// Matrix-vector product `self · v`.
    #[inline]
    pub fn mul_vec(&self, v: [T; 2]) -> [T; 2] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1],
            self.m[1][0] * v[0] + self.m[1][1] * v[1],
        ]
    }

    /// Uniform scaling `s · self`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self {
            m: [
                [self.m[0][0] * s, self.m[0][1] * s],
                [self.m[1][0] * s, self.m[1][1] * s],
            ],
        }
    }

    /// Accumulate `self + w · other`, the building block of kernel-weighted
    /// tensor averaging.
    #[inline]
    pub fn add_scaled(&self, other: &Self, w: T) -> Self {
        Self {
            m: [
                [
                    self.m[0][0] + w * other.m[0][0],
                    self.m[0][1] + w * other.m[0][1],
                ],
                [
                    self.m[1][0] + w * other.m[1][0],
                    self.m[1][1] + w * other.m[1][1],
                ],
            ],
        }
    }

    /// Scale the columns by `d0` and `d1`, i.e. `self · diag(d0, d1)`.
    #[inline]
    pub fn mul_diag(&self, d0: T, d1: T) -> Self {
        Self {
            m: [
                [self.m[0][0] * d0, self.m[0][1] * d1],
                [self.m[1][0] * d0, self.m[1][1] * d1],
            ],
        }
    }

    /// Whether all entries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|row| row.iter().all(|v| v.is_finite()))
    }

    /// Whether the matrix is symmetric within `tol` on the off-diagonal.
    #[inline]
    pub fn is_symmetric(&self, tol: T) -> bool {
        (self.m[0][1] - self.m[1][0]).abs() <= tol
    }
}
