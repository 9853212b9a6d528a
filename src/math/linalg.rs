//! Linear algebra backend bridge for the reference-metric path.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge from generic `Float` types to
//! the nalgebra backend, used for the once-per-event decomposition of the
//! averaged reference metric.
//!
//! ## Design notes
//!
//! * The reference-metric square root drives the corrective affine map for
//!   the whole frame, so this path favors nalgebra's robust SVD over the
//!   closed-form routine used in the per-point hot loop (`math::svd2`).
//! * Generic over `SvdLinalg` types (f32 and f64) which delegate to
//!   nalgebra with concrete precision, mirroring the split between generic
//!   algorithm code and a concrete backend.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mat2::Mat2;

// ============================================================================
// SvdLinalg Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait SvdLinalg: Float + 'static {
    /// Singular value decomposition of a 2×2 matrix, returning the singular
    /// values in descending order and the right singular vectors as columns.
    fn svd2(m: &Mat2<Self>) -> ([Self; 2], Mat2<Self>);
}

impl SvdLinalg for f64 {
    #[inline]
    fn svd2(m: &Mat2<Self>) -> ([Self; 2], Mat2<Self>) {
        nalgebra_backend::svd2_f64(m)
    }
}

impl SvdLinalg for f32 {
    #[inline]
    fn svd2(m: &Mat2<Self>) -> ([Self; 2], Mat2<Self>) {
        nalgebra_backend::svd2_f32(m)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based decompositions.
pub mod nalgebra_backend {
    use super::Mat2;
    use nalgebra::Matrix2;

    /// SVD of a 2×2 matrix using f64 precision.
    pub fn svd2_f64(m: &Mat2<f64>) -> ([f64; 2], Mat2<f64>) {
        let matrix = Matrix2::new(m.m[0][0], m.m[0][1], m.m[1][0], m.m[1][1]);
        let svd = matrix.svd(false, true);
        let values = [svd.singular_values[0], svd.singular_values[1]];

        // v_t is always present: requested above.
        let v = match svd.v_t {
            Some(v_t) => v_t.transpose(),
            None => Matrix2::identity(),
        };
        (
            values,
            Mat2::from_rows([[v[(0, 0)], v[(0, 1)]], [v[(1, 0)], v[(1, 1)]]]),
        )
    }

    /// SVD of a 2×2 matrix using f32 precision.
    pub fn svd2_f32(m: &Mat2<f32>) -> ([f32; 2], Mat2<f32>) {
        let matrix = Matrix2::new(m.m[0][0], m.m[0][1], m.m[1][0], m.m[1][1]);
        let svd = matrix.svd(false, true);
        let values = [svd.singular_values[0], svd.singular_values[1]];

        let v = match svd.v_t {
            Some(v_t) => v_t.transpose(),
            None => Matrix2::identity(),
        };
        (
            values,
            Mat2::from_rows([[v[(0, 0)], v[(0, 1)]], [v[(1, 0)], v[(1, 1)]]]),
        )
    }
}
