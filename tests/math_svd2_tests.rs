#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use isolens::internals::math::svd2::svd2;
use isolens::prelude::Mat2;

fn norm(v: [f64; 2]) -> f64 {
    (v[0] * v[0] + v[1] * v[1]).sqrt()
}

// ============================================================================
// Closed-Form SVD Tests
// ============================================================================

#[test]
fn test_svd2_identity() {
    let ([s0, s1], v) = svd2(&Mat2::<f64>::identity());
    assert_relative_eq!(s0, 1.0);
    assert_relative_eq!(s1, 1.0);
    assert_relative_eq!(v.m[0][0], 1.0);
    assert_relative_eq!(v.m[0][1], 0.0);
}

#[test]
fn test_svd2_diagonal() {
    let ([s0, s1], v) = svd2(&Mat2::<f64>::from_rows([[4.0, 0.0], [0.0, 1.0]]));
    assert_relative_eq!(s0, 4.0);
    assert_relative_eq!(s1, 1.0);
    assert_relative_eq!(v.m[0][0].abs(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_svd2_values_descending() {
    let ([s0, s1], _) = svd2(&Mat2::from_rows([[1.0, 0.0], [0.0, 5.0]]));
    assert!(s0 >= s1);
    assert_relative_eq!(s0, 5.0);
    assert_relative_eq!(s1, 1.0);
}

#[test]
fn test_svd2_v_is_proper_rotation() {
    let a = Mat2::from_rows([[2.0, 1.0], [0.5, -1.5]]);
    let (_, v) = svd2(&a);

    // Orthonormal columns.
    let vtv = v.transpose().mul(&v);
    assert_relative_eq!(vtv.m[0][0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(vtv.m[0][1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(vtv.m[1][1], 1.0, epsilon = 1e-12);

    // Proper rotation, not a reflection.
    assert_relative_eq!(v.determinant(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_svd2_right_vectors_map_to_singular_values() {
    // ||A · vᵢ|| equals the i-th singular value.
    let a = Mat2::from_rows([[0.0, -2.0], [1.0, 0.0]]);
    let ([s0, s1], v) = svd2(&a);

    let av0 = a.mul_vec([v.m[0][0], v.m[1][0]]);
    let av1 = a.mul_vec([v.m[0][1], v.m[1][1]]);
    assert_relative_eq!(norm(av0), s0, epsilon = 1e-12);
    assert_relative_eq!(norm(av1), s1, epsilon = 1e-12);
    assert_relative_eq!(s0, 2.0, epsilon = 1e-12);
    assert_relative_eq!(s1, 1.0, epsilon = 1e-12);
}

#[test]
fn test_svd2_symmetric_matrix() {
    // Eigenvalues of [[2,1],[1,2]] are 3 and 1; for a symmetric PSD matrix
    // they coincide with the singular values.
    let a = Mat2::from_rows([[2.0, 1.0], [1.0, 2.0]]);
    let ([s0, s1], v) = svd2(&a);
    assert_relative_eq!(s0, 3.0, epsilon = 1e-12);
    assert_relative_eq!(s1, 1.0, epsilon = 1e-12);

    // First singular direction is the (1,1) diagonal.
    let ratio = v.m[1][0] / v.m[0][0];
    assert_relative_eq!(ratio, 1.0, epsilon = 1e-12);
}

#[test]
fn test_svd2_rank_deficient() {
    let a = Mat2::from_rows([[1.0, 1.0], [1.0, 1.0]]);
    let ([s0, s1], _) = svd2(&a);
    assert_relative_eq!(s0, 2.0, epsilon = 1e-12);
    assert_relative_eq!(s1, 0.0, epsilon = 1e-9);
}
