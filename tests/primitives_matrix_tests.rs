#![cfg(feature = "dev")]

//! Unit tests for the 3x3 matrix primitive.
//!
//! These tests verify determinant evaluation, cofactor inversion, and
//! matrix-vector products on hand-checked systems, since every quadratic
//! fit in the crate funnels through this type.
//!
//! ## Test Organization
//!
//! 1. Determinant - identity, diagonal, and singular cases
//! 2. Inversion - round-trips and known inverses
//! 3. Matrix-vector products - identity and solved systems

use approx::assert_relative_eq;
use ntastat::internals::primitives::matrix::Matrix3;

// ============================================================================
// Determinant
// ============================================================================

/// Test the determinant of the identity matrix.
#[test]
fn test_determinant_identity() {
    let m = Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
}

/// Test the determinant of a diagonal matrix.
///
/// Verifies that the determinant of diag(2, 3, 4) is the product of the
/// diagonal entries.
#[test]
fn test_determinant_diagonal() {
    let m = Matrix3::new([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
    assert_relative_eq!(m.determinant(), 24.0, epsilon = 1e-12);
}

/// Test the determinant of a hand-expanded dense matrix.
///
/// Verifies cofactor expansion along the first row:
/// 4*(6*3 - 1*5) - 7*(3*3 - 1*2) + 2*(3*5 - 6*2) = 52 - 49 + 6 = 9.
#[test]
fn test_determinant_dense() {
    let m = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    assert_relative_eq!(m.determinant(), 9.0, epsilon = 1e-12);
}

/// Test that a matrix with two equal rows has a zero determinant.
#[test]
fn test_determinant_singular_repeated_row() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_relative_eq!(m.determinant(), 0.0, epsilon = 1e-12);
}

/// Test that a matrix with a scaled row has a zero determinant.
#[test]
fn test_determinant_singular_scaled_row() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [7.0, 8.0, 10.0]]);
    assert_relative_eq!(m.determinant(), 0.0, epsilon = 1e-12);
}

/// Test the determinant in f32 precision.
#[test]
fn test_determinant_f32() {
    let m = Matrix3::new([[4.0f32, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    assert_relative_eq!(m.determinant(), 9.0f32, epsilon = 1e-4);
}

// ============================================================================
// Inversion
// ============================================================================

/// Test that the inverse of the identity is the identity.
#[test]
fn test_inverse_identity() {
    let m = Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let inv = m.inverse(m.determinant());
    let v = inv.mul_vec([5.0, -2.0, 7.0]);
    assert_relative_eq!(v[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(v[1], -2.0, epsilon = 1e-12);
    assert_relative_eq!(v[2], 7.0, epsilon = 1e-12);
}

/// Test the inverse of a diagonal matrix.
///
/// Verifies that diag(2, 4, 8) inverts to diag(0.5, 0.25, 0.125) by
/// applying the inverse to the standard basis directions.
#[test]
fn test_inverse_diagonal() {
    let m = Matrix3::new([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    let inv = m.inverse(m.determinant());

    let v = inv.mul_vec([1.0, 1.0, 1.0]);
    assert_relative_eq!(v[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(v[1], 0.25, epsilon = 1e-12);
    assert_relative_eq!(v[2], 0.125, epsilon = 1e-12);
}

/// Test that applying a matrix and then its inverse recovers the input.
#[test]
fn test_inverse_round_trip() {
    let m = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    let det = m.determinant();
    let inv = m.inverse(det);

    let original = [1.0, 2.0, 3.0];
    let forward = m.mul_vec(original);
    let recovered = inv.mul_vec(forward);

    for i in 0..3 {
        assert_relative_eq!(recovered[i], original[i], epsilon = 1e-10);
    }
}

// ============================================================================
// Matrix-Vector Products
// ============================================================================

/// Test a dense matrix-vector product against hand arithmetic.
///
/// Verifies [1 2 3; 4 5 6; 7 8 10] * [1, 1, 1] = [6, 15, 25].
#[test]
fn test_mul_vec_dense() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    let v = m.mul_vec([1.0, 1.0, 1.0]);
    assert_relative_eq!(v[0], 6.0, epsilon = 1e-12);
    assert_relative_eq!(v[1], 15.0, epsilon = 1e-12);
    assert_relative_eq!(v[2], 25.0, epsilon = 1e-12);
}

/// Test solving a 3x3 linear system through inverse and mul_vec.
///
/// Verifies that x = A^-1 * b recovers the known solution [1, 1, 1] of
/// A = [1 2 3; 4 5 6; 7 8 10], b = [6, 15, 25] (det(A) = -3).
#[test]
fn test_solve_known_system() {
    let a = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    let det = a.determinant();
    assert_relative_eq!(det, -3.0, epsilon = 1e-12);

    let x = a.inverse(det).mul_vec([6.0, 15.0, 25.0]);
    for component in x {
        assert_relative_eq!(component, 1.0, epsilon = 1e-10);
    }
}

/// Test that mul_vec on a zero vector returns zero.
#[test]
fn test_mul_vec_zero_vector() {
    let m = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    let v = m.mul_vec([0.0, 0.0, 0.0]);
    assert_eq!(v, [0.0, 0.0, 0.0]);
}
