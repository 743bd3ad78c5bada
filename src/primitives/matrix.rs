//! 3x3 matrix primitives for the quadratic normal equations.
//!
//! This module provides the minimal dense linear algebra needed to solve the
//! degree-2 least-squares system: determinant, adjugate-based inverse, and
//! matrix-vector product. No validation happens here; singularity handling
//! is the caller's concern.

// External dependencies
use num_traits::Float;

// Row-major 3x3 matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3<T> {
    pub m: [[T; 3]; 3],
}

impl<T: Float> Matrix3<T> {
    #[inline]
    pub fn new(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    // Determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    // Inverse via the adjugate over a caller-supplied determinant.
    //
    // The determinant is taken as a parameter so the quadratic fit can test
    // it for singularity once and reuse it here without recomputation.
    // Undefined for `det == 0`; callers must check first.
    #[inline]
    pub fn inverse(&self, det: T) -> Self {
        let m = &self.m;
        let adj = [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ];

        let mut out = [[T::zero(); 3]; 3];
        for (row_out, row_adj) in out.iter_mut().zip(adj.iter()) {
            for (v, &a) in row_out.iter_mut().zip(row_adj.iter()) {
                *v = a / det;
            }
        }
        Self { m: out }
    }

    // Matrix-vector product `self * v`.
    #[inline]
    pub fn mul_vec(&self, v: [T; 3]) -> [T; 3] {
        let m = &self.m;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}
