//! Forward DCT (Discrete Cosine Transform)
//!
//! Reference scalar implementation of the type-II 2D DCT over one 8x8
//! block. Input samples stay in [0,255] (no -128 level shift) and the
//! output uses the 0.25-scaled separable normalization:
//!
//! ```text
//! F(u,v) = 0.25 * C(u) * C(v) * sum_xy f(x,y) cos((2x+1)u*pi/16) cos((2y+1)v*pi/16)
//! C(0) = 1/sqrt(2), C(k>0) = 1
//! ```
//!
//! The quantization base matrices and quality mapping are tuned for this
//! convention; do not mix it with level-shifted input.

use std::f32::consts::{PI, SQRT_2};

use crate::consts::{DCTSIZE, DCTSIZE2};

/// Forward 8x8 DCT
///
/// Takes a row-major block of samples in [0,255] and produces frequency
/// coefficients, `output[v * 8 + u]` with (0,0) the DC term.
#[must_use]
pub fn forward_dct_8x8(block: &[f32; DCTSIZE2]) -> [f32; DCTSIZE2] {
    let mut output = [0.0f32; DCTSIZE2];

    for v in 0..DCTSIZE {
        let cv = if v == 0 { 1.0 / SQRT_2 } else { 1.0 };

        for u in 0..DCTSIZE {
            let cu = if u == 0 { 1.0 / SQRT_2 } else { 1.0 };

            let mut sum = 0.0f32;
            for y in 0..DCTSIZE {
                let cos_y = ((2.0 * y as f32 + 1.0) * v as f32 * PI / 16.0).cos();
                for x in 0..DCTSIZE {
                    let cos_x = ((2.0 * x as f32 + 1.0) * u as f32 * PI / 16.0).cos();
                    sum += block[y * DCTSIZE + x] * cos_x * cos_y;
                }
            }

            output[v * DCTSIZE + u] = 0.25 * cu * cv * sum;
        }
    }

    output
}
