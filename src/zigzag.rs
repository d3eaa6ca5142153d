//! Zigzag scan
//!
//! Linearizes a quantized 8x8 matrix into a 64-element sequence in the
//! fixed diagonal order, grouping low-frequency coefficients first. The
//! order is the same for every block; [`crate::consts::ZIGZAG`] holds it
//! as natural-order indices and [`zigzag_order`] derives the same walk as
//! (x, y) positions for display purposes.

use crate::consts::{DCTSIZE, DCTSIZE2, ZIGZAG};

/// The zigzag traversal as (x, y) grid positions
///
/// Starts at (0,0), alternates upward-right and downward-left diagonal
/// runs reflecting off the matrix edges, and ends at (7,7). Each of the
/// 64 positions is visited exactly once.
#[must_use]
pub fn zigzag_order() -> [(usize, usize); DCTSIZE2] {
    let mut order = [(0usize, 0usize); DCTSIZE2];
    let (mut x, mut y) = (0usize, 0usize);
    let mut going_up = true;

    for slot in order.iter_mut() {
        *slot = (x, y);

        if going_up {
            if y == 0 || x == DCTSIZE - 1 {
                going_up = false;
                if x == DCTSIZE - 1 {
                    y += 1;
                } else {
                    x += 1;
                }
            } else {
                x += 1;
                y -= 1;
            }
        } else if x == 0 || y == DCTSIZE - 1 {
            going_up = true;
            if y == DCTSIZE - 1 {
                x += 1;
            } else {
                y += 1;
            }
        } else {
            x -= 1;
            y += 1;
        }
    }

    order
}

/// Reorder a row-major quantized matrix into zigzag sequence order
///
/// `sequence[i] = matrix[ZIGZAG[i]]`; a pure reordering.
#[must_use]
pub fn zigzag_scan(matrix: &[i16; DCTSIZE2]) -> [i16; DCTSIZE2] {
    let mut sequence = [0i16; DCTSIZE2];
    for (i, slot) in sequence.iter_mut().enumerate() {
        *slot = matrix[ZIGZAG[i]];
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_a_permutation() {
        let order = zigzag_order();
        let mut seen = [false; DCTSIZE2];

        for (x, y) in order {
            assert!(x < DCTSIZE && y < DCTSIZE);
            let idx = y * DCTSIZE + x;
            assert!(!seen[idx], "position ({},{}) visited twice", x, y);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn test_order_endpoints_and_prefix() {
        let order = zigzag_order();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[1], (1, 0));
        assert_eq!(order[2], (0, 1));
        assert_eq!(order[3], (0, 2));
        assert_eq!(order[4], (1, 1));
        assert_eq!(order[5], (2, 0));
        assert_eq!(order[63], (7, 7));
    }

    #[test]
    fn test_order_matches_table() {
        let order = zigzag_order();
        for (i, (x, y)) in order.into_iter().enumerate() {
            assert_eq!(y * DCTSIZE + x, ZIGZAG[i], "mismatch at zigzag position {}", i);
        }
    }

    #[test]
    fn test_order_is_stable_across_calls() {
        assert_eq!(zigzag_order(), zigzag_order());
    }

    #[test]
    fn test_scan_reorders() {
        let mut matrix = [0i16; DCTSIZE2];
        for (i, v) in matrix.iter_mut().enumerate() {
            *v = i as i16;
        }

        let sequence = zigzag_scan(&matrix);
        assert_eq!(sequence[0], 0);
        assert_eq!(sequence[1], 1); // (1,0)
        assert_eq!(sequence[2], 8); // (0,1)
        assert_eq!(sequence[3], 16); // (0,2)
        assert_eq!(sequence[63], 63);

        // Permutation: every value appears once
        let mut sorted = sequence;
        sorted.sort_unstable();
        for (i, v) in sorted.into_iter().enumerate() {
            assert_eq!(v, i as i16);
        }
    }
}
