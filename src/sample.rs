//! Block sampling
//!
//! Extracts the 8x8 sample window for one channel at a block coordinate.
//! Samples are the grid's [0,1] channel values scaled to [0,255]; the DCT
//! stage expects exactly this range (no level shift).

use imgref::ImgRef;

use crate::color::Ycc;
use crate::consts::{DCTSIZE, DCTSIZE2};
use crate::types::Channel;

/// Clamp a block coordinate into the grid's valid block range
#[inline]
#[must_use]
pub fn clamp_block_coord(
    width: usize,
    height: usize,
    bx: usize,
    by: usize,
) -> (usize, usize) {
    let max_bx = (width / DCTSIZE).saturating_sub(1);
    let max_by = (height / DCTSIZE).saturating_sub(1);
    (bx.min(max_bx), by.min(max_by))
}

/// Map a pixel position to the block containing it
///
/// Integer division by 8 with the same clamp as [`clamp_block_coord`], so
/// any pixel inside the image resolves to a valid block.
#[inline]
#[must_use]
pub fn block_for_pixel(width: usize, height: usize, px: usize, py: usize) -> (usize, usize) {
    clamp_block_coord(width, height, px / DCTSIZE, py / DCTSIZE)
}

/// Extract the 8x8 sample block for one channel at a block coordinate
///
/// Returns a row-major `[f32; 64]` with `sample[y * 8 + x]` taken from
/// grid position `(bx*8 + x, by*8 + y)`, scaled to [0,255]. Out-of-range
/// block coordinates are clamped, never rejected.
#[must_use]
pub fn sample_block(
    grid: ImgRef<'_, Ycc>,
    channel: Channel,
    bx: usize,
    by: usize,
) -> [f32; DCTSIZE2] {
    let (bx, by) = clamp_block_coord(grid.width(), grid.height(), bx, by);
    let window = grid.sub_image(bx * DCTSIZE, by * DCTSIZE, DCTSIZE, DCTSIZE);

    let mut block = [0.0f32; DCTSIZE2];
    for (i, p) in window.pixels().enumerate() {
        block[i] = p.channel(channel) * 255.0;
    }
    block
}
