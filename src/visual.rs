//! Display-support math for the presentation layer
//!
//! Pure helpers behind the teaching panels: per-channel preview buffers,
//! min/max normalization of 8x8 matrices, the coefficient heatmap ramp
//! and its legend strip, and the zigzag traversal hue ramp. Rendering
//! itself stays in the presentation layer; everything here returns plain
//! pixel buffers or colors.

use imgref::{ImgRef, ImgVec};
use rgb::RGB;

use crate::color::Ycc;
use crate::consts::DCTSIZE2;

/// RGB preview buffers for the three channels of a sample grid
#[derive(Debug, Clone)]
pub struct ChannelPreviews {
    /// Luminance as grayscale
    pub y: ImgVec<RGB<f32>>,
    /// Cb mixed into the blue component over a luminance base
    pub cb: ImgVec<RGB<f32>>,
    /// Cr mixed into the red component over a luminance base
    pub cr: ImgVec<RGB<f32>>,
}

/// Build the per-channel preview images of a converted grid
#[must_use]
pub fn channel_previews(grid: ImgRef<'_, Ycc>) -> ChannelPreviews {
    let (width, height) = (grid.width(), grid.height());

    let mut y = Vec::with_capacity(width * height);
    let mut cb = Vec::with_capacity(width * height);
    let mut cr = Vec::with_capacity(width * height);

    for p in grid.pixels() {
        y.push(RGB { r: p.y, g: p.y, b: p.y });
        cb.push(RGB { r: p.y, g: p.y, b: p.cb });
        cr.push(RGB { r: p.cr, g: p.y, b: p.y });
    }

    ChannelPreviews {
        y: ImgVec::new(y, width, height),
        cb: ImgVec::new(cb, width, height),
        cr: ImgVec::new(cr, width, height),
    }
}

/// Normalize a matrix into [0,1] display intensities
///
/// Maps the minimum to 0 and the maximum to 1; a flat matrix maps to all
/// zeros.
#[must_use]
pub fn normalize_block(matrix: &[f32; DCTSIZE2]) -> [f32; DCTSIZE2] {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for &v in matrix {
        min = min.min(v);
        max = max.max(v);
    }

    let mut out = [0.0f32; DCTSIZE2];
    if max > min {
        let range = max - min;
        for (slot, &v) in out.iter_mut().zip(matrix) {
            *slot = ((v - min) / range).clamp(0.0, 1.0);
        }
    }
    out
}

#[inline]
fn lerp(a: RGB<f32>, b: RGB<f32>, t: f32) -> RGB<f32> {
    RGB {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
    }
}

const BLUE: RGB<f32> = RGB { r: 0.0, g: 0.0, b: 1.0 };
const CYAN: RGB<f32> = RGB { r: 0.0, g: 1.0, b: 1.0 };
const GREEN: RGB<f32> = RGB { r: 0.0, g: 1.0, b: 0.0 };
const YELLOW: RGB<f32> = RGB { r: 1.0, g: 1.0, b: 0.0 };
const RED: RGB<f32> = RGB { r: 1.0, g: 0.0, b: 0.0 };

/// Map a normalized intensity to the coefficient heatmap ramp
///
/// Piecewise-linear blue -> cyan -> green -> yellow -> red over [0,1].
#[must_use]
pub fn heatmap_color(t: f32) -> RGB<f32> {
    let t = t.clamp(0.0, 1.0);

    if t < 0.25 {
        lerp(BLUE, CYAN, t / 0.25)
    } else if t < 0.5 {
        lerp(CYAN, GREEN, (t - 0.25) / 0.25)
    } else if t < 0.75 {
        lerp(GREEN, YELLOW, (t - 0.5) / 0.25)
    } else {
        lerp(YELLOW, RED, (t - 0.75) / 0.25)
    }
}

/// Vertical heatmap legend strip, maximum (red) in the top row
#[must_use]
pub fn heatmap_legend(width: usize, height: usize) -> ImgVec<RGB<f32>> {
    let mut pixels = Vec::with_capacity(width * height);
    for row in 0..height {
        let t = if height > 1 {
            1.0 - row as f32 / (height - 1) as f32
        } else {
            1.0
        };
        let color = heatmap_color(t);
        pixels.extend(std::iter::repeat(color).take(width));
    }
    ImgVec::new(pixels, width, height)
}

/// Distinct color for a zigzag traversal position
///
/// A hue ramp over the 64 positions: hue = i/63 at full saturation and
/// value 0.6, so neighbors in traversal order get adjacent hues.
#[must_use]
pub fn zigzag_position_color(position: usize) -> RGB<f32> {
    let hue = position.min(DCTSIZE2 - 1) as f32 / (DCTSIZE2 - 1) as f32;
    hsv_to_rgb(hue, 1.0, 0.6)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> RGB<f32> {
    let h6 = (h.clamp(0.0, 1.0) * 6.0).min(5.999_999_5);
    let sector = h6 as usize;
    let f = h6 - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => RGB { r: v, g: t, b: p },
        1 => RGB { r: q, g: v, b: p },
        2 => RGB { r: p, g: v, b: t },
        3 => RGB { r: p, g: q, b: v },
        4 => RGB { r: t, g: p, b: v },
        _ => RGB { r: v, g: p, b: q },
    }
}
