//! Color space conversion
//!
//! Converts RGB pixel grids (components in [0,1]) to per-pixel YCbCr
//! triples. Both chroma components carry a +0.5 offset so that every
//! channel lives in [0,1] and can be sampled to [0,255] intensities
//! without further shifting.

use imgref::{ImgRef, ImgVec};
use rgb::{RGB, RGB8};

use crate::error::{Error, Result};
use crate::types::Channel;

/// One converted pixel: Y, Cb, Cr, each in [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ycc {
    pub y: f32,
    pub cb: f32,
    pub cr: f32,
}

impl Ycc {
    /// Value of the given channel
    #[inline]
    #[must_use]
    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Y => self.y,
            Channel::Cb => self.cb,
            Channel::Cr => self.cr,
        }
    }
}

/// Per-pixel YCbCr samples for a whole image
pub type SampleGrid = ImgVec<Ycc>;

/// Convert one RGB pixel (components in [0,1]) to YCbCr
///
/// The conversion formula is:
/// - Y  =  0.299 * R + 0.587 * G + 0.114 * B
/// - Cb = -0.1687 * R - 0.3313 * G + 0.5 * B + 0.5
/// - Cr =  0.5 * R - 0.4187 * G - 0.0813 * B + 0.5
///
/// Outputs are clamped into [0,1].
#[inline]
pub fn rgb_to_ycc(px: RGB<f32>) -> Ycc {
    let y = 0.299 * px.r + 0.587 * px.g + 0.114 * px.b;
    let cb = -0.1687 * px.r - 0.3313 * px.g + 0.5 * px.b + 0.5;
    let cr = 0.5 * px.r - 0.4187 * px.g - 0.0813 * px.b + 0.5;

    Ycc {
        y: y.clamp(0.0, 1.0),
        cb: cb.clamp(0.0, 1.0),
        cr: cr.clamp(0.0, 1.0),
    }
}

/// Convert one YCbCr pixel back to RGB (for verification and previews)
#[inline]
pub fn ycc_to_rgb(p: Ycc) -> RGB<f32> {
    let cb = p.cb - 0.5;
    let cr = p.cr - 0.5;

    let r = p.y + 1.402 * cr;
    let g = p.y - 0.344136 * cb - 0.714136 * cr;
    let b = p.y + 1.772 * cb;

    RGB {
        r: r.clamp(0.0, 1.0),
        g: g.clamp(0.0, 1.0),
        b: b.clamp(0.0, 1.0),
    }
}

/// Convert one 8-bit RGB pixel to YCbCr
#[inline]
pub fn rgb8_to_ycc(px: RGB8) -> Ycc {
    rgb_to_ycc(RGB {
        r: px.r as f32 / 255.0,
        g: px.g as f32 / 255.0,
        b: px.b as f32 / 255.0,
    })
}

/// Convert an RGB image to a grid of YCbCr samples
///
/// Fails on an empty image; otherwise side-effect-free. The grid is
/// recomputed only when the source image changes.
pub fn convert(image: ImgRef<'_, RGB<f32>>) -> Result<SampleGrid> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            reason: "image is empty",
        });
    }

    let samples: Vec<Ycc> = image.pixels().map(rgb_to_ycc).collect();
    Ok(ImgVec::new(samples, image.width(), image.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgref::Img;

    #[test]
    fn test_known_colors() {
        let black = rgb_to_ycc(RGB { r: 0.0, g: 0.0, b: 0.0 });
        assert_eq!(black.y, 0.0);
        assert!((black.cb - 0.5).abs() < 1e-6);
        assert!((black.cr - 0.5).abs() < 1e-6);

        let white = rgb_to_ycc(RGB { r: 1.0, g: 1.0, b: 1.0 });
        assert!((white.y - 1.0).abs() < 1e-6);
        assert!((white.cb - 0.5).abs() < 1e-3);
        assert!((white.cr - 0.5).abs() < 1e-3);

        // Pure blue drives Cb to its maximum
        let blue = rgb_to_ycc(RGB { r: 0.0, g: 0.0, b: 1.0 });
        assert!((blue.y - 0.114).abs() < 1e-6);
        assert!(blue.cb > 0.9);
    }

    #[test]
    fn test_components_stay_in_range() {
        // Sweep a coarse RGB lattice
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let px = RGB {
                        r: r as f32 / 4.0,
                        g: g as f32 / 4.0,
                        b: b as f32 / 4.0,
                    };
                    let p = rgb_to_ycc(px);
                    for v in [p.y, p.cb, p.cr] {
                        assert!((0.0..=1.0).contains(&v), "{:?} -> {}", px, v);
                    }

                    // Outputs are the clamped linear formulas
                    let y = 0.299 * px.r + 0.587 * px.g + 0.114 * px.b;
                    let cb = -0.1687 * px.r - 0.3313 * px.g + 0.5 * px.b + 0.5;
                    let cr = 0.5 * px.r - 0.4187 * px.g - 0.0813 * px.b + 0.5;
                    assert!((p.y - y.clamp(0.0, 1.0)).abs() < 1e-6);
                    assert!((p.cb - cb.clamp(0.0, 1.0)).abs() < 1e-6);
                    assert!((p.cr - cr.clamp(0.0, 1.0)).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_rgb_ycc_roundtrip() {
        let colors = [
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
        ];

        for (r, g, b) in colors {
            let p = rgb_to_ycc(RGB { r, g, b });
            let back = ycc_to_rgb(p);

            // Allow small error from the truncated forward coefficients
            assert!((back.r - r).abs() < 0.01, "R: {} vs {}", r, back.r);
            assert!((back.g - g).abs() < 0.01, "G: {} vs {}", g, back.g);
            assert!((back.b - b).abs() < 0.01, "B: {} vs {}", b, back.b);
        }
    }

    #[test]
    fn test_convert_grid() {
        let pixels = vec![RGB { r: 0.5, g: 0.5, b: 0.5 }; 16 * 8];
        let image = Img::new(pixels, 16, 8);
        let grid = convert(image.as_ref()).unwrap();

        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 8);
        for p in grid.pixels() {
            assert!((p.cb - 0.5).abs() < 1e-3);
            assert!((p.cr - 0.5).abs() < 1e-3);
        }
    }
}
