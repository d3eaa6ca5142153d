//! Image adjustment operations
//!
//! Per-pixel adjustments the tool offers on the source image before it
//! enters the pipeline: brightness, contrast, saturation, grayscale and
//! inversion. Each operation takes an immutable image and returns a new
//! buffer; components are clamped into [0,1].

use imgref::{ImgRef, ImgVec};
use rgb::RGB;

fn map_pixels(
    image: ImgRef<'_, RGB<f32>>,
    f: impl Fn(RGB<f32>) -> RGB<f32>,
) -> ImgVec<RGB<f32>> {
    let pixels: Vec<RGB<f32>> = image.pixels().map(f).collect();
    ImgVec::new(pixels, image.width(), image.height())
}

#[inline]
fn luma(px: RGB<f32>) -> f32 {
    0.299 * px.r + 0.587 * px.g + 0.114 * px.b
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Scale all components by a brightness factor
#[must_use]
pub fn brightness(image: ImgRef<'_, RGB<f32>>, factor: f32) -> ImgVec<RGB<f32>> {
    map_pixels(image, |px| RGB {
        r: (px.r * factor).clamp(0.0, 1.0),
        g: (px.g * factor).clamp(0.0, 1.0),
        b: (px.b * factor).clamp(0.0, 1.0),
    })
}

/// Adjust contrast around mid-gray
///
/// `contrast` is in (-259, 259), 0 leaving the image unchanged; the
/// scale factor is `259(c + 1) / (259 - c)`.
#[must_use]
pub fn contrast(image: ImgRef<'_, RGB<f32>>, contrast: f32) -> ImgVec<RGB<f32>> {
    let factor = (259.0 * (contrast + 1.0)) / (259.0 - contrast);
    map_pixels(image, |px| RGB {
        r: (factor * (px.r - 0.5) + 0.5).clamp(0.0, 1.0),
        g: (factor * (px.g - 0.5) + 0.5).clamp(0.0, 1.0),
        b: (factor * (px.b - 0.5) + 0.5).clamp(0.0, 1.0),
    })
}

/// Blend each pixel between its grayscale value and itself
///
/// Saturation 0 yields grayscale, 1 leaves the image unchanged, values
/// above 1 oversaturate.
#[must_use]
pub fn saturation(image: ImgRef<'_, RGB<f32>>, saturation: f32) -> ImgVec<RGB<f32>> {
    map_pixels(image, |px| {
        let gray = luma(px);
        RGB {
            r: mix(gray, px.r, saturation).clamp(0.0, 1.0),
            g: mix(gray, px.g, saturation).clamp(0.0, 1.0),
            b: mix(gray, px.b, saturation).clamp(0.0, 1.0),
        }
    })
}

/// Replace each pixel with its grayscale value
#[must_use]
pub fn grayscale(image: ImgRef<'_, RGB<f32>>) -> ImgVec<RGB<f32>> {
    map_pixels(image, |px| {
        let gray = luma(px);
        RGB { r: gray, g: gray, b: gray }
    })
}

/// Invert all components
#[must_use]
pub fn invert(image: ImgRef<'_, RGB<f32>>) -> ImgVec<RGB<f32>> {
    map_pixels(image, |px| RGB {
        r: 1.0 - px.r,
        g: 1.0 - px.g,
        b: 1.0 - px.b,
    })
}
