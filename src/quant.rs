//! Quantization
//!
//! Scales the standard base matrices by a quality factor and divides DCT
//! coefficients by the scaled entries. Entries are clamped into [1,255],
//! so the divisor is never zero.

use crate::consts::{DCTSIZE2, STD_CHROMA_QUANT, STD_LUMA_QUANT};
use crate::error::{Error, Result};
use crate::types::Channel;

/// Map a JPEG quality factor (1-100) to the base-matrix scale percentage
///
/// Quality 50 is the neutral point: `quality_to_scale(50) == 100`, leaving
/// the base matrix unchanged.
#[inline]
#[must_use]
pub fn quality_to_scale(quality: u8) -> u32 {
    let quality = quality.clamp(1, 100) as u32;
    if quality < 50 {
        5000 / quality
    } else {
        200 - 2 * quality
    }
}

/// Quantization matrix for one channel at one quality
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantMatrix {
    /// Divisors in natural (row-major) order, each in [1,255]
    pub values: [u16; DCTSIZE2],
}

impl QuantMatrix {
    /// Build a matrix from explicit divisors, rejecting zero entries
    pub fn from_values(values: [u16; DCTSIZE2]) -> Result<Self> {
        for (index, &v) in values.iter().enumerate() {
            if v == 0 {
                return Err(Error::DegenerateQuantMatrix { index });
            }
        }
        Ok(Self { values })
    }

    /// Standard luminance matrix at the given quality
    #[must_use]
    pub fn luma(quality: u8) -> Self {
        Self::from_base(&STD_LUMA_QUANT, quality)
    }

    /// Standard chrominance matrix at the given quality
    #[must_use]
    pub fn chroma(quality: u8) -> Self {
        Self::from_base(&STD_CHROMA_QUANT, quality)
    }

    /// Matrix for the given channel: Y uses the luminance base table,
    /// Cb and Cr both use the chrominance base table.
    #[must_use]
    pub fn for_channel(channel: Channel, quality: u8) -> Self {
        if channel.is_luma() {
            Self::luma(quality)
        } else {
            Self::chroma(quality)
        }
    }

    /// Scale a base table by the quality factor
    fn from_base(base: &[u16; DCTSIZE2], quality: u8) -> Self {
        let scale = quality_to_scale(quality);

        let mut values = [0u16; DCTSIZE2];
        for i in 0..DCTSIZE2 {
            let v = (base[i] as u32 * scale + 50) / 100;
            values[i] = v.clamp(1, 255) as u16;
        }

        Self { values }
    }
}

/// Quantize a block of DCT coefficients
///
/// Each coefficient is divided by the matching matrix entry and rounded
/// to the nearest integer.
#[must_use]
pub fn quantize_block(dct: &[f32; DCTSIZE2], matrix: &QuantMatrix) -> [i16; DCTSIZE2] {
    let mut output = [0i16; DCTSIZE2];
    for i in 0..DCTSIZE2 {
        output[i] = (dct[i] / matrix.values[i] as f32).round() as i16;
    }
    output
}

/// Quantize DCT coefficients for a channel at the given quality
#[must_use]
pub fn quantize(dct: &[f32; DCTSIZE2], channel: Channel, quality: u8) -> [i16; DCTSIZE2] {
    quantize_block(dct, &QuantMatrix::for_channel(channel, quality))
}
