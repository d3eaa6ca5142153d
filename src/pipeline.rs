//! Pipeline facade
//!
//! Owns the source image and its derived sample grid, tracks the current
//! selection (channel, block coordinate, quality), and runs the full
//! encoding chain for the selected block. Every intermediate stage result
//! is kept on the returned [`BlockEncoding`] so a presentation layer can
//! inspect any step. The cached encoding is dropped whenever the
//! selection changes; a stale encoding is never observable.

use imgref::{ImgRef, ImgVec};
use rgb::RGB;

use crate::color::{self, SampleGrid, Ycc};
use crate::consts::{DCTSIZE, DCTSIZE2};
use crate::dct::forward_dct_8x8;
use crate::error::{Error, Result};
use crate::huffman::{build_huffman, CodeTable};
use crate::quant::{quantize_block, QuantMatrix};
use crate::rle::{rle_encode, RlePair};
use crate::sample::{block_for_pixel, clamp_block_coord, sample_block};
use crate::types::Channel;
use crate::zigzag::zigzag_scan;

/// Every stage result for one encoded block
#[derive(Debug, Clone)]
pub struct BlockEncoding {
    /// Channel the block was sampled from
    pub channel: Channel,
    /// Block coordinate (clamped)
    pub block_x: usize,
    pub block_y: usize,
    /// Quality factor used for quantization
    pub quality: u8,
    /// 8x8 channel samples in [0,255], row-major
    pub samples: [f32; DCTSIZE2],
    /// Forward DCT coefficients
    pub dct: [f32; DCTSIZE2],
    /// Quality-scaled quantization matrix
    pub quant_matrix: QuantMatrix,
    /// Quantized coefficients
    pub quantized: [i16; DCTSIZE2],
    /// Quantized coefficients in zigzag order
    pub zigzag: [i16; DCTSIZE2],
    /// Run-length pairs, terminated by the end-of-block marker when
    /// trailing zeros exist
    pub rle: Vec<RlePair>,
    /// Huffman code table over the observed pairs
    pub codes: CodeTable,
    /// Final bit string for the block
    pub bits: String,
}

/// Single-block encoding pipeline over one source image
pub struct Pipeline {
    image: ImgVec<RGB<f32>>,
    grid: SampleGrid,
    channel: Channel,
    block_x: usize,
    block_y: usize,
    quality: u8,
    cached: Option<BlockEncoding>,
}

impl Pipeline {
    /// Create a pipeline for an RGB image with components in [0,1]
    ///
    /// Dimensions must be nonzero multiples of 8. The YCbCr sample grid
    /// is derived once here and recomputed only when the image changes.
    pub fn new(image: ImgVec<RGB<f32>>) -> Result<Self> {
        validate_dimensions(image.width(), image.height())?;
        let grid = color::convert(image.as_ref())?;

        Ok(Self {
            image,
            grid,
            channel: Channel::Y,
            block_x: 0,
            block_y: 0,
            quality: 50,
            cached: None,
        })
    }

    /// Create a pipeline from interleaved 8-bit RGB bytes
    pub fn from_rgb8(pixels: &[u8], width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;

        let expected = width * height * 3;
        if pixels.len() != expected {
            return Err(Error::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        let buf: Vec<RGB<f32>> = pixels
            .chunks_exact(3)
            .map(|c| RGB {
                r: c[0] as f32 / 255.0,
                g: c[1] as f32 / 255.0,
                b: c[2] as f32 / 255.0,
            })
            .collect();

        Self::new(ImgVec::new(buf, width, height))
    }

    /// Replace the source image, resetting the block selection
    pub fn set_image(&mut self, image: ImgVec<RGB<f32>>) -> Result<()> {
        validate_dimensions(image.width(), image.height())?;
        self.grid = color::convert(image.as_ref())?;
        self.image = image;
        self.block_x = 0;
        self.block_y = 0;
        self.cached = None;
        Ok(())
    }

    /// The source image
    #[must_use]
    pub fn image(&self) -> ImgRef<'_, RGB<f32>> {
        self.image.as_ref()
    }

    /// The derived YCbCr sample grid
    #[must_use]
    pub fn sample_grid(&self) -> ImgRef<'_, Ycc> {
        self.grid.as_ref()
    }

    /// Number of blocks per row
    #[must_use]
    pub fn blocks_wide(&self) -> usize {
        self.grid.width() / DCTSIZE
    }

    /// Number of block rows
    #[must_use]
    pub fn blocks_high(&self) -> usize {
        self.grid.height() / DCTSIZE
    }

    /// Currently selected channel
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Currently selected block coordinate
    #[must_use]
    pub fn block(&self) -> (usize, usize) {
        (self.block_x, self.block_y)
    }

    /// Current quality factor
    #[must_use]
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Switch the sampled channel
    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
        self.cached = None;
    }

    /// Select a block by block coordinate (clamped into range)
    pub fn select_block(&mut self, bx: usize, by: usize) {
        let (bx, by) = clamp_block_coord(self.grid.width(), self.grid.height(), bx, by);
        self.block_x = bx;
        self.block_y = by;
        self.cached = None;
    }

    /// Select the block containing a pixel position
    pub fn select_block_at_pixel(&mut self, px: usize, py: usize) {
        let (bx, by) = block_for_pixel(self.grid.width(), self.grid.height(), px, py);
        self.block_x = bx;
        self.block_y = by;
        self.cached = None;
    }

    /// Set the quality factor (clamped into [1,100])
    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality.clamp(1, 100);
        self.cached = None;
    }

    /// Encode the selected block, returning every stage result
    ///
    /// The encoding is cached until the selection changes.
    pub fn encode_block(&mut self) -> &BlockEncoding {
        let encoding = match self.cached.take() {
            Some(encoding) => encoding,
            None => self.compute_encoding(),
        };
        self.cached.insert(encoding)
    }

    fn compute_encoding(&self) -> BlockEncoding {
        let samples = sample_block(self.grid.as_ref(), self.channel, self.block_x, self.block_y);
        let dct = forward_dct_8x8(&samples);
        let quant_matrix = QuantMatrix::for_channel(self.channel, self.quality);
        let quantized = quantize_block(&dct, &quant_matrix);
        let zigzag = zigzag_scan(&quantized);
        let rle = rle_encode(&zigzag);
        let (codes, bits) = build_huffman(&rle);

        BlockEncoding {
            channel: self.channel,
            block_x: self.block_x,
            block_y: self.block_y,
            quality: self.quality,
            samples,
            dct,
            quant_matrix,
            quantized,
            zigzag,
            rle,
            codes,
            bits,
        }
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "image is empty",
        });
    }
    if width % DCTSIZE != 0 || height % DCTSIZE != 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be multiples of 8",
        });
    }
    Ok(())
}
