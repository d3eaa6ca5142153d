//! # blockjpeg - Single-Block JPEG Encoding Pipeline
//!
//! blockjpeg implements the baseline JPEG encoding chain for one selected
//! 8x8 block, keeping every intermediate stage inspectable. It is the
//! codec core of an interactive teaching tool: the presentation layer
//! picks an image, a channel, a block and a quality factor, and renders
//! whatever stage it wants to explain.
//!
//! ## Pipeline
//!
//! Data flows strictly forward:
//!
//! image -> YCbCr samples -> 8x8 block -> DCT coefficients -> quantized
//! coefficients -> zigzag sequence -> RLE pairs -> Huffman codes -> bit
//! string
//!
//! Each stage is a pure function of its inputs; only the Huffman code
//! table depends on the whole RLE sequence of the current block
//! (statistics are block-local, not global to the image).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockjpeg::{Channel, Pipeline};
//!
//! let mut pipeline = Pipeline::from_rgb8(&pixels, width, height)?;
//! pipeline.set_channel(Channel::Y);
//! pipeline.select_block(2, 1);
//! pipeline.set_quality(50);
//!
//! let encoding = pipeline.encode_block();
//! println!("{} -> {}", encoding.quantized[0], encoding.bits);
//! ```
//!
//! ## Scope
//!
//! Only the forward/encode direction of a single block is implemented:
//! no multi-block entropy coding into a container format, no chroma
//! subsampling, no progressive or arithmetic coding, and nothing is
//! persisted to disk.

// Shared definitions
mod consts;
mod error;
mod types;

// Encoding pipeline, in stage order
mod color;
mod sample;
mod dct;
mod quant;
mod zigzag;
mod rle;
mod huffman;
mod pipeline;

// Display support for the presentation layer
pub mod adjust;
pub mod visual;

// Public API
pub use color::{convert, rgb8_to_ycc, rgb_to_ycc, ycc_to_rgb, SampleGrid, Ycc};
pub use consts::{DCTSIZE, DCTSIZE2, STD_CHROMA_QUANT, STD_LUMA_QUANT, ZIGZAG};
pub use dct::forward_dct_8x8;
pub use error::Error;
pub use huffman::{build_huffman, build_tree, code_table, CodeTable, HuffmanNode};
pub use pipeline::{BlockEncoding, Pipeline};
pub use quant::{quality_to_scale, quantize, quantize_block, QuantMatrix};
pub use rle::{rle_encode, rle_expand, RlePair};
pub use sample::{block_for_pixel, clamp_block_coord, sample_block};
pub use types::Channel;
pub use zigzag::{zigzag_order, zigzag_scan};

/// Result type for blockjpeg operations
pub type Result<T> = std::result::Result<T, Error>;
