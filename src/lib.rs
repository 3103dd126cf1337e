//! huffpress: lossless Huffman codec over a self-describing bitstream.
//!
//! One counting pass derives an optimal prefix code from the observed
//! byte frequencies; the code tree is persisted as a preorder bit
//! header behind a fixed magic number, and the data is re-encoded one
//! variable-length code at a time, terminated by a reserved
//! end-of-stream symbol. Decompression reverses the process and
//! recovers a bit-identical copy of the original.

pub mod code;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod header;
pub mod tree;

pub use crate::decode::decompress_stream;
pub use crate::encode::compress_stream;
pub use crate::error::CodecError;

use crate::freq::FreqTable;
use tracing::debug;

/// Compressed output container
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompressedBlock {
    pub original_size: usize,
    pub compressed_size: usize,
    pub data: Vec<u8>,
    pub ratio: f64,
    pub entropy_bits: f64,
}

/// Compress `data`, returning the encoded stream together with its
/// vital statistics.
pub fn compress(data: &[u8]) -> Result<CompressedBlock, CodecError> {
    let encoded = encode::compress(data)?;
    let ratio = if data.is_empty() {
        1.0
    } else {
        encoded.len() as f64 / data.len() as f64
    };
    debug!(
        original = data.len(),
        compressed = encoded.len(),
        ratio,
        "compressed block"
    );
    Ok(CompressedBlock {
        original_size: data.len(),
        compressed_size: encoded.len(),
        ratio,
        entropy_bits: FreqTable::from_bytes(data).entropy_bits(),
        data: encoded,
    })
}

/// Decompress a stream produced by [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let decoded = decode::decompress(data)?;
    debug!(
        compressed = data.len(),
        original = decoded.len(),
        "decompressed block"
    );
    Ok(decoded)
}
