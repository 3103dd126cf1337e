//! Stream decoding: walking the rebuilt tree bit by bit

use crate::config::EOF_SYMBOL;
use crate::error::CodecError;
use crate::header;
use crate::tree::Node;
use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{self, Cursor, Read, Write};

/// Decompress a complete stream into a fresh buffer.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::new();
    decompress_stream(Cursor::new(data), &mut output)?;
    Ok(output)
}

/// Decompress `input` into `output` in a single pass: validate the
/// format tag, rebuild the tree from the header, then follow payload
/// bits from the root until the sentinel leaf terminates the stream.
pub fn decompress_stream<R: Read, W: Write>(input: R, mut output: W) -> Result<(), CodecError> {
    let mut reader = BitReader::endian(input, BigEndian);
    header::check_magic(&mut reader)?;
    let root = header::read_tree(&mut reader)?;
    read_payload(&mut reader, &root, &mut output)?;
    output.flush()?;
    Ok(())
}

fn read_payload<R: Read, W: Write>(
    reader: &mut BitReader<R, BigEndian>,
    root: &Node,
    output: &mut W,
) -> Result<(), CodecError> {
    let mut current = root;
    loop {
        let bit = reader.read_bit().map_err(truncated)?;
        current = match current {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // Degenerate single-leaf tree: every code is the 1-bit
            // constant, so each consumed bit lands back on the root.
            Node::Leaf { .. } => current,
        };
        if let Node::Leaf { symbol, .. } = current {
            if *symbol == EOF_SYMBOL {
                return Ok(());
            }
            output.write_all(&[*symbol as u8])?;
            current = root;
        }
    }
}

fn truncated(err: io::Error) -> CodecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::TruncatedPayload
    } else {
        CodecError::Io(err)
    }
}
