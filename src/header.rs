//! Container framing: format tag plus the preorder tree header

use crate::config::{MAGIC, MAGIC_BITS, SYMBOL_BITS};
use crate::error::CodecError;
use crate::tree::Node;
use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::io::{self, Read, Write};

/// Write the fixed 32-bit format tag.
pub fn write_magic<W: Write>(writer: &mut BitWriter<W, BigEndian>) -> io::Result<()> {
    writer.write(MAGIC_BITS, MAGIC)
}

/// Validate the leading format tag. Any other value is rejected before
/// the header is interpreted.
pub fn check_magic<R: Read>(reader: &mut BitReader<R, BigEndian>) -> Result<(), CodecError> {
    let found: u32 = reader.read(MAGIC_BITS).map_err(truncated)?;
    if found != MAGIC {
        return Err(CodecError::BadMagic { found });
    }
    Ok(())
}

/// Write the tree shape in preorder: a 0 bit then both subtrees for an
/// internal node, a 1 bit then the 9-bit symbol for a leaf. The
/// recursive structure is self-terminating, so no node count or end
/// marker is stored.
pub fn write_tree<W: Write>(node: &Node, writer: &mut BitWriter<W, BigEndian>) -> io::Result<()> {
    match node {
        Node::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_tree(left, writer)?;
            write_tree(right, writer)
        }
        Node::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write(SYMBOL_BITS, *symbol)
        }
    }
}

/// Rebuild a tree from its preorder header. Weights are not part of the
/// format and come back as zero; decoding only consults the shape.
pub fn read_tree<R: Read>(reader: &mut BitReader<R, BigEndian>) -> Result<Node, CodecError> {
    let is_leaf = reader.read_bit().map_err(truncated)?;
    if is_leaf {
        let symbol: u16 = reader.read(SYMBOL_BITS).map_err(truncated)?;
        Ok(Node::Leaf { symbol, weight: 0 })
    } else {
        let left = read_tree(reader)?;
        let right = read_tree(reader)?;
        Ok(Node::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

fn truncated(err: io::Error) -> CodecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::TruncatedHeader
    } else {
        CodecError::Io(err)
    }
}
