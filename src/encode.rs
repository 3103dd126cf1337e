//! Stream encoding: the compression side of the codec

use crate::code::{Code, CodeTable};
use crate::config::EOF_SYMBOL;
use crate::error::CodecError;
use crate::freq::FreqTable;
use crate::header;
use crate::tree;
use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use tracing::trace;

/// Compress `data` into a fresh buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::new();
    compress_stream(Cursor::new(data), &mut output)?;
    Ok(output)
}

/// Compress `input` (positioned at the stream start) into `output`.
/// Two sequential passes: a counting pass, then a rewind and the
/// encoding pass. The trailing partial byte is zero-padded and the
/// output flushed once the whole payload, end-of-stream code included,
/// has been written.
pub fn compress_stream<R: Read + Seek, W: Write>(
    mut input: R,
    output: W,
) -> Result<(), CodecError> {
    let freqs = FreqTable::from_reader(&mut input)?;
    let root = tree::build(&freqs);
    let codes = CodeTable::from_tree(&root);
    trace!(symbols = freqs.nonzero().count(), "derived prefix code");
    input.seek(SeekFrom::Start(0))?;

    let mut writer = BitWriter::endian(output, BigEndian);
    header::write_magic(&mut writer)?;
    header::write_tree(&root, &mut writer)?;
    write_payload(&mut input, &codes, &mut writer)?;
    writer.byte_align()?;
    writer.into_writer().flush()?;
    Ok(())
}

fn write_payload<R: Read, W: Write>(
    input: &mut R,
    codes: &CodeTable,
    writer: &mut BitWriter<W, BigEndian>,
) -> Result<(), CodecError> {
    let mut buf = [0u8; 8192];
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            write_code(writer, code_for(codes, byte as u16))?;
        }
    }
    // Sole terminator; the format has no length field.
    write_code(writer, code_for(codes, EOF_SYMBOL))?;
    Ok(())
}

fn code_for(codes: &CodeTable, symbol: u16) -> Code {
    codes
        .get(symbol)
        .expect("every symbol reaching the encoder was counted in the first pass")
}

fn write_code<W: Write>(writer: &mut BitWriter<W, BigEndian>, code: Code) -> io::Result<()> {
    writer.write(u32::from(code.len), code.bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stream_is_exact() {
        // Magic, then the 10-bit sentinel-leaf header, then the 1-bit
        // end-of-stream code, then padding: 43 bits in 6 bytes.
        let compressed = compress(b"").unwrap();
        assert_eq!(compressed, vec![0xFA, 0xCE, 0x82, 0x01, 0xC0, 0x00]);
    }

    #[test]
    fn test_skewed_input_total_size() {
        // 32 magic + 32 header (two internal nodes, three leaves) + 7
        // payload bits = 71 bits, padded to 9 bytes.
        let compressed = compress(&[65, 65, 65, 66]).unwrap();
        assert_eq!(compressed.len(), 9);
    }

    #[test]
    fn test_stream_and_slice_agree() {
        let data = b"streams and slices must produce identical bytes";
        let mut via_stream = Vec::new();
        compress_stream(Cursor::new(&data[..]), &mut via_stream).unwrap();
        assert_eq!(via_stream, compress(data).unwrap());
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let data = b"aaaaaaaaaabbbbbbbbbb".repeat(50);
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len());
    }
}
