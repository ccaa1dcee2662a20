use super::*;
use crate::internal::errors::*;
use crate::stream::*;

/// The protocol-buffer varint code.
///
/// Each byte carries seven data bits, least-significant group first,
/// and the top bit of every byte except the last is set as a
/// continuation marker. Zero encodes as the single byte `0x00`, and no
/// 64-bit pattern takes more than [`MAX_BYTES`](constant.MAX_BYTES.html)
/// bytes.
pub struct Varint;

/// An instance of `Varint`.
pub const VARINT: Varint = Varint;

/// The longest possible varint: ten bytes covers any 64-bit pattern.
pub const MAX_BYTES: usize = 10;

impl WireCode for Varint {
    fn encode<W: ByteWrite, N: WireInt>(&self, sink: &mut W, value: N) -> Result<()> {
        let mut bits = value.to_bit_pattern();

        loop {
            let byte = (bits & 0x7f) as u8;
            bits >>= 7;

            if bits == 0 {
                return sink.write_byte(byte);
            }

            sink.write_byte(byte | 0x80)?;
        }
    }

    fn decode<R: ByteRead, N: WireInt>(&self, source: &mut R) -> Result<Option<N>> {
        let mut bits: u64 = 0;
        let mut shift = 0;

        loop {
            // Checked before the read: ten groups of seven bits cover
            // any 64-bit pattern, so a continuation bit still pending at
            // shift 64 means malformed input, however long the stream.
            if shift >= 64 {
                return too_many_bytes("Varint::decode");
            }

            let byte = match source.read_byte()? {
                Some(byte) => byte,
                None if shift == 0 => return Ok(None),
                None => return out_of_bytes("Varint::decode"),
            };

            bits |= u64::from(byte & 0x7f) << shift;
            shift += 7;

            if byte & 0x80 == 0 {
                return Ok(Some(N::from_bit_pattern(bits)));
            }
        }
    }
}
