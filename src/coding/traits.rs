pub use std::io::Result;

use num_traits::PrimInt;

use crate::stream::*;

/// Integers that travel on the wire as a 64-bit two's-complement bit
/// pattern.
///
/// The conversions are bit-for-bit reinterpretations, never checked or
/// saturating casts: a negative `i64` encodes as its unsigned 64-bit
/// magnitude, and a decoded pattern with the top bit set comes back
/// negative. This keeps encoded bytes identical whichever instance the
/// caller picks, which is what the zigzag layer above relies on.
pub trait WireInt: PrimInt {
    /// The unsigned 64-bit bit pattern of this value.
    fn to_bit_pattern(self) -> u64;

    /// Reconstructs a value from its unsigned 64-bit bit pattern.
    fn from_bit_pattern(bits: u64) -> Self;
}

impl WireInt for u64 {
    #[inline]
    fn to_bit_pattern(self) -> u64 {
        self
    }

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        bits
    }
}

impl WireInt for i64 {
    #[inline]
    fn to_bit_pattern(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_bit_pattern(bits: u64) -> Self {
        bits as i64
    }
}

/// A self-delimiting code lets us write integers to a byte stream and
/// read them back without any external framing.
pub trait WireCode {
    /// Writes `value` to `sink`.
    fn encode<W: ByteWrite, N: WireInt>(&self, sink: &mut W, value: N) -> Result<()>;

    /// Reads a value from `source`.
    ///
    /// `Ok(None)` indicates (benign) EOF: the stream ended before the
    /// first byte of a value. A stream that ends in the middle of a
    /// value is an error.
    fn decode<R: ByteRead, N: WireInt>(&self, source: &mut R) -> Result<Option<N>>;
}
