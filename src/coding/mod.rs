//! Variable-length integer codes for wire formats.
//!
//! These codes are self-delimiting: they encode to a `ByteWrite` and
//! decode from a `ByteRead` without any external framing or length
//! prefix. The surrounding serialization layer decides what the
//! decoded integers mean.

mod traits;
pub use self::traits::*;

mod varint;
pub use self::varint::*;

#[cfg(test)]
mod properties {
    use super::*;
    use std::collections::VecDeque;

    pub fn code_decode<Code: WireCode>(code: &Code, vec: Vec<u64>) -> bool {
        let mut dv = VecDeque::<u8>::new();
        for &i in &vec {
            code.encode(&mut dv, i).unwrap();
        }

        let mut vec2 = Vec::<u64>::new();
        while let Ok(Some(i)) = code.decode::<_, u64>(&mut dv) {
            vec2.push(i)
        }

        vec2 == vec
    }
}
