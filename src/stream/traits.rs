use std::collections::VecDeque;
use std::io::Result;

/// Allows reading bytes from a source.
pub trait ByteRead {
    /// Reads a single byte from the source.
    ///
    /// `Ok(None)` indicates end of stream; any other failure of the
    /// source propagates as an error.
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// Allows writing bytes to a sink.
pub trait ByteWrite {
    /// Writes a single byte to the sink.
    fn write_byte(&mut self, byte: u8) -> Result<()>;
}

impl ByteRead for VecDeque<u8> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

impl ByteWrite for VecDeque<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push_back(byte);
        Ok(())
    }
}

impl ByteWrite for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deque_is_fifo() {
        let mut dv = VecDeque::<u8>::new();

        dv.write_byte(1).unwrap();
        dv.write_byte(2).unwrap();
        dv.write_byte(3).unwrap();

        assert_eq!(Some(1), dv.read_byte().unwrap());
        assert_eq!(Some(2), dv.read_byte().unwrap());
        assert_eq!(Some(3), dv.read_byte().unwrap());
        assert_eq!(None, dv.read_byte().unwrap());
    }

    #[test]
    fn vec_appends() {
        let mut vec = Vec::<u8>::new();

        vec.write_byte(7).unwrap();
        vec.write_byte(8).unwrap();

        assert_eq!(vec![7, 8], vec);
    }
}
