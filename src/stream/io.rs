use std::io;
use std::io::ErrorKind;

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::stream::{ByteRead, ByteWrite};

/// Adapts a `std::io::Read` into a [`ByteRead`](trait.ByteRead.html).
///
/// End of file on the underlying reader is reported as `Ok(None)`;
/// every other error passes through.
#[derive(Debug)]
pub struct ByteReader<R>(R);

impl<R: io::Read> ByteReader<R> {
    /// Creates a byte source over the given reader.
    pub fn new(reader: R) -> Self {
        ByteReader(reader)
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: io::Read> ByteRead for ByteReader<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.0.read_u8() {
            Ok(byte) => Ok(Some(byte)),
            Err(ref error) if error.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Adapts a `std::io::Write` into a [`ByteWrite`](trait.ByteWrite.html).
#[derive(Debug)]
pub struct ByteWriter<W>(W);

impl<W: io::Write> ByteWriter<W> {
    /// Creates a byte sink over the given writer.
    pub fn new(writer: W) -> Self {
        ByteWriter(writer)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> ByteWrite for ByteWriter<W> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.0.write_u8(byte)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_drains_a_cursor() {
        let mut reader = ByteReader::new(Cursor::new(vec![1, 2]));

        assert_eq!(Some(1), reader.read_byte().unwrap());
        assert_eq!(Some(2), reader.read_byte().unwrap());
        assert_eq!(None, reader.read_byte().unwrap());
        assert_eq!(None, reader.read_byte().unwrap());
    }

    #[test]
    fn writer_fills_a_vec() {
        let mut writer = ByteWriter::new(Vec::<u8>::new());

        writer.write_byte(1).unwrap();
        writer.write_byte(2).unwrap();

        assert_eq!(vec![1, 2], writer.into_inner());
    }
}
