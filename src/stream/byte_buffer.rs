use std::io::{Error, ErrorKind, Result};

use crate::stream::{ByteRead, ByteWrite};

/// A byte buffer can be used to read bytes from or write bytes to an
/// underlying vector.
#[derive(Clone, Debug)]
pub struct ByteBuffer {
    data: Vec<u8>,
    pos: usize,
}

impl ByteBuffer {
    /// Creates a new, empty byte buffer.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty byte buffer with the given capacity (in
    /// bytes) preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuffer {
            data: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Creates a new byte buffer for reading from a vector.
    pub fn from(input: Vec<u8>) -> Self {
        ByteBuffer {
            data: input,
            pos: 0,
        }
    }

    /// Creates a new byte buffer for appending to a vector.
    pub fn append(vec: Vec<u8>) -> Self {
        let len = vec.len();
        ByteBuffer {
            data: vec,
            pos: len,
        }
    }

    /// Returns the vector underlying the byte buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Gives access to the vector underlying the byte buffer.
    #[inline]
    pub fn inner(&self) -> &[u8] {
        &self.data
    }

    /// The position in the byte buffer where the next read or write will
    /// occur.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the position for the next read or write.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position <= self.data.len() {
            self.pos = position;
            Ok(())
        } else {
            Err(Error::new(ErrorKind::NotFound,
                           "position out of bounds"))
        }
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteRead for ByteBuffer {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.pos < self.data.len() {
            let result = self.data[self.pos];
            self.pos += 1;
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }
}

impl ByteWrite for ByteBuffer {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.pos < self.data.len() {
            self.data[self.pos] = byte;
        } else {
            self.data.push(byte);
        }
        self.pos += 1;

        Ok(())
    }
}
