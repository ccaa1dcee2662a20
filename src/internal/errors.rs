use std::io::{Error, ErrorKind, Result};

pub fn out_of_bytes<A>(who: &str) -> Result<A> {
    Err(Error::new(
        ErrorKind::UnexpectedEof,
        format!("{}: could not decode: more bytes expected", who),
    ))
}

pub fn too_many_bytes<A>(who: &str) -> Result<A> {
    Err(Error::new(
        ErrorKind::InvalidData,
        format!("{}: too many bytes when decoding varint", who),
    ))
}
