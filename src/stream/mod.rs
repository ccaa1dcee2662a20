//! Byte-oriented streams for coding.

mod traits;
pub use self::traits::*;

mod byte_buffer;
pub use self::byte_buffer::*;

mod io;
pub use self::io::*;
