//! Protocol-buffer varint coding for Rust.
//!
//! This library provides the raw wire primitive that protobuf-style
//! serializers are built on: writing and reading 64-bit integers as
//! base-128 varints against a byte stream. So far we have:
//!
//!   - [byte-oriented stream traits](stream/index.html) that any
//!     concrete source or sink can implement, with adapters for
//!     `std::io` readers and writers;
//!   - a positioned [byte buffer](stream/struct.ByteBuffer.html) for
//!     in-memory coding; and
//!   - the [varint code](coding/struct.Varint.html) itself, covering
//!     the full 64-bit signed and unsigned domains by two's-complement
//!     bit-pattern reinterpretation.
//!
//! Zigzag mapping, field tags, and length-delimited framing belong to
//! the serialization layer above and are not part of this crate.
//!
//! # Usage
//!
//! It's [on crates.io](https://crates.io/crates/varwire), so you can add
//!
//! ```toml
//! [dependencies]
//! varwire = "0.1.0"
//! ```
//!
//! to your `Cargo.toml`.
//!
//! ```
//! use std::collections::VecDeque;
//! use varwire::{VARINT, WireCode};
//!
//! let mut stream = VecDeque::<u8>::new();
//! VARINT.encode(&mut stream, 300u64).unwrap();
//! assert_eq!(Some(300u64), VARINT.decode(&mut stream).unwrap());
//! ```

#![warn(missing_docs)]

mod internal;

pub mod stream;
pub use crate::stream::{ByteBuffer, ByteRead, ByteReader, ByteWrite, ByteWriter};

pub mod coding;
pub use crate::coding::{Varint, WireCode, WireInt, MAX_BYTES, VARINT};
