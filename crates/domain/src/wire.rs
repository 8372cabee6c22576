//! DNS-over-UDP wire format (RFC 1035 §4.1).
//!
//! Decoding accepts compressed names; encoding always emits uncompressed
//! label sequences.

pub mod bytes;
pub mod name;
pub mod parser;
pub mod serializer;

pub use name::{decode_name, encode_name, MAX_POINTER_DEPTH};
pub use parser::MessageParser;
pub use serializer::serialize_message;

/// Size of the fixed header.
pub const HEADER_SIZE: usize = 12;

/// Classic DNS-over-UDP datagram limit.
pub const MAX_DATAGRAM_SIZE: usize = 512;
