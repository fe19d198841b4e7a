//! Encoding and decoding of the (7, 4) Hamming error correction code, with single-bit
//! error correction by syndrome lookup.

pub mod bits;
pub mod coder;
pub mod coding;
pub mod error;
pub mod stats;

pub use crate::coding::hamming::{Decoded, Hamming74, Status};
pub use crate::error::{HammingError, Result};
