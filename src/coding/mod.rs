//! Encoding and decoding for the (7, 4) Hamming error correction code.

pub mod hamming;
