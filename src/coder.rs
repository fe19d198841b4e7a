//! Provides a convenience interface for protecting byte buffers with the (7, 4) code.
//!
//! Each byte is split into its high and low nibbles, and each nibble is coded into one
//! codeword, so a buffer of `n` bytes is carried by `2n` codewords, each stored in the
//! low 7 bits of a byte.

use tracing::debug;

use crate::coding::hamming::{Hamming74, WORD_BITS};
use crate::error::{HammingError, Result};
use crate::stats::{CodeStats, HasStats};

/// Codes bytes into a buffer of codewords.
pub struct ByteEncoder {
    /// Code used for each nibble.
    code: Hamming74,
    /// Current coded buffer.
    buf: Vec<u8>,
}

impl ByteEncoder {
    /// Construct a new `ByteEncoder` using the given code.
    pub fn new(code: Hamming74) -> ByteEncoder {
        ByteEncoder {
            code: code,
            buf: Vec::new(),
        }
    }

    /// Code the given bytes, high nibble first.
    pub fn feed_bytes<T: IntoIterator<Item = u8>>(mut self, bytes: T) -> Self {
        for byte in bytes {
            self.buf.push(self.code.encode_word(byte >> 4));
            self.buf.push(self.code.encode_word(byte & 0xF));
        }

        self
    }

    /// Return the coded buffer of codewords.
    pub fn finish(self) -> Vec<u8> { self.buf }
}

/// Code the given bytes into codewords with the given code.
pub fn encode_bytes(code: &Hamming74, bytes: &[u8]) -> Vec<u8> {
    ByteEncoder::new(*code).feed_bytes(bytes.iter().cloned()).finish()
}

/// Decodes codewords back into bytes, correcting up to 1 error per codeword.
pub struct ByteDecoder {
    code: Hamming74,
    stats: CodeStats,
}

impl ByteDecoder {
    /// Construct a new `ByteDecoder` using the given code.
    pub fn new(code: Hamming74) -> ByteDecoder {
        ByteDecoder {
            code: code,
            stats: CodeStats::new(),
        }
    }

    /// Decode the given codewords, two per byte, into bytes.
    ///
    /// Every decoded codeword is recorded in the decoder's stats. Words whose errors
    /// can't be located are passed through uncorrected.
    pub fn feed(&mut self, words: &[u8]) -> Result<Vec<u8>> {
        if words.len() % 2 != 0 {
            return Err(HammingError::InvalidLength {
                expected: words.len() + 1,
                actual: words.len(),
            });
        }

        if let Some(index) = words.iter().position(|&w| w >> WORD_BITS != 0) {
            return Err(HammingError::InvalidWord {
                index: index,
                value: words[index],
            });
        }

        Ok(words.chunks(2).map(|pair| {
            let (hi, hs) = self.code.decode_word(pair[0]);
            let (lo, ls) = self.code.decode_word(pair[1]);

            self.stats.record(hs);
            self.stats.record(ls);

            hi << 4 | lo
        }).collect())
    }

    /// Decode the given codewords and log the accumulated stats.
    pub fn finish(mut self, words: &[u8]) -> Result<(Vec<u8>, CodeStats)> {
        let bytes = self.feed(words)?;

        debug!(words = self.stats.words, fixed = self.stats.fixed, err = self.stats.err,
               "finished decoding");

        Ok((bytes, self.stats))
    }
}

impl HasStats for ByteDecoder {
    fn stats(&mut self) -> &mut CodeStats { &mut self.stats }
}
