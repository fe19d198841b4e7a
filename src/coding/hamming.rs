//! Encoding and decoding of the (7, 4, 3) Hamming code.
//!
//! The code can correct up to 1 error. Two or more errors are either detected as
//! uncorrectable or, more often, silently "corrected" to the wrong codeword, which is
//! inherent to any distance-3 code.
//!
//! Words are handled in two forms: packed into the low bits of a `u8` with the first
//! codeword bit as the MSB, and as bit vectors with one bit per element (see
//! [`bits`](crate::bits)).

use binfield_matrix::{matrix_mul, matrix_mul_systematic};
use tracing::{debug, trace};

use crate::bits;
use crate::error::{CodeDefect, HammingError, Result};

/// Number of data bits per codeword.
pub const DATA_BITS: usize = 4;
/// Number of bits per codeword.
pub const WORD_BITS: usize = 7;
/// Number of parity bits per codeword.
pub const PARITY_BITS: usize = WORD_BITS - DATA_BITS;

/// Generator matrix in systematic form `[I | P]`.
pub const GEN: [[u8; WORD_BITS]; DATA_BITS] = [
    [1, 0, 0, 0, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 1],
    [0, 0, 1, 0, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1],
];

/// Parity-check matrix `[Pᵗ | I]` derived from the generator.
pub const PAR: [[u8; WORD_BITS]; PARITY_BITS] = [
    [1, 1, 0, 1, 1, 0, 0],
    [1, 0, 1, 1, 0, 1, 0],
    [0, 1, 1, 1, 0, 0, 1],
];

/// Outcome of decoding a single word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub enum Status {
    /// The syndrome was zero.
    NoError,
    /// The bit at the given index (0 is the first codeword bit) was flipped back.
    ErrorCorrected(usize),
    /// The syndrome didn't match any single-bit error, and the word was left as is.
    Uncorrectable,
}

impl Status {
    /// Number of bits corrected in the word.
    pub fn fixes(&self) -> usize {
        match *self {
            Status::ErrorCorrected(_) => 1,
            Status::NoError | Status::Uncorrectable => 0,
        }
    }
}

/// Data bits recovered from a received word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct Decoded {
    /// The 4 data bits.
    pub data: [u8; DATA_BITS],
    /// How the word was decoded.
    pub status: Status,
}

/// A (7, 4) Hamming code defined by a systematic generator and matching parity-check
/// matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Hamming74 {
    /// Parity part of the generator, transposed: each row is a 4-bit mask over the data
    /// bits that forms one parity bit.
    gen: [u8; PARITY_BITS],
    /// Rows of the parity-check matrix, each a 7-bit mask over the codeword.
    par: [u8; PARITY_BITS],
    /// Maps 3-bit syndromes to bit error locations.
    locations: [Option<usize>; 1 << PARITY_BITS],
}

impl Default for Hamming74 {
    fn default() -> Self { Hamming74::new() }
}

impl Hamming74 {
    /// Construct the standard code from `GEN` and `PAR`.
    pub fn new() -> Self {
        Self::build(&GEN, &PAR)
    }

    /// Construct a code from the given generator and parity-check matrices, verifying
    /// they form a (7, 4) Hamming code that can locate every single-bit error.
    pub fn from_matrices(gen: &[[u8; WORD_BITS]; DATA_BITS],
                         par: &[[u8; WORD_BITS]; PARITY_BITS])
        -> Result<Self>
    {
        validate(gen, par).map_err(HammingError::InvalidCode)?;
        Ok(Self::build(gen, par))
    }

    fn build(gen: &[[u8; WORD_BITS]; DATA_BITS], par: &[[u8; WORD_BITS]; PARITY_BITS])
        -> Self
    {
        let mut code = Hamming74 {
            gen: [0; PARITY_BITS],
            par: [0; PARITY_BITS],
            locations: [None; 1 << PARITY_BITS],
        };

        for r in 0..PARITY_BITS {
            code.gen[r] = (0..DATA_BITS).fold(0, |accum, i| {
                accum << 1 | gen[i][DATA_BITS + r]
            });
            code.par[r] = par[r].iter().fold(0, |accum, &b| accum << 1 | b);
        }

        for col in 0..WORD_BITS {
            let s = column_syndrome(par, col);

            if s != 0 {
                code.locations[s] = Some(col);
            }
        }

        code
    }

    /// Encode the given 4 data bits (in the LSBs) into a 7-bit codeword.
    pub fn encode_word(&self, data: u8) -> u8 {
        assert!(data >> DATA_BITS == 0);
        matrix_mul_systematic(data, &self.gen[..])
    }

    /// Compute the 3-bit syndrome of the given 7-bit word.
    pub fn syndrome_word(&self, word: u8) -> usize {
        assert!(word >> WORD_BITS == 0);
        matrix_mul(word, &self.par[..])
    }

    /// Look up the bit error location for the given syndrome, if any.
    pub fn locate(&self, syndrome: usize) -> Option<usize> {
        self.locations.get(syndrome).and_then(|&loc| loc)
    }

    /// Decode the given 7-bit word to the nearest codeword, correcting up to 1 error,
    /// and return the 4 data bits along with how the word was decoded.
    pub fn decode_word(&self, word: u8) -> (u8, Status) {
        let s = self.syndrome_word(word);

        if s == 0 {
            return (word >> PARITY_BITS, Status::NoError);
        }

        match self.locate(s) {
            Some(pos) => {
                trace!(syndrome = s, position = pos, "correcting bit error");
                let fixed = word ^ (1 << (WORD_BITS - 1 - pos));
                (fixed >> PARITY_BITS, Status::ErrorCorrected(pos))
            },
            None => {
                debug!(syndrome = s, word = word, "uncorrectable word");
                (word >> PARITY_BITS, Status::Uncorrectable)
            },
        }
    }

    /// Encode the given 4-bit data vector into a 7-bit codeword vector.
    pub fn encode(&self, data: &[u8]) -> Result<[u8; WORD_BITS]> {
        let data: u8 = bits::pack(data, DATA_BITS)?;

        let mut word = [0; WORD_BITS];
        bits::unpack(self.encode_word(data), &mut word);

        Ok(word)
    }

    /// Compute the 3-bit syndrome vector of the given 7-bit received vector.
    pub fn syndrome(&self, word: &[u8]) -> Result<[u8; PARITY_BITS]> {
        let word: u8 = bits::pack(word, WORD_BITS)?;

        let mut s = [0; PARITY_BITS];
        bits::unpack(self.syndrome_word(word), &mut s);

        Ok(s)
    }

    /// Decode the given 7-bit received vector, correcting up to 1 error.
    pub fn decode(&self, word: &[u8]) -> Result<Decoded> {
        let word: u8 = bits::pack(word, WORD_BITS)?;
        let (data, status) = self.decode_word(word);

        let mut decoded = Decoded {
            data: [0; DATA_BITS],
            status: status,
        };
        bits::unpack(data, &mut decoded.data);

        Ok(decoded)
    }
}

/// Read the given parity-check column as a syndrome, with the first row as the MSB.
fn column_syndrome(par: &[[u8; WORD_BITS]; PARITY_BITS], col: usize) -> usize {
    par.iter().fold(0, |accum, row| accum << 1 | row[col] as usize)
}

fn validate(gen: &[[u8; WORD_BITS]; DATA_BITS], par: &[[u8; WORD_BITS]; PARITY_BITS])
    -> std::result::Result<(), CodeDefect>
{
    for (r, row) in gen.iter().enumerate() {
        if let Some(c) = row.iter().position(|&b| b > 1) {
            return Err(CodeDefect::NonBinaryGenerator(r, c));
        }
    }

    for (r, row) in par.iter().enumerate() {
        if let Some(c) = row.iter().position(|&b| b > 1) {
            return Err(CodeDefect::NonBinaryParityCheck(r, c));
        }
    }

    for (r, row) in gen.iter().enumerate() {
        if (0..DATA_BITS).any(|c| row[c] != (r == c) as u8) {
            return Err(CodeDefect::NotSystematic);
        }
    }

    let mut seen = [None; 1 << PARITY_BITS];

    for col in 0..WORD_BITS {
        let s = column_syndrome(par, col);

        if s == 0 {
            return Err(CodeDefect::ZeroColumn(col));
        }

        if let Some(prev) = seen[s] {
            return Err(CodeDefect::DuplicateColumn(prev, col));
        }

        seen[s] = Some(col);
    }

    for (r, row) in gen.iter().enumerate() {
        let orthogonal = par.iter().all(|check| {
            row.iter().zip(check.iter()).map(|(&a, &b)| a & b).sum::<u8>() % 2 == 0
        });

        if !orthogonal {
            return Err(CodeDefect::NotOrthogonal(r));
        }
    }

    Ok(())
}
