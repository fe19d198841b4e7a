//! Standard errors that may occur when coding with the (7, 4) Hamming code.

use std::fmt;

/// Coding errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HammingError {
    /// A bit vector didn't have the number of bits required by the operation.
    InvalidLength {
        /// Number of bits the operation requires.
        expected: usize,
        /// Number of bits that were given.
        actual: usize,
    },
    /// A bit vector contained a value other than 0 or 1.
    InvalidBit {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: u8,
    },
    /// A packed codeword had bits set above its 7 codeword bits.
    InvalidWord {
        /// Index of the offending word.
        index: usize,
        /// The offending word.
        value: u8,
    },
    /// The given generator/parity-check pair doesn't form a (7, 4) Hamming code.
    InvalidCode(CodeDefect),
}

/// Reasons a generator/parity-check pair is rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CodeDefect {
    /// The generator entry at the given (row, column) isn't 0 or 1.
    NonBinaryGenerator(usize, usize),
    /// The parity-check entry at the given (row, column) isn't 0 or 1.
    NonBinaryParityCheck(usize, usize),
    /// The first 4 columns of the generator aren't the identity.
    NotSystematic,
    /// The given generator row isn't orthogonal to every parity-check row.
    NotOrthogonal(usize),
    /// The given parity-check column is all zeroes, so an error there is invisible.
    ZeroColumn(usize),
    /// The two given parity-check columns are equal, so their errors are
    /// indistinguishable.
    DuplicateColumn(usize, usize),
}

impl fmt::Display for HammingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HammingError::InvalidLength { expected, actual } =>
                write!(f, "expected {} bits, got {}", expected, actual),
            HammingError::InvalidBit { index, value } =>
                write!(f, "value {} at index {} is not a bit", value, index),
            HammingError::InvalidWord { index, value } =>
                write!(f, "word {:#04x} at index {} is wider than 7 bits", value, index),
            HammingError::InvalidCode(defect) =>
                write!(f, "invalid (7, 4) Hamming code: {}", defect),
        }
    }
}

impl fmt::Display for CodeDefect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CodeDefect::NonBinaryGenerator(r, c) =>
                write!(f, "generator entry ({}, {}) is not binary", r, c),
            CodeDefect::NonBinaryParityCheck(r, c) =>
                write!(f, "parity-check entry ({}, {}) is not binary", r, c),
            CodeDefect::NotSystematic => write!(f, "generator is not systematic"),
            CodeDefect::NotOrthogonal(r) =>
                write!(f, "generator row {} is not orthogonal to the parity checks", r),
            CodeDefect::ZeroColumn(c) => write!(f, "parity-check column {} is zero", c),
            CodeDefect::DuplicateColumn(a, b) =>
                write!(f, "parity-check columns {} and {} are equal", a, b),
        }
    }
}

impl std::error::Error for HammingError {}

/// Standard result using `HammingError`.
pub type Result<T> = std::result::Result<T, HammingError>;
