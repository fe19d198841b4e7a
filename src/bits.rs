//! Utilities for validating bit vectors and packing/unpacking them into/out of words.
//!
//! A bit vector is a slice of `u8` holding one bit per element. When packed, the first
//! element of the vector becomes the MSB of the word.

use collect_slice::CollectSlice;
use num::PrimInt;

use crate::error::{HammingError, Result};

/// Verify the given vector has exactly `len` elements, each of which is 0 or 1.
pub fn check(bits: &[u8], len: usize) -> Result<()> {
    if bits.len() != len {
        return Err(HammingError::InvalidLength {
            expected: len,
            actual: bits.len(),
        });
    }

    match bits.iter().position(|&b| b > 1) {
        Some(index) => Err(HammingError::InvalidBit {
            index: index,
            value: bits[index],
        }),
        None => Ok(()),
    }
}

/// Pack the given `len`-bit vector into a word, MSB first.
pub fn pack<T: PrimInt>(bits: &[u8], len: usize) -> Result<T> {
    check(bits, len)?;

    Ok(bits.iter().fold(T::zero(), |accum, &b| {
        accum << 1 | if b == 1 { T::one() } else { T::zero() }
    }))
}

/// Unpack the low bits of the given word into the given vector, MSB first, filling
/// every element of the vector.
pub fn unpack<T: PrimInt>(word: T, out: &mut [u8]) {
    let len = out.len();

    (0..len).rev()
        .map(|i| (((word >> i) & T::one()) != T::zero()) as u8)
        .collect_slice_checked(out);
}
