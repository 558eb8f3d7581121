//! PKCS7 padding for 16-byte blocks.

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use thiserror::Error;

use super::BLOCK_SIZE;

/// Reasons a decrypted buffer was rejected by [`unpad`].
///
/// Both variants render the same message so that callers who forward the
/// error text cannot be used as a padding oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// The final byte is `0` or larger than [`BLOCK_SIZE`].
    #[error("invalid padding")]
    OutOfRange,

    /// A byte inside the claimed padding run differs from the padding length,
    /// or the buffer is shorter than the run.
    #[error("invalid padding")]
    Mismatch,
}

/// Append PKCS7 padding so the result is a non-empty multiple of [`BLOCK_SIZE`].
///
/// Already-aligned input (including empty input) gains a full block of `0x10`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip PKCS7 padding from `block`, returning the unpadded prefix.
///
/// Total over all inputs; an empty slice is reported as
/// [`PaddingError::OutOfRange`].
///
/// # Errors
///
/// Returns [`PaddingError::OutOfRange`] if the last byte is not in `1..=16`,
/// and [`PaddingError::Mismatch`] if any of the trailing padding bytes is
/// wrong.
pub fn unpad(block: &[u8]) -> Result<&[u8], PaddingError> {
    let Some(&pad_byte) = block.last() else {
        return Err(PaddingError::OutOfRange);
    };
    let pad_len = usize::from(pad_byte);
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(PaddingError::OutOfRange);
    }
    if pad_len > block.len() {
        return Err(PaddingError::Mismatch);
    }

    // Always walk the whole trailing window; no early exit on the first bad byte.
    let window = block.len().min(BLOCK_SIZE);
    let mut valid = Choice::from(1u8);
    for (offset, byte) in block[block.len() - window..].iter().rev().enumerate() {
        let in_padding = (offset as u8).ct_lt(&pad_byte);
        valid &= !in_padding | byte.ct_eq(&pad_byte);
    }

    if bool::from(valid) {
        Ok(&block[..block.len() - pad_len])
    } else {
        Err(PaddingError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpad_accepts_every_valid_length() {
        for k in 1..=BLOCK_SIZE {
            let mut block = vec![0xAAu8; BLOCK_SIZE - k];
            block.extend(std::iter::repeat(k as u8).take(k));
            let stripped = unpad(&block).unwrap();
            assert_eq!(stripped.len(), BLOCK_SIZE - k, "k = {k}");
            assert!(stripped.iter().all(|&b| b == 0xAA));
        }
    }

    #[test]
    fn unpad_accepts_short_blocks_that_are_all_padding() {
        for k in 1..=BLOCK_SIZE {
            let block = vec![k as u8; k];
            assert_eq!(unpad(&block).unwrap(), &[] as &[u8], "k = {k}");
        }
    }

    #[test]
    fn unpad_rejects_zero_and_oversized_lengths() {
        for last in [0u8, 17, 32, 0x80, 0xFF] {
            let mut block = vec![last; BLOCK_SIZE];
            block[0] = 1;
            assert_eq!(unpad(&block), Err(PaddingError::OutOfRange), "last = {last}");
        }
    }

    #[test]
    fn unpad_rejects_any_corrupted_padding_byte() {
        for k in 2..=BLOCK_SIZE {
            for bad in 1..k {
                let mut block = vec![k as u8; BLOCK_SIZE];
                block[BLOCK_SIZE - 1 - bad] ^= 0x01;
                assert_eq!(
                    unpad(&block),
                    Err(PaddingError::Mismatch),
                    "k = {k}, corrupted offset from end = {bad}"
                );
            }
        }
    }

    #[test]
    fn unpad_ignores_bytes_before_the_padding_run() {
        // The 0x02 just before the 3-byte run is plaintext, not padding.
        let block = [9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 2, 3, 3, 3];
        assert_eq!(unpad(&block).unwrap(), &block[..13]);
    }

    #[test]
    fn unpad_rejects_run_longer_than_input() {
        assert_eq!(unpad(&[4, 4, 4]), Err(PaddingError::Mismatch));
    }

    #[test]
    fn unpad_empty_input_is_out_of_range() {
        assert_eq!(unpad(&[]), Err(PaddingError::OutOfRange));
    }

    #[test]
    fn unpad_only_inspects_final_block_of_long_input() {
        let mut data = vec![0x10u8; 48];
        data[0] = 0;
        assert_eq!(unpad(&data).unwrap().len(), 32);
    }

    #[test]
    fn pad_fills_to_block_boundary() {
        let padded = pad(b"HELLO");
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(&padded[..5], b"HELLO");
        assert!(padded[5..].iter().all(|&b| b == 0x0B));
    }

    #[test]
    fn pad_adds_full_block_when_aligned() {
        assert_eq!(pad(&[]), vec![0x10u8; BLOCK_SIZE]);
        let padded = pad(&[7u8; 32]);
        assert_eq!(padded.len(), 48);
        assert!(padded[32..].iter().all(|&b| b == 0x10));
    }

    #[test]
    fn unpad_inverts_pad() {
        for len in [0usize, 1, 15, 16, 17, 31, 33] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(unpad(&pad(&data)).unwrap(), data.as_slice(), "len = {len}");
        }
    }

    #[test]
    fn both_variants_render_identically() {
        assert_eq!(
            PaddingError::OutOfRange.to_string(),
            PaddingError::Mismatch.to_string()
        );
    }
}
