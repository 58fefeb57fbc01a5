//! Arbitrary-precision base-62 conversion.
//!
//! The input byte sequence is treated as one big-endian unsigned integer and
//! rendered in the alphabet `0-9A-Za-z`, most significant digit first.
//!
//! The integer lives in a vector of 32-bit limbs. Encoding divides it by
//! 62^5 repeatedly, which yields five digits per pass; decoding multiplies
//! and accumulates five digits at a time. Both are O(n²) in the input length,
//! which dominates the cost of large tokens.
//!
//! Leading zero bytes carry no value in this representation and are dropped:
//! `decode(encode(b"\0\x01")) == b"\x01"`. Tokens already in circulation rely
//! on this exact mapping, so it is kept.

use crate::error::DecodeError;

/// The 62-symbol alphabet: digits, then uppercase, then lowercase letters.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Digits handled per limb operation.
const DIGITS_PER_CHUNK: usize = 5;

/// 62^5, the largest power of 62 below 2^32.
const CHUNK_BASE: u64 = 916_132_832;

/// Maps an ASCII byte to its digit value, or 0xFF if not in the alphabet.
const DIGIT_VALUES: [u8; 256] = {
    let mut table = [0xFFu8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the digit value of `c`, if it belongs to the alphabet.
#[inline]
pub fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGIT_VALUES[c as usize] {
        0xFF => None,
        v => Some(v),
    }
}

/// Returns a lower bound on the length of `encode(bytes)`, in characters.
///
/// Cheap to compute, so callers can reject oversized input before paying for
/// the quadratic conversion. Uses 1.3436 digits per byte, just under
/// log₆₂(256) ≈ 1.34362.
pub fn encoded_len_lower_bound(bytes: &[u8]) -> usize {
    let significant = bytes.iter().skip_while(|&&b| b == 0).count();
    match significant {
        0 => 1,
        n => (n - 1) * 13_436 / 10_000 + 1,
    }
}

/// Encodes bytes as a base-62 numeral.
///
/// Zero (including empty input) encodes to `"0"`.
pub fn encode(bytes: &[u8]) -> String {
    let Some(start) = bytes.iter().position(|&b| b != 0) else {
        return "0".to_string();
    };
    let significant = &bytes[start..];

    // Big-endian limbs, most significant limb padded with zero bytes.
    let pad = (4 - significant.len() % 4) % 4;
    let mut limbs: Vec<u32> = Vec::with_capacity((significant.len() + pad) / 4);
    let mut acc: u32 = 0;
    for (i, &byte) in std::iter::repeat_n(&0u8, pad).chain(significant).enumerate() {
        acc = (acc << 8) | byte as u32;
        if i % 4 == 3 {
            limbs.push(acc);
            acc = 0;
        }
    }

    // Least significant digit first; reversed at the end.
    let digit_estimate = significant.len() * 8 / 5 + DIGITS_PER_CHUNK;
    let mut digits: Vec<u8> = Vec::with_capacity(digit_estimate);
    let mut head = 0;
    while head < limbs.len() {
        let mut rem: u64 = 0;
        for limb in &mut limbs[head..] {
            let cur = (rem << 32) | *limb as u64;
            *limb = (cur / CHUNK_BASE) as u32;
            rem = cur % CHUNK_BASE;
        }
        while head < limbs.len() && limbs[head] == 0 {
            head += 1;
        }
        for _ in 0..DIGITS_PER_CHUNK {
            digits.push(ALPHABET[(rem % BASE) as usize]);
            rem /= BASE;
        }
    }

    while digits.last() == Some(&ALPHABET[0]) {
        digits.pop();
    }
    digits.reverse();
    // Alphabet bytes are ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Decodes a base-62 numeral into the minimal big-endian byte sequence.
///
/// A numeral whose value is zero (including `""` and `"0"`) decodes to an
/// empty vector.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut digits = Vec::with_capacity(encoded.len());
    for (position, c) in encoded.chars().enumerate() {
        let value = digit_value(c).ok_or(DecodeError::InvalidBase62Char { char: c, position })?;
        digits.push(value);
    }

    // Little-endian limbs.
    let mut limbs: Vec<u32> = Vec::with_capacity(digits.len() * 6 / 32 + 1);
    let first = match digits.len() % DIGITS_PER_CHUNK {
        0 => DIGITS_PER_CHUNK,
        n => n,
    };
    let mut offset = 0;
    while offset < digits.len() {
        let size = if offset == 0 { first } else { DIGITS_PER_CHUNK };
        let chunk = &digits[offset..offset + size];
        offset += size;

        let multiplier = BASE.pow(size as u32);
        let mut carry = chunk.iter().fold(0u64, |acc, &d| acc * BASE + d as u64);
        for limb in &mut limbs {
            let cur = *limb as u64 * multiplier + carry;
            *limb = cur as u32;
            carry = cur >> 32;
        }
        if carry != 0 {
            limbs.push(carry as u32);
        }
    }

    let mut bytes = Vec::with_capacity(limbs.len() * 4);
    for limb in limbs.iter().rev() {
        bytes.extend_from_slice(&limb.to_be_bytes());
    }
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.drain(..start);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_base() {
        assert_eq!(BASE.pow(DIGITS_PER_CHUNK as u32), CHUNK_BASE);
        assert!(CHUNK_BASE < 1 << 32);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(encode(&[]), "0");
        assert_eq!(encode(&[0]), "0");
        assert_eq!(encode(&[1]), "1");
        assert_eq!(encode(&[61]), "z");
        assert_eq!(encode(&[62]), "10");
        assert_eq!(encode(&[255]), "47");
        assert_eq!(encode(&[1, 0]), "48");
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(encode(b"Hello"), "5TP3P3v");
        assert_eq!(decode("5TP3P3v").unwrap(), b"Hello".to_vec());
    }

    #[test]
    fn test_multi_limb_roundtrip() {
        let data: Vec<u8> = (1..=200).map(|i| (i * 37 % 256) as u8).collect();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_all_ones_roundtrip() {
        let data = vec![0xFFu8; 33];
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_leading_zero_bytes_dropped() {
        let encoded = encode(&[0, 0, 7, 0]);
        assert_eq!(encoded, encode(&[7, 0]));
        assert_eq!(decode(&encoded).unwrap(), vec![7, 0]);
    }

    #[test]
    fn test_zero_decodes_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("0").unwrap().is_empty());
        assert!(decode("000").unwrap().is_empty());
    }

    #[test]
    fn test_leading_zero_digits_ignored() {
        assert_eq!(decode("0047").unwrap(), vec![255]);
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(
            decode("ab-c"),
            Err(DecodeError::InvalidBase62Char { char: '-', position: 2 })
        );
        assert!(matches!(
            decode("é"),
            Err(DecodeError::InvalidBase62Char { char: 'é', position: 0 })
        ));
        assert!(decode("abc/def").is_err());
    }

    #[test]
    fn test_encoded_len_lower_bound() {
        assert_eq!(encoded_len_lower_bound(&[]), 1);
        assert_eq!(encoded_len_lower_bound(&[0, 0]), 1);
        let samples: Vec<Vec<u8>> = vec![
            vec![1],
            vec![255],
            b"Hello".to_vec(),
            vec![0, 0, 1, 0, 0, 0],
            vec![0xFF; 100],
            (1..=255).collect(),
            vec![1; 1000],
        ];
        for bytes in samples {
            assert!(encoded_len_lower_bound(&bytes) <= encode(&bytes).len());
        }
        // Tight for large inputs.
        let bytes = vec![0xFF; 1000];
        assert!(encode(&bytes).len() - encoded_len_lower_bound(&bytes) <= 2);
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('A'), Some(10));
        assert_eq!(digit_value('a'), Some(36));
        assert_eq!(digit_value('z'), Some(61));
        assert_eq!(digit_value('_'), None);
    }
}
