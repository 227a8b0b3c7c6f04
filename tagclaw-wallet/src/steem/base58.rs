//! Base58Check primitives: the Base58 codec and the double-SHA-256 checksum.
//!
//! Steem shares the Bitcoin Base58 alphabet (alphanumerics minus the visually
//! ambiguous `0`, `O`, `I`, `l`). Encoding treats the input as one big-endian
//! unsigned integer and repeatedly divides by 58; leading zero bytes are
//! preserved as leading `'1'` characters, since the pure integer encoding
//! would otherwise lose them.

use sha2::{Digest, Sha256};

use super::error::KeyError;

/// The 58-character Base58 alphabet shared by Bitcoin and Steem.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode a byte buffer as Base58.
///
/// An empty buffer encodes to the empty string; an all-zero buffer encodes to
/// one `'1'` per byte.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base58 digits, least-significant first. log(256) / log(58) ≈ 1.37.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 137 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut digits {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.push_str(&"1".repeat(zeros));
    for &digit in digits.iter().rev() {
        out.push(char::from(ALPHABET[usize::from(digit)]));
    }
    out
}

/// Decode a Base58 string back into bytes.
///
/// Only needed for the WIF → public-key path; the derivation pipeline itself
/// never decodes.
pub fn decode(input: &str) -> Result<Vec<u8>, KeyError> {
    let zeros = input.bytes().take_while(|&b| b == b'1').count();

    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for c in input.bytes().skip(zeros) {
        let value = ALPHABET
            .iter()
            .position(|&a| a == c)
            .ok_or(KeyError::InvalidBase58(char::from(c)))?;
        let mut carry = value as u32;
        for byte in &mut bytes {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// First 4 bytes of `SHA-256(SHA-256(data))`, the Base58Check checksum.
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn single_zero_byte_encodes_to_one() {
        assert_eq!(encode(&[0]), "1");
    }

    #[test]
    fn all_zero_input_yields_only_markers() {
        assert_eq!(encode(&[0, 0, 0]), "111");
    }

    #[test]
    fn leading_zero_is_preserved() {
        // 0x00 0x01 → one '1' marker, then the digit for the value 1.
        assert_eq!(encode(&[0, 1]), "12");
    }

    #[test]
    fn known_vector() {
        // "hello" as bytes, cross-checked against the bitcoin reference.
        assert_eq!(encode(b"hello"), "Cn8eVZg");
    }

    #[test]
    fn output_stays_inside_the_alphabet() {
        let encoded = encode(&[0x00, 0xff, 0x34, 0x7a, 0x00, 0x19]);
        assert!(encoded.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn decode_inverts_encode() {
        let cases: &[&[u8]] = &[b"", &[0], &[0, 1], &[0, 0, 0xff], b"hello", &[0x80; 37]];
        for &case in cases {
            assert_eq!(decode(&encode(case)).unwrap(), case);
        }
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        assert!(matches!(decode("0abc"), Err(KeyError::InvalidBase58('0'))));
        assert!(matches!(decode("ab!c"), Err(KeyError::InvalidBase58('!'))));
    }

    #[test]
    fn checksum_is_deterministic_and_four_bytes() {
        let a = checksum(b"payload");
        let b = checksum(b"payload");
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert_ne!(checksum(b"payload"), checksum(b"payloae"));
    }
}
