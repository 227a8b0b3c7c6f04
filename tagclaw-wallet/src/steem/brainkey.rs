//! Brain-key derivation: EVM private key → deterministic Steem passphrase.
//!
//! The passphrase is shaped like a Bitcoin WIF string: the 32-byte key is
//! prefixed with the `0x80` version byte, suffixed with a 4-byte
//! double-SHA-256 checksum, Base58-encoded, and given a leading `'P'`
//! marker. The `0x80` byte is borrowed from Bitcoin's WIF convention purely
//! as a deterministic byte-shaping step; the result is never used as a
//! Bitcoin key. TagClaw registration depends on this exact layout, so none
//! of it can change.

use zeroize::Zeroizing;

use super::base58;
use super::error::KeyError;

/// Version byte prepended to the private key payload (Bitcoin WIF mainnet
/// convention, reused here for byte shaping only).
pub const WIF_VERSION: u8 = 0x80;

/// Marker character prepended to the encoded passphrase.
pub const BRAIN_KEY_MARKER: char = 'P';

/// Derive the brain-key passphrase from an EVM private key hex string.
///
/// The key may carry a `0x` prefix. Anything that does not decode to exactly
/// 32 bytes is rejected.
pub fn brain_key_from_evm_key(private_key_hex: &str) -> Result<String, KeyError> {
    let key = decode_private_key_hex(private_key_hex)?;
    Ok(brain_key_with_version(&key, WIF_VERSION, BRAIN_KEY_MARKER))
}

/// Decode a `0x`-optional hex private key into its 32 raw bytes.
fn decode_private_key_hex(private_key_hex: &str) -> Result<Zeroizing<[u8; 32]>, KeyError> {
    let hex_str = private_key_hex
        .strip_prefix("0x")
        .unwrap_or(private_key_hex);
    let bytes = Zeroizing::new(
        hex::decode(hex_str).map_err(|e| KeyError::invalid_private_key(e.to_string()))?,
    );
    if bytes.len() != 32 {
        return Err(KeyError::invalid_private_key(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Build the passphrase from raw key bytes, a version byte, and a marker.
///
/// Split out from [`brain_key_from_evm_key`] so tests can substitute the
/// constants without touching the derivation logic.
fn brain_key_with_version(key: &[u8; 32], version: u8, marker: char) -> String {
    // version ‖ key ‖ checksum(version ‖ key)
    let mut payload = Zeroizing::new(Vec::with_capacity(1 + 32 + 4));
    payload.push(version);
    payload.extend_from_slice(key);
    let check = base58::checksum(&payload);
    payload.extend_from_slice(&check);

    let mut out = String::with_capacity(1 + 50);
    out.push(marker);
    out.push_str(&base58::encode(&payload));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steem::base58;

    const KEY_ONES: &str = "0x0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn derivation_is_deterministic() {
        let a = brain_key_from_evm_key(KEY_ONES).unwrap();
        let b = brain_key_from_evm_key(KEY_ONES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prefix_is_optional() {
        let with = brain_key_from_evm_key(KEY_ONES).unwrap();
        let without = brain_key_from_evm_key(&KEY_ONES[2..]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            brain_key_from_evm_key(KEY_ONES).unwrap(),
            "P5HpjE2Hs7vjU4SN3YyPQCdhzCu92WoEeuE6PWNuiPyTu3ESGnzn"
        );
    }

    #[test]
    fn starts_with_marker_and_stays_in_alphabet() {
        let pass = brain_key_from_evm_key(KEY_ONES).unwrap();
        assert!(pass.starts_with(BRAIN_KEY_MARKER));
        assert!(pass[1..].bytes().all(|c| base58::ALPHABET.contains(&c)));
    }

    #[test]
    fn encodes_versioned_payload_with_checksum() {
        let pass = brain_key_from_evm_key(KEY_ONES).unwrap();
        let raw = base58::decode(&pass[1..]).unwrap();
        assert_eq!(raw.len(), 1 + 32 + 4);
        assert_eq!(raw[0], WIF_VERSION);
        assert_eq!(&raw[1..33], &[0x01; 32]);
        assert_eq!(&raw[33..], &base58::checksum(&raw[..33]));
    }

    #[test]
    fn rejects_short_long_and_malformed_keys() {
        assert!(brain_key_from_evm_key("0x0101").is_err());
        assert!(brain_key_from_evm_key(&format!("{KEY_ONES}01")).is_err());
        assert!(brain_key_from_evm_key("0xzz01010101010101010101010101010101010101010101010101010101010101").is_err());
        assert!(brain_key_from_evm_key("").is_err());
    }

    #[test]
    fn version_byte_changes_the_passphrase() {
        let key = [0x01u8; 32];
        let a = brain_key_with_version(&key, 0x80, 'P');
        let b = brain_key_with_version(&key, 0x00, 'P');
        assert_ne!(a, b);
    }
}
