//! Steem role keys: seed-based secp256k1 keypairs and their WIF / `STM`
//! string encodings.
//!
//! Steem derives each role key from the SHA-256 digest of the concatenation
//! `account ‖ role ‖ passphrase`. The derived keys must be accepted as
//! account credentials by the Steem network, so the seed layout and both
//! string encodings follow the steem reference implementation bit-for-bit:
//! private keys are WIF (`0x80 ‖ scalar ‖ sha256d-checksum`, Base58), public
//! keys are `"STM"` plus the Base58 of the compressed point with a 4-byte
//! RIPEMD-160 checksum.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::base58;
use super::brainkey::WIF_VERSION;
use super::error::KeyError;

/// Prefix marker on Steem public key strings.
pub const PUBLIC_KEY_PREFIX: &str = "STM";

/// The four Steem authority roles, in the order the credential set lists
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Full account control; can change every other key.
    Owner,
    /// Funds and most account operations.
    Active,
    /// Day-to-day content signing.
    Posting,
    /// Encrypted memo access.
    Memo,
}

impl KeyRole {
    /// All roles, in derivation order.
    pub const ALL: [Self; 4] = [Self::Owner, Self::Active, Self::Posting, Self::Memo];

    /// The role name as it enters the derivation seed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Active => "active",
            Self::Posting => "posting",
            Self::Memo => "memo",
        }
    }
}

impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Steem private key (secp256k1 secret scalar).
#[derive(Clone)]
pub struct PrivateKey {
    secret: k256::SecretKey,
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose the scalar.
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl PrivateKey {
    /// Derive the key for `role` on `account` from a brain-key passphrase.
    ///
    /// The seed is the exact concatenation `account ‖ role ‖ passphrase`
    /// hashed with SHA-256, per the Steem reference convention.
    pub fn from_role(account: &str, role: KeyRole, passphrase: &str) -> Result<Self, KeyError> {
        let seed = Zeroizing::new(format!("{account}{role}{passphrase}"));
        Self::from_seed(&seed)
    }

    /// Derive a key from an arbitrary seed string.
    pub fn from_seed(seed: &str) -> Result<Self, KeyError> {
        let digest: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(seed.as_bytes()).into());
        let secret =
            k256::SecretKey::from_slice(&digest[..]).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self { secret })
    }

    /// Decode a WIF string back into a private key.
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let raw = Zeroizing::new(base58::decode(wif)?);
        if raw.len() != 1 + 32 + 4 {
            return Err(KeyError::invalid_wif(format!(
                "expected 37 bytes, got {}",
                raw.len()
            )));
        }
        if raw[0] != WIF_VERSION {
            return Err(KeyError::invalid_wif(format!(
                "unexpected version byte {:#04x}",
                raw[0]
            )));
        }
        let check = base58::checksum(&raw[..33]);
        if raw[33..] != check[..] {
            return Err(KeyError::ChecksumMismatch);
        }
        let secret =
            k256::SecretKey::from_slice(&raw[1..33]).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self { secret })
    }

    /// Encode as WIF: `0x80 ‖ scalar ‖ checksum`, Base58.
    ///
    /// Steem WIF carries no compressed-point flag byte.
    #[must_use]
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(1 + 32 + 4));
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.secret.to_bytes());
        let check = base58::checksum(&payload);
        payload.extend_from_slice(&check);
        base58::encode(&payload)
    }

    /// The corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: self.secret.public_key(),
        }
    }
}

/// A Steem public key (secp256k1 point).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: k256::PublicKey,
}

impl PublicKey {
    /// Encode as a Steem public key string: `"STM"` plus the Base58 of the
    /// compressed point followed by the first 4 bytes of its RIPEMD-160.
    #[must_use]
    pub fn to_steem_string(&self) -> String {
        self.to_prefixed_string(PUBLIC_KEY_PREFIX)
    }

    /// Encode with an explicit chain prefix.
    #[must_use]
    pub fn to_prefixed_string(&self, prefix: &str) -> String {
        let compressed = self.point.to_encoded_point(true);
        let digest = Ripemd160::digest(compressed.as_bytes());
        let mut payload = Vec::with_capacity(33 + 4);
        payload.extend_from_slice(compressed.as_bytes());
        payload.extend_from_slice(&digest[..4]);
        format!("{prefix}{}", base58::encode(&payload))
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_steem_string())
    }
}

/// Convert a WIF private key to its Steem public key string.
///
/// Decodes the WIF, derives the curve point, and re-encodes — the inverse
/// direction of the derivation pipeline, used when only the WIF survives.
pub fn wif_to_public(wif: &str) -> Result<String, KeyError> {
    Ok(PrivateKey::from_wif(wif)?.public_key().to_steem_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASS: &str = "P5HpjE2Hs7vjU4SN3YyPQCdhzCu92WoEeuE6PWNuiPyTu3ESGnzn";

    #[test]
    fn role_names_enter_the_seed_lowercase() {
        for (role, name) in KeyRole::ALL.iter().zip(["owner", "active", "posting", "memo"]) {
            assert_eq!(role.as_str(), name);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = PrivateKey::from_role("tagai", KeyRole::Posting, PASS).unwrap();
        let b = PrivateKey::from_role("tagai", KeyRole::Posting, PASS).unwrap();
        assert_eq!(a.to_wif(), b.to_wif());
    }

    #[test]
    fn roles_yield_independent_keys() {
        let mut wifs: Vec<String> = KeyRole::ALL
            .iter()
            .map(|&role| PrivateKey::from_role("tagai", role, PASS).unwrap().to_wif())
            .collect();
        wifs.sort();
        wifs.dedup();
        assert_eq!(wifs.len(), 4);
    }

    #[test]
    fn account_is_part_of_the_seed() {
        let a = PrivateKey::from_role("tagai", KeyRole::Owner, PASS).unwrap();
        let b = PrivateKey::from_role("other", KeyRole::Owner, PASS).unwrap();
        assert_ne!(a.to_wif(), b.to_wif());
    }

    #[test]
    fn known_posting_vector() {
        // Reference vector for account "tagai" and the brain key derived
        // from the all-0x01 EVM private key.
        let key = PrivateKey::from_role("tagai", KeyRole::Posting, PASS).unwrap();
        assert_eq!(key.to_wif(), "5KWmRed8edJiaHu6bGUQXsa7D9YBFNLBewSUCKegp2yyRszwAQA");
        assert_eq!(
            key.public_key().to_steem_string(),
            "STM6jRyhWAeYdvzZfJ6QxbRYbNutmwWw9qgzMWKEBK24XHGytAXTG"
        );
    }

    #[test]
    fn wif_round_trips() {
        let key = PrivateKey::from_role("tagai", KeyRole::Active, PASS).unwrap();
        let wif = key.to_wif();
        let decoded = PrivateKey::from_wif(&wif).unwrap();
        assert_eq!(decoded.to_wif(), wif);
    }

    #[test]
    fn wif_to_public_matches_direct_derivation() {
        let key = PrivateKey::from_role("tagai", KeyRole::Memo, PASS).unwrap();
        assert_eq!(
            wif_to_public(&key.to_wif()).unwrap(),
            key.public_key().to_steem_string()
        );
    }

    #[test]
    fn from_wif_rejects_corruption() {
        let key = PrivateKey::from_role("tagai", KeyRole::Owner, PASS).unwrap();
        let wif = key.to_wif();

        // Flip one character into a different alphabet character.
        let mut corrupted: Vec<u8> = wif.clone().into_bytes();
        let last = *corrupted.last().unwrap();
        corrupted[wif.len() - 1] = if last == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert!(PrivateKey::from_wif(&corrupted).is_err());

        // Truncation changes the payload length.
        assert!(matches!(
            PrivateKey::from_wif(&wif[..wif.len() - 2]),
            Err(KeyError::InvalidWif(_))
        ));
    }

    #[test]
    fn debug_never_prints_the_scalar() {
        let key = PrivateKey::from_role("tagai", KeyRole::Owner, PASS).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("redacted"));
        assert!(!rendered.contains(&key.to_wif()));
    }
}
