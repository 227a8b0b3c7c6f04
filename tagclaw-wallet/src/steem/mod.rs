//! Deterministic Steem credential derivation.
//!
//! This module turns one EVM private key into the full credential set of a
//! Steem account, in the format the TagClaw registration flow consumes.
//!
//! # Architecture
//!
//! ```text
//! EVM private key (32-byte hex)
//!   └── brainkey::brain_key_from_evm_key()   'P' + Base58Check(0x80 ‖ key)
//!         └── keys::PrivateKey::from_role()  sha256(account ‖ role ‖ pass)
//!               ├── owner / active / posting / memo
//!               └── generate_steem_keys()    → SteemCredentials
//! ```
//!
//! Every step is a pure function: the same EVM key always yields the same
//! four keypairs, and the four roles are cryptographically unrelated despite
//! sharing the passphrase. Nothing here touches the network, stores keys, or
//! logs key material.

pub mod base58;
pub mod brainkey;
mod error;
pub mod keys;

use serde::Serialize;

pub use brainkey::{BRAIN_KEY_MARKER, WIF_VERSION, brain_key_from_evm_key};
pub use error::KeyError;
pub use keys::{KeyRole, PUBLIC_KEY_PREFIX, PrivateKey, PublicKey, wif_to_public};

/// The fixed account name all TagClaw derivations are namespaced under.
///
/// This is part of the key-derivation seed, not a label: changing it changes
/// every derived key.
pub const STEEM_ACCOUNT: &str = "tagai";

/// The credential set derived from one EVM private key.
///
/// Public keys for all four roles, plus the private key of the posting role
/// only — posting is the key used for day-to-day signing, so callers need
/// its private form immediately. Field names serialize to the exact JSON
/// shape TagClaw registration expects.
///
/// Serializing this struct emits the posting private key; that is the whole
/// point of the type. The `Debug` impl, by contrast, redacts it so the
/// secret cannot leak through logs or error messages.
#[derive(Clone, Serialize)]
pub struct SteemCredentials {
    /// Posting role public key.
    #[serde(rename = "postingPub")]
    pub posting_pub: String,
    /// Posting role private key (WIF).
    #[serde(rename = "postingPri")]
    pub posting_pri: String,
    /// Owner role public key.
    pub owner: String,
    /// Active role public key.
    pub active: String,
    /// Memo role public key.
    pub memo: String,
}

impl std::fmt::Debug for SteemCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteemCredentials")
            .field("posting_pub", &self.posting_pub)
            .field("posting_pri", &"<redacted>")
            .field("owner", &self.owner)
            .field("active", &self.active)
            .field("memo", &self.memo)
            .finish()
    }
}

/// Derive the full Steem credential set from an EVM private key.
///
/// Accepts the key as hex with or without a `0x` prefix; anything that is
/// not exactly 32 bytes is rejected.
pub fn generate_steem_keys(evm_private_key: &str) -> Result<SteemCredentials, KeyError> {
    generate_steem_keys_for_account(STEEM_ACCOUNT, evm_private_key)
}

/// Derive the credential set under an explicit account name.
///
/// [`generate_steem_keys`] fixes the account to [`STEEM_ACCOUNT`]; this
/// variant exists so tests can substitute the namespace without touching the
/// derivation logic.
pub fn generate_steem_keys_for_account(
    account: &str,
    evm_private_key: &str,
) -> Result<SteemCredentials, KeyError> {
    let passphrase = brain_key_from_evm_key(evm_private_key)?;

    let owner = PrivateKey::from_role(account, KeyRole::Owner, &passphrase)?;
    let active = PrivateKey::from_role(account, KeyRole::Active, &passphrase)?;
    let posting = PrivateKey::from_role(account, KeyRole::Posting, &passphrase)?;
    let memo = PrivateKey::from_role(account, KeyRole::Memo, &passphrase)?;

    Ok(SteemCredentials {
        posting_pub: posting.public_key().to_steem_string(),
        posting_pri: posting.to_wif(),
        owner: owner.public_key().to_steem_string(),
        active: active.public_key().to_steem_string(),
        memo: memo.public_key().to_steem_string(),
    })
}
