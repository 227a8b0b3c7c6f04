//! Error type for Steem key derivation.

/// Error type for Steem credential derivation failures.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum KeyError {
    /// The EVM private key is not valid 32-byte hex.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// A character outside the Base58 alphabet was encountered.
    #[error("invalid base58 character '{0}'")]
    InvalidBase58(char),

    /// A WIF string has the wrong length or version byte.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    /// A WIF checksum did not match its payload.
    #[error("WIF checksum mismatch")]
    ChecksumMismatch,

    /// The derived scalar is not a valid secp256k1 secret key.
    #[error("derived scalar is not a valid secp256k1 key")]
    InvalidScalar,
}

impl KeyError {
    /// Create an invalid private key error.
    #[must_use]
    pub fn invalid_private_key(msg: impl Into<String>) -> Self {
        Self::InvalidPrivateKey(msg.into())
    }

    /// Create an invalid WIF error.
    #[must_use]
    pub fn invalid_wif(msg: impl Into<String>) -> Self {
        Self::InvalidWif(msg.into())
    }
}
