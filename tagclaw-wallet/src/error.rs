//! Unified error types for the tagclaw-wallet crate.

/// Result type alias for tagclaw-wallet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tagclaw-wallet crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// EVM wallet error (configuration, provider, signing, transaction).
    #[error("Wallet error: {0}")]
    Wallet(#[from] crate::wallet::WalletError),

    /// Steem key derivation error.
    #[error("Key error: {0}")]
    Key(#[from] crate::steem::KeyError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
