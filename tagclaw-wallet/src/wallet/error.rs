//! Error type for wallet operations.

/// Error type for EVM wallet operations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum WalletError {
    /// Invalid wallet configuration (missing or malformed inputs).
    #[error("wallet configuration error: {0}")]
    Config(String),

    /// RPC provider error (connection, query, chain-id detection).
    #[error("provider error: {0}")]
    Provider(String),

    /// Message or transaction signing failed.
    #[error("signing error: {0}")]
    Signing(String),

    /// Transaction submission or confirmation failed.
    #[error("transaction error: {0}")]
    Transaction(String),
}

impl WalletError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider error.
    #[must_use]
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
