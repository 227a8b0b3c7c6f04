//! EVM-compatible wallet implementation.
//!
//! Provides [`EvmWallet`] for querying balances and submitting transactions
//! on EVM-compatible chains (BNB Chain in the default deployment), plus
//! offline helpers for wallet creation and EIP-191 message signing. Built on
//! [`alloy`] for signing and RPC communication.

use alloy::network::Ethereum;
use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;
use serde::Serialize;
use tracing::info;

use super::erc20::{Erc20Balance, IERC20};
use super::error::WalletError;

/// Default BNB Chain (BSC) JSON-RPC endpoint.
pub const DEFAULT_BNB_RPC: &str = "https://bsc-dataseed2.binance.org";

/// A freshly generated EVM keypair.
///
/// Serializing this struct emits the private key — that is the purpose of
/// wallet creation. The `Debug` impl redacts it.
#[derive(Clone, Serialize)]
pub struct NewWallet {
    /// Checksummed wallet address.
    pub address: String,
    /// Private key as 0x-prefixed hex.
    #[serde(rename = "privateKey")]
    pub private_key: String,
}

impl std::fmt::Debug for NewWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewWallet")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Generate a new random EVM wallet on the local machine.
#[must_use]
pub fn create_wallet() -> NewWallet {
    let signer = PrivateKeySigner::random();
    NewWallet {
        address: signer.address().to_checksum(None),
        private_key: format!("0x{}", alloy::primitives::hex::encode(signer.to_bytes())),
    }
}

/// Sign an arbitrary message with an EVM private key (EIP-191
/// `personal_sign`).
///
/// Fully offline. Returns the 65-byte signature as 0x-prefixed hex.
pub fn sign_message(private_key: &str, message: &str) -> Result<String, WalletError> {
    let signer = signer_from_private_key(private_key)?;
    let sig = signer
        .sign_message_sync(message.as_bytes())
        .map_err(|e| WalletError::Signing(format!("message signing failed: {e}")))?;
    Ok(format!(
        "0x{}",
        alloy::primitives::hex::encode(sig.as_bytes())
    ))
}

/// Create a signer from a raw private key hex string.
fn signer_from_private_key(key: &str) -> Result<PrivateKeySigner, WalletError> {
    let key = key.strip_prefix("0x").unwrap_or(key);
    key.parse::<PrivateKeySigner>()
        .map_err(|e| WalletError::Config(format!("invalid private key: {e}")))
}

/// Builder for constructing an [`EvmWallet`].
///
/// Created by [`EvmWallet::builder`]. Use method chaining to configure the
/// wallet, then call [`build`](Self::build).
///
/// # Examples
///
/// ```rust,ignore
/// // Read-only wallet for balance queries
/// let wallet = EvmWallet::builder()
///     .rpc_url("https://bsc-dataseed2.binance.org")
///     .build()
///     .await?;
///
/// // Signing wallet from a private key
/// let wallet = EvmWallet::builder()
///     .private_key("0xabc...")
///     .rpc_url("https://bsc-dataseed2.binance.org")
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct EvmWalletBuilder {
    /// Raw private key hex string. Optional: balance queries work without
    /// one.
    private_key: Option<String>,
    /// JSON-RPC endpoint URL.
    rpc_url: Option<String>,
    /// Chain ID (auto-detected if not set).
    chain_id: Option<u64>,
}

impl std::fmt::Debug for EvmWalletBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWalletBuilder")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl EvmWalletBuilder {
    /// Set the private key (hex string, with or without 0x prefix).
    #[must_use]
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Set the JSON-RPC endpoint URL.
    #[must_use]
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set the chain ID explicitly (auto-detected from RPC if not set).
    #[must_use]
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Build the [`EvmWallet`]. `rpc_url` is required.
    pub async fn build(mut self) -> Result<EvmWallet, WalletError> {
        let rpc_url = self
            .rpc_url
            .take()
            .ok_or_else(|| WalletError::Config("rpc_url is required".into()))?;

        let signer = self
            .private_key
            .as_deref()
            .map(signer_from_private_key)
            .transpose()?;

        // Build provider with recommended fillers; attach the wallet when
        // a signer is configured so transactions get signed locally.
        let provider: DynProvider<Ethereum> = if let Some(signer) = signer.clone() {
            ProviderBuilder::new()
                .wallet(signer)
                .connect(&rpc_url)
                .await
                .map_err(|e| {
                    WalletError::Provider(format!("failed to connect to '{rpc_url}': {e}"))
                })?
                .erased()
        } else {
            ProviderBuilder::new()
                .connect(&rpc_url)
                .await
                .map_err(|e| {
                    WalletError::Provider(format!("failed to connect to '{rpc_url}': {e}"))
                })?
                .erased()
        };

        // Auto-detect chain ID if not explicitly set.
        let chain_id = if let Some(id) = self.chain_id {
            id
        } else {
            provider
                .get_chain_id()
                .await
                .map_err(|e| WalletError::Provider(format!("failed to get chain ID: {e}")))?
        };

        if let Some(signer) = &signer {
            info!(
                address = %signer.address(),
                chain_id = chain_id,
                "EVM wallet initialized",
            );
        }

        Ok(EvmWallet {
            signer,
            provider,
            chain_id,
        })
    }
}

/// An EVM-compatible wallet for agent blockchain interactions.
///
/// Combines an optional local signer ([`alloy`] `PrivateKeySigner`) with a
/// type-erased RPC provider. Without a signer the wallet is read-only:
/// balance queries work, transfers return a configuration error.
pub struct EvmWallet {
    /// Local signer for transaction signing; `None` for read-only wallets.
    signer: Option<PrivateKeySigner>,
    /// Type-erased provider for RPC calls.
    provider: DynProvider<Ethereum>,
    /// The chain ID this wallet is connected to.
    chain_id: u64,
}

impl std::fmt::Debug for EvmWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWallet")
            .field("address", &self.signer.as_ref().map(PrivateKeySigner::address))
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl EvmWallet {
    /// Create a builder for constructing an [`EvmWallet`].
    #[must_use]
    pub fn builder() -> EvmWalletBuilder {
        EvmWalletBuilder::default()
    }

    /// The wallet's address, if a signer is configured.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        self.signer.as_ref().map(PrivateKeySigner::address)
    }

    /// The chain ID.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the native token balance (in wei) for any address.
    pub async fn balance_of(&self, address: Address) -> Result<U256, WalletError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| WalletError::Provider(format!("failed to get balance: {e}")))
    }

    /// Get an address's balance in an ERC-20 token, with token metadata.
    ///
    /// `symbol` falls back to `"UNKNOWN"` when the contract does not
    /// implement it.
    pub async fn erc20_balance(
        &self,
        token: Address,
        holder: Address,
    ) -> Result<Erc20Balance, WalletError> {
        let contract = IERC20::new(token, self.provider.clone());

        let raw = contract
            .balanceOf(holder)
            .call()
            .await
            .map_err(|e| WalletError::Provider(format!("balanceOf failed: {e}")))?;
        let decimals = contract
            .decimals()
            .call()
            .await
            .map_err(|e| WalletError::Provider(format!("decimals failed: {e}")))?;
        let symbol = contract
            .symbol()
            .call()
            .await
            .unwrap_or_else(|_| "UNKNOWN".to_string());

        let formatted = format_units(raw, decimals)
            .map_err(|e| WalletError::Provider(format!("failed to format balance: {e}")))?;

        Ok(Erc20Balance {
            raw: raw.to_string(),
            formatted,
            symbol,
            decimals,
        })
    }

    /// Query an ERC-20 token's `decimals`.
    pub async fn erc20_decimals(&self, token: Address) -> Result<u8, WalletError> {
        IERC20::new(token, self.provider.clone())
            .decimals()
            .call()
            .await
            .map_err(|e| WalletError::Provider(format!("decimals failed: {e}")))
    }

    /// Send native token to an address. Waits for the receipt and returns
    /// the transaction hash.
    pub async fn transfer(&self, to: Address, value: U256) -> Result<String, WalletError> {
        use alloy::network::TransactionBuilder;
        use alloy::rpc::types::TransactionRequest;

        self.require_signer()?;
        let tx = TransactionRequest::default().with_to(to).with_value(value);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| WalletError::Transaction(format!("send failed: {e}")))?
            .get_receipt()
            .await
            .map_err(|e| WalletError::Transaction(format!("receipt failed: {e}")))?;

        Ok(format!("{:#x}", receipt.transaction_hash))
    }

    /// Send ERC-20 tokens to an address. `amount` is in the token's smallest
    /// unit. Waits for the receipt and returns the transaction hash.
    pub async fn transfer_erc20(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<String, WalletError> {
        self.require_signer()?;
        let contract = IERC20::new(token, self.provider.clone());

        let receipt = contract
            .transfer(to, amount)
            .send()
            .await
            .map_err(|e| WalletError::Transaction(format!("send failed: {e}")))?
            .get_receipt()
            .await
            .map_err(|e| WalletError::Transaction(format!("receipt failed: {e}")))?;

        Ok(format!("{:#x}", receipt.transaction_hash))
    }

    fn require_signer(&self) -> Result<(), WalletError> {
        if self.signer.is_none() {
            return Err(WalletError::Config(
                "wallet has no signer; a private key is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_ONES: &str = "0x0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn create_wallet_yields_well_formed_pair() {
        let wallet = create_wallet();
        assert!(wallet.address.parse::<Address>().is_ok());
        assert!(wallet.private_key.starts_with("0x"));
        assert_eq!(wallet.private_key.len(), 2 + 64);
    }

    #[test]
    fn create_wallet_address_matches_key() {
        let wallet = create_wallet();
        let signer = signer_from_private_key(&wallet.private_key).unwrap();
        assert_eq!(signer.address().to_checksum(None), wallet.address);
    }

    #[test]
    fn sign_message_is_deterministic_hex() {
        let a = sign_message(KEY_ONES, "hello tagclaw").unwrap();
        let b = sign_message(KEY_ONES, "hello tagclaw").unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("0x"));
        // 65 signature bytes as hex.
        assert_eq!(a.len(), 2 + 130);
    }

    #[test]
    fn sign_message_rejects_bad_keys() {
        assert!(sign_message("0x01", "msg").is_err());
        assert!(sign_message("not-hex", "msg").is_err());
    }

    #[tokio::test]
    async fn builder_requires_rpc_url() {
        let err = EvmWallet::builder().build().await.unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn builder_rejects_malformed_rpc_url() {
        let result =
            tokio_test::block_on(EvmWallet::builder().rpc_url("definitely not a url").build());
        assert!(matches!(result, Err(WalletError::Provider(_))));
    }

    #[test]
    fn new_wallet_debug_redacts_the_key() {
        let wallet = create_wallet();
        let rendered = format!("{wallet:?}");
        assert!(!rendered.contains(&wallet.private_key));
        assert!(rendered.contains("<redacted>"));
    }
}
