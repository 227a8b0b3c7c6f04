//! Wallet module for agent blockchain interactions.
//!
//! EVM-side capabilities of the crate: keypair generation, EIP-191 message
//! signing, and balance / transfer operations against an EVM-compatible
//! JSON-RPC endpoint.
//!
//! # Architecture
//!
//! ```text
//! create_wallet()              → NewWallet (offline, random keypair)
//! sign_message(key, msg)       → hex signature (offline, EIP-191)
//! EvmWallet (alloy signer + provider)
//!   ├── builder()              → EvmWalletBuilder → build()
//!   ├── balance_of()           → native balance in wei
//!   ├── erc20_balance()        → ERC-20 balance + metadata
//!   ├── transfer()             → send native token
//!   └── transfer_erc20()       → send ERC-20 tokens
//! ```

mod erc20;
mod error;
mod evm;

pub use erc20::Erc20Balance;
pub use error::WalletError;
pub use evm::{
    DEFAULT_BNB_RPC, EvmWallet, EvmWalletBuilder, NewWallet, create_wallet, sign_message,
};
