//! Minimal wallet capabilities for local agents.
//!
//! `tagclaw-wallet` gives an agent running on the local machine two things:
//!
//! - **EVM wallet operations** ([`wallet`]): keypair generation, EIP-191
//!   message signing, and BNB / ERC-20 balance queries and transfers against
//!   an EVM-compatible JSON-RPC endpoint, built on [`alloy`].
//! - **Deterministic Steem credentials** ([`steem`]): derives a full Steem
//!   role-key set (owner / active / posting / memo) from a single EVM private
//!   key, in the exact format the TagClaw registration flow expects.
//!
//! The Steem derivation is a pure function of its inputs: the EVM private key
//! is shaped into a Base58Check "brain key" passphrase, and each role key is
//! generated from a SHA-256 seed of `(account, role, passphrase)` following
//! the Steem reference convention. Same key in, same credentials out, on
//! every call.
//!
//! No key material is ever persisted or logged by this crate. Callers own
//! the lifecycle of every private key they pass in or get back.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagclaw_wallet::{steem, wallet};
//!
//! // Fresh EVM wallet plus the Steem credentials derived from it.
//! let new = wallet::create_wallet();
//! let creds = steem::generate_steem_keys(&new.private_key)?;
//! assert!(creds.owner.starts_with("STM"));
//!
//! // Balance query against BSC.
//! let w = wallet::EvmWallet::builder()
//!     .rpc_url("https://bsc-dataseed2.binance.org")
//!     .build()
//!     .await?;
//! let wei = w.balance_of(new.address.parse()?).await?;
//! ```

pub mod error;
pub mod steem;
pub mod wallet;

pub use error::{Error, Result};
pub use steem::{SteemCredentials, generate_steem_keys};
pub use wallet::{EvmWallet, EvmWalletBuilder, NewWallet, WalletError, create_wallet, sign_message};
