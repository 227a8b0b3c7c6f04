//! tagclaw-wallet CLI — wallet capabilities for agents, JSON output only.
//!
//! Every successful command prints exactly one line of JSON to stdout so an
//! agent can parse the result and act on it. Errors go to stderr and exit
//! with code 1. Logging is routed to stderr to keep stdout machine-clean.

// A JSON-on-stdout CLI prints by design.
#![allow(clippy::print_stdout)]

use alloy::primitives::utils::{format_ether, format_units, parse_ether, parse_units};
use alloy::primitives::{Address, U256};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tagclaw_wallet::steem::generate_steem_keys;
use tagclaw_wallet::wallet::{DEFAULT_BNB_RPC, EvmWallet, create_wallet, sign_message};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// tagclaw-wallet — EVM wallet operations and Steem credential derivation.
#[derive(Parser, Debug)]
#[command(name = "tagclaw-wallet")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (stderr).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new random EVM wallet.
    CreateWallet,

    /// Derive the Steem role-key credential set from an EVM private key.
    SteemKeys {
        /// EVM private key (0x-prefixed hex).
        #[arg(long)]
        private_key: String,
    },

    /// Sign a message with an EVM private key (EIP-191 personal_sign).
    Sign {
        /// EVM private key (0x-prefixed hex).
        #[arg(long)]
        private_key: String,
        /// The message to sign (UTF-8).
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Query the native BNB balance of an address.
    BalanceBnb {
        /// Address to query (0x-prefixed hex).
        #[arg(long)]
        address: String,
        /// JSON-RPC endpoint.
        #[arg(long, env = "TAGCLAW_BNB_RPC", default_value = DEFAULT_BNB_RPC)]
        rpc_url: String,
    },

    /// Query an address's balance in an ERC-20 token.
    BalanceErc20 {
        /// Holder address (0x-prefixed hex).
        #[arg(long)]
        address: String,
        /// ERC-20 contract address (0x-prefixed hex).
        #[arg(long)]
        token: String,
        /// JSON-RPC endpoint.
        #[arg(long, env = "TAGCLAW_BNB_RPC", default_value = DEFAULT_BNB_RPC)]
        rpc_url: String,
    },

    /// Transfer native BNB.
    TransferBnb {
        /// Sender private key (0x-prefixed hex).
        #[arg(long)]
        private_key: String,
        /// Recipient address (0x-prefixed hex).
        #[arg(long)]
        to: String,
        /// Amount in BNB (decimal, e.g. "0.01").
        #[arg(long)]
        amount: String,
        /// JSON-RPC endpoint.
        #[arg(long, env = "TAGCLAW_BNB_RPC", default_value = DEFAULT_BNB_RPC)]
        rpc_url: String,
    },

    /// Transfer ERC-20 tokens.
    TransferErc20 {
        /// Sender private key (0x-prefixed hex).
        #[arg(long)]
        private_key: String,
        /// ERC-20 contract address (0x-prefixed hex).
        #[arg(long)]
        token: String,
        /// Recipient address (0x-prefixed hex).
        #[arg(long)]
        to: String,
        /// Amount in token units (decimal, scaled by the token's decimals).
        #[arg(long)]
        amount: String,
        /// JSON-RPC endpoint.
        #[arg(long, env = "TAGCLAW_BNB_RPC", default_value = DEFAULT_BNB_RPC)]
        rpc_url: String,
    },
}

/// Native balance output shape.
#[derive(Debug, Serialize)]
struct BnbBalance {
    wei: String,
    ether: String,
}

/// Transfer output shape.
#[derive(Debug, Serialize)]
struct TransferReceipt {
    #[serde(rename = "txHash")]
    tx_hash: String,
    from: String,
    to: String,
    amount: String,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tagclaw_wallet=debug,tagclaw_cli=debug")
    } else {
        EnvFilter::new("tagclaw_wallet=warn,tagclaw_cli=warn")
    };

    // stderr only: stdout is reserved for the JSON result line.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn parse_address(input: &str) -> anyhow::Result<Address> {
    input
        .parse()
        .with_context(|| format!("invalid address '{input}'"))
}

fn emit(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::CreateWallet => {
            emit(&create_wallet())?;
        }

        Command::SteemKeys { private_key } => {
            let creds = generate_steem_keys(&private_key)?;
            emit(&creds)?;
        }

        Command::Sign {
            private_key,
            message,
        } => {
            let signature = sign_message(&private_key, &message)?;
            emit(&serde_json::json!({ "signature": signature }))?;
        }

        Command::BalanceBnb { address, rpc_url } => {
            let address = parse_address(&address)?;
            let wallet = EvmWallet::builder().rpc_url(rpc_url).build().await?;
            let wei = wallet.balance_of(address).await?;
            emit(&BnbBalance {
                wei: wei.to_string(),
                ether: format_ether(wei),
            })?;
        }

        Command::BalanceErc20 {
            address,
            token,
            rpc_url,
        } => {
            let address = parse_address(&address)?;
            let token = parse_address(&token)?;
            let wallet = EvmWallet::builder().rpc_url(rpc_url).build().await?;
            let balance = wallet.erc20_balance(token, address).await?;
            emit(&balance)?;
        }

        Command::TransferBnb {
            private_key,
            to,
            amount,
            rpc_url,
        } => {
            let to = parse_address(&to)?;
            let value: U256 =
                parse_ether(&amount).with_context(|| format!("invalid amount '{amount}'"))?;
            let wallet = EvmWallet::builder()
                .private_key(private_key)
                .rpc_url(rpc_url)
                .build()
                .await?;
            let tx_hash = wallet.transfer(to, value).await?;
            emit(&TransferReceipt {
                tx_hash,
                from: wallet
                    .address()
                    .map(|a| a.to_checksum(None))
                    .unwrap_or_default(),
                to: to.to_checksum(None),
                amount,
            })?;
        }

        Command::TransferErc20 {
            private_key,
            token,
            to,
            amount,
            rpc_url,
        } => {
            let token = parse_address(&token)?;
            let to = parse_address(&to)?;
            let wallet = EvmWallet::builder()
                .private_key(private_key)
                .rpc_url(rpc_url)
                .build()
                .await?;
            let decimals = wallet.erc20_decimals(token).await?;
            let value: U256 = parse_units(&amount, decimals)
                .with_context(|| format!("invalid amount '{amount}'"))?
                .get_absolute();
            let tx_hash = wallet.transfer_erc20(token, to, value).await?;
            emit(&TransferReceipt {
                tx_hash,
                from: wallet
                    .address()
                    .map(|a| a.to_checksum(None))
                    .unwrap_or_default(),
                to: to.to_checksum(None),
                amount: format_units(value, decimals)
                    .with_context(|| "failed to format amount")?,
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_use_the_expected_names() {
        let cmd = Args::command();
        let mut names: Vec<&str> = cmd
            .get_subcommands()
            .map(clap::Command::get_name)
            .filter(|&name| name != "help")
            .collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "balance-bnb",
                "balance-erc20",
                "create-wallet",
                "sign",
                "steem-keys",
                "transfer-bnb",
                "transfer-erc20",
            ]
        );
    }
}
