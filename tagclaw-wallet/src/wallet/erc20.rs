//! Minimal ERC-20 interface: just what balance queries and transfers need.

use alloy::sol;
use serde::Serialize;

sol! {
    /// Subset of the ERC-20 standard used by the wallet.
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// An ERC-20 balance with its token metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Erc20Balance {
    /// Raw balance in the token's smallest unit, as a decimal string.
    pub raw: String,
    /// Balance scaled by the token's `decimals`.
    pub formatted: String,
    /// Token symbol, or `"UNKNOWN"` when the contract does not report one.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
}
