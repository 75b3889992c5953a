//! Supported chains and their native assets.
//!
//! Native-asset display rules live in a single table keyed by chain so
//! that multi-chain symbol handling stays in one auditable place.

use crate::entities::Token;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimals of every native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Chains the frontend can be connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// Ethereum Ropsten testnet.
    Ropsten,
    /// BNB Smart Chain.
    Bsc,
    /// BNB Smart Chain testnet.
    BscTestnet,
    /// Polygon.
    Matic,
    /// Polygon Mumbai testnet.
    MaticMumbai,
}

impl ChainId {
    /// All supported chains, in table order.
    pub const ALL: [ChainId; 6] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Bsc,
        ChainId::BscTestnet,
        ChainId::Matic,
        ChainId::MaticMumbai,
    ];

    /// Numeric EIP-155 chain id.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Bsc => 56,
            Self::BscTestnet => 97,
            Self::Matic => 137,
            Self::MaticMumbai => 80001,
        }
    }

    /// Looks a chain up by numeric id.
    pub fn from_id(id: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(DomainError::UnsupportedChain(id))
    }

    /// Display symbol of the chain's native asset.
    #[must_use]
    pub fn native_symbol(self) -> &'static str {
        native_asset(self).symbol
    }

    /// Wrapped native token used inside pairs on this chain.
    #[must_use]
    pub fn wrapped_native(self) -> Token {
        let asset = native_asset(self);
        Token::new(
            self,
            asset.wrapped_address,
            NATIVE_DECIMALS,
            asset.wrapped_symbol,
            asset.wrapped_name,
        )
    }
}

impl TryFrom<u64> for ChainId {
    type Error = DomainError;

    fn try_from(id: u64) -> Result<Self> {
        Self::from_id(id)
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Native asset of a chain and the token that wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeAsset {
    pub chain_id: ChainId,
    pub symbol: &'static str,
    pub name: &'static str,
    pub wrapped_address: &'static str,
    pub wrapped_symbol: &'static str,
    pub wrapped_name: &'static str,
}

// Same order as `ChainId::ALL`.
static NATIVE_ASSETS: [NativeAsset; 6] = [
    NativeAsset {
        chain_id: ChainId::Mainnet,
        symbol: "ETH",
        name: "Ether",
        wrapped_address: "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAsset {
        chain_id: ChainId::Ropsten,
        symbol: "ETH",
        name: "Ether",
        wrapped_address: "0xc778417E063141139Fce010982780140Aa0cD5Ab",
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAsset {
        chain_id: ChainId::Bsc,
        symbol: "BNB",
        name: "BNB",
        wrapped_address: "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
        wrapped_symbol: "WBNB",
        wrapped_name: "Wrapped BNB",
    },
    NativeAsset {
        chain_id: ChainId::BscTestnet,
        symbol: "BNB",
        name: "BNB",
        wrapped_address: "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd",
        wrapped_symbol: "WBNB",
        wrapped_name: "Wrapped BNB",
    },
    NativeAsset {
        chain_id: ChainId::Matic,
        symbol: "MATIC",
        name: "Matic",
        wrapped_address: "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270",
        wrapped_symbol: "WMATIC",
        wrapped_name: "Wrapped Matic",
    },
    NativeAsset {
        chain_id: ChainId::MaticMumbai,
        symbol: "MATIC",
        name: "Matic",
        wrapped_address: "0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889",
        wrapped_symbol: "WMATIC",
        wrapped_name: "Wrapped Matic",
    },
];

/// Returns the native asset entry for `chain`.
#[must_use]
pub fn native_asset(chain: ChainId) -> &'static NativeAsset {
    &NATIVE_ASSETS[chain as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_chains() {
        for chain in ChainId::ALL {
            assert_eq!(native_asset(chain).chain_id, chain);
        }
    }

    #[test]
    fn test_native_symbols_differ_across_families() {
        assert_eq!(ChainId::Mainnet.native_symbol(), "ETH");
        assert_eq!(ChainId::Bsc.native_symbol(), "BNB");
        assert_eq!(ChainId::Matic.native_symbol(), "MATIC");
        assert_eq!(ChainId::MaticMumbai.native_symbol(), "MATIC");
    }

    #[test]
    fn test_from_id() {
        assert_eq!(ChainId::from_id(56).unwrap(), ChainId::Bsc);
        assert_eq!(ChainId::from_id(80001).unwrap(), ChainId::MaticMumbai);
        assert_eq!(
            ChainId::from_id(42),
            Err(DomainError::UnsupportedChain(42))
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ChainId::Matic).unwrap();
        assert_eq!(json, "137");
        let chain: ChainId = serde_json::from_str("97").unwrap();
        assert_eq!(chain, ChainId::BscTestnet);
        assert!(serde_json::from_str::<ChainId>("5").is_err());
    }

    #[test]
    fn test_wrapped_native() {
        let weth = ChainId::Mainnet.wrapped_native();
        assert_eq!(weth.symbol, "WETH");
        assert_eq!(weth.decimals, NATIVE_DECIMALS);
        assert_eq!(weth.chain_id, ChainId::Mainnet);
    }
}
