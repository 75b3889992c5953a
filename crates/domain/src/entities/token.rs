use crate::chain::{ChainId, NATIVE_DECIMALS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ERC-20 style token. Identity is (chain, address), case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: String,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Pair ordering: tokens sort by lowercase address.
    #[must_use]
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address.to_ascii_lowercase() < other.address.to_ascii_lowercase()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.to_ascii_lowercase().hash(state);
    }
}

/// Either the chain's native asset or a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Native,
    Token(Token),
}

impl Currency {
    #[must_use]
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native => NATIVE_DECIMALS,
            Self::Token(token) => token.decimals,
        }
    }

    #[must_use]
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// The token that represents this currency inside pairs on `chain`.
    #[must_use]
    pub fn wrapped(&self, chain: ChainId) -> Token {
        match self {
            Self::Native => chain.wrapped_native(),
            Self::Token(token) => token.clone(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Token(token) => write!(f, "{} ({})", token.symbol, token.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_identity_ignores_case() {
        let a = Token::new(ChainId::Mainnet, "0xABCD", 18, "TKA", "Token A");
        let b = Token::new(ChainId::Mainnet, "0xabcd", 6, "OTHER", "Other");
        let c = Token::new(ChainId::Bsc, "0xabcd", 18, "TKA", "Token A");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sorts_before() {
        let a = Token::new(ChainId::Mainnet, "0x0A", 18, "A", "A");
        let b = Token::new(ChainId::Mainnet, "0x0b", 18, "B", "B");
        assert!(a.sorts_before(&b));
        assert!(!b.sorts_before(&a));
    }

    #[test]
    fn test_native_wraps_per_chain() {
        assert_eq!(Currency::Native.wrapped(ChainId::Bsc).symbol, "WBNB");
        assert_eq!(Currency::Native.decimals(), 18);
        assert!(Currency::Native.is_native());
    }

    #[test]
    fn test_currency_serde() {
        let native: Currency = serde_json::from_str("\"native\"").unwrap();
        assert!(native.is_native());

        let json = r#"{"token":{"chain_id":56,"address":"0x01","decimals":6,"symbol":"USDT","name":"Tether"}}"#;
        let token: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(token.decimals(), 6);
        assert!(matches!(token, Currency::Token(t) if t.chain_id == ChainId::Bsc));
    }
}
