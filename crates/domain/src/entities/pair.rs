use crate::chain::ChainId;
use crate::entities::Token;
use crate::error::{DomainError, Result};
use crate::fees::LP_FEE_BPS;
use crate::math::constant_product;
use crate::value_objects::Price;
use primitive_types::U256;
use serde::Serialize;

/// A constant product pool between two tokens, sorted by address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub token0: Token,
    pub token1: Token,
    pub reserve0: U256,
    pub reserve1: U256,
    /// Address of the pool's LP token, which is also the pool address.
    pub liquidity_token_address: String,
}

impl Pair {
    pub fn new(
        token_a: Token,
        reserve_a: U256,
        token_b: Token,
        reserve_b: U256,
        liquidity_token_address: impl Into<String>,
    ) -> Result<Self> {
        if token_a == token_b {
            return Err(DomainError::IdenticalTokens);
        }
        if token_a.chain_id != token_b.chain_id {
            return Err(DomainError::ChainMismatch {
                expected: token_a.chain_id.id(),
                actual: token_b.chain_id.id(),
            });
        }
        let ((token0, reserve0), (token1, reserve1)) = if token_a.sorts_before(&token_b) {
            ((token_a, reserve_a), (token_b, reserve_b))
        } else {
            ((token_b, reserve_b), (token_a, reserve_a))
        };
        Ok(Self {
            token0,
            token1,
            reserve0,
            reserve1,
            liquidity_token_address: liquidity_token_address.into(),
        })
    }

    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.token0.chain_id
    }

    #[must_use]
    pub fn involves(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }

    /// The token on the other side of `token`.
    pub fn other(&self, token: &Token) -> Result<&Token> {
        if *token == self.token0 {
            Ok(&self.token1)
        } else if *token == self.token1 {
            Ok(&self.token0)
        } else {
            Err(self.not_in_pair(token))
        }
    }

    pub fn reserve_of(&self, token: &Token) -> Result<U256> {
        if *token == self.token0 {
            Ok(self.reserve0)
        } else if *token == self.token1 {
            Ok(self.reserve1)
        } else {
            Err(self.not_in_pair(token))
        }
    }

    /// Mid price of `token` in units of the other token.
    pub fn price_of(&self, token: &Token) -> Result<Price> {
        let reserve_in = self.reserve_of(token)?;
        let reserve_out = self.reserve_of(self.other(token)?)?;
        constant_product::calculate_spot_price(reserve_in, reserve_out).map(Price::new)
    }

    /// Output token and amount received for selling `amount_in` of `input`.
    pub fn get_output_amount(&self, input: &Token, amount_in: U256) -> Result<(Token, U256)> {
        let output = self.other(input)?.clone();
        let amount_out = constant_product::calculate_out_amount(
            amount_in,
            self.reserve_of(input)?,
            self.reserve_of(&output)?,
            LP_FEE_BPS,
        )?;
        Ok((output, amount_out))
    }

    /// Input token and amount required to buy exactly `amount_out` of `output`.
    pub fn get_input_amount(&self, output: &Token, amount_out: U256) -> Result<(Token, U256)> {
        let input = self.other(output)?.clone();
        let amount_in = constant_product::calculate_in_amount(
            amount_out,
            self.reserve_of(&input)?,
            self.reserve_of(output)?,
            LP_FEE_BPS,
        )?;
        Ok((input, amount_in))
    }

    fn not_in_pair(&self, token: &Token) -> DomainError {
        DomainError::CurrencyMismatch {
            expected: format!("{}/{}", self.token0.symbol, self.token1.symbol),
            actual: token.symbol.clone(),
        }
    }
}
