use crate::chain::ChainId;
use crate::entities::{Currency, Pair, Token};
use crate::error::{DomainError, Result};
use crate::value_objects::Price;
use rust_decimal::Decimal;
use serde::Serialize;

/// An ordered sequence of pairs leading from the input currency to the output currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub pairs: Vec<Pair>,
    /// Tokens visited, one more than the number of pairs.
    pub path: Vec<Token>,
    pub input: Currency,
    pub output: Currency,
    /// Output units per input unit at current reserves, before fees.
    pub mid_price: Price,
}

impl Route {
    /// Builds a route by walking `pairs` from `input`.
    ///
    /// When `output` is `None` the last token of the path is used.
    pub fn new(pairs: Vec<Pair>, input: Currency, output: Option<Currency>) -> Result<Self> {
        let chain = pairs.first().ok_or(DomainError::EmptyRoute)?.chain_id();
        if let Some(pair) = pairs.iter().find(|pair| pair.chain_id() != chain) {
            return Err(DomainError::ChainMismatch {
                expected: chain.id(),
                actual: pair.chain_id().id(),
            });
        }

        let mut path = vec![input.wrapped(chain)];
        let mut mid_price = Price::new(Decimal::ONE);
        for (index, pair) in pairs.iter().enumerate() {
            let current = &path[index];
            if !pair.involves(current) {
                return Err(DomainError::DisconnectedRoute { index });
            }
            mid_price = mid_price
                .checked_mul(&pair.price_of(current)?)
                .ok_or(DomainError::Overflow)?;
            let next = pair.other(current)?.clone();
            path.push(next);
        }

        let last = path.last().cloned().ok_or(DomainError::EmptyRoute)?;
        let output = output.unwrap_or_else(|| Currency::Token(last.clone()));
        if output.wrapped(chain) != last {
            return Err(DomainError::CurrencyMismatch {
                expected: last.symbol,
                actual: output.to_string(),
            });
        }

        Ok(Self {
            pairs,
            path,
            input,
            output,
            mid_price,
        })
    }

    /// Chain of the first pair. Routes are never empty once built.
    #[must_use]
    pub fn chain_id(&self) -> Option<ChainId> {
        self.pairs.first().map(Pair::chain_id)
    }

    /// Re-checks the structural invariants of a route.
    pub fn validate(&self) -> Result<()> {
        let chain = self.chain_id().ok_or(DomainError::EmptyRoute)?;
        if self.path.len() != self.pairs.len() + 1 {
            return Err(DomainError::DisconnectedRoute {
                index: self.path.len().min(self.pairs.len()),
            });
        }
        for (index, pair) in self.pairs.iter().enumerate() {
            if pair.chain_id() != chain {
                return Err(DomainError::ChainMismatch {
                    expected: chain.id(),
                    actual: pair.chain_id().id(),
                });
            }
            let (from, to) = (&self.path[index], &self.path[index + 1]);
            if !pair.involves(from) || pair.other(from)? != to {
                return Err(DomainError::DisconnectedRoute { index });
            }
        }
        check_endpoint(&self.input, &self.path[0], chain)?;
        check_endpoint(&self.output, &self.path[self.pairs.len()], chain)
    }
}

fn check_endpoint(currency: &Currency, token: &Token, chain: ChainId) -> Result<()> {
    if currency.wrapped(chain) != *token {
        return Err(DomainError::CurrencyMismatch {
            expected: token.symbol.clone(),
            actual: currency.to_string(),
        });
    }
    Ok(())
}
