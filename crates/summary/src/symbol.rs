use tradeview_domain::{ChainId, Currency};

/// Display symbol for an optional currency on `chain_id`.
///
/// Absent currencies render as an empty string, native assets use the
/// chain's own symbol and tokens keep their symbol verbatim.
#[must_use]
pub fn resolve_symbol(currency: Option<&Currency>, chain_id: ChainId) -> String {
    match currency {
        None => String::new(),
        Some(Currency::Native) => chain_id.native_symbol().to_string(),
        Some(Currency::Token(token)) => token.symbol.clone(),
    }
}
