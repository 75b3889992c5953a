//! Runtime settings: defaults, then environment (`.env` included), then flags.

use anyhow::{Context, Result};
use std::env;
use tradeview_domain::ChainId;
use tradeview_summary::config::{SlippageBps, SummaryConfig};

pub const CHAIN_ID_VAR: &str = "TRADEVIEW_CHAIN_ID";
pub const SLIPPAGE_VAR: &str = "TRADEVIEW_SLIPPAGE_BPS";
pub const ANALYTICS_URL_VAR: &str = "TRADEVIEW_ANALYTICS_URL";

/// Values given on the command line; they win over the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub chain_id: Option<u64>,
    pub slippage_bps: Option<u32>,
}

/// `fallback_chain` is used when neither a flag nor the environment names a chain.
pub fn load(overrides: &Overrides, fallback_chain: ChainId) -> Result<SummaryConfig> {
    resolve(overrides, fallback_chain, |key| env::var(key).ok())
}

fn resolve(
    overrides: &Overrides,
    fallback_chain: ChainId,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SummaryConfig> {
    let mut config = SummaryConfig {
        chain_id: fallback_chain,
        ..SummaryConfig::default()
    };

    let chain_id = match overrides.chain_id {
        Some(id) => Some(id),
        None => lookup(CHAIN_ID_VAR)
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .with_context(|| format!("{CHAIN_ID_VAR} must be a number"))?,
    };
    if let Some(id) = chain_id {
        config.chain_id = ChainId::from_id(id)?;
    }

    let slippage = match overrides.slippage_bps {
        Some(bps) => Some(bps),
        None => lookup(SLIPPAGE_VAR)
            .map(|v| v.trim().parse::<u32>())
            .transpose()
            .with_context(|| format!("{SLIPPAGE_VAR} must be a number of basis points"))?,
    };
    if let Some(bps) = slippage {
        config.allowed_slippage = SlippageBps::new(bps);
    }

    if let Some(url) = lookup(ANALYTICS_URL_VAR) {
        config.analytics_base_url = url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = resolve(&Overrides::default(), ChainId::Mainnet, env_of(&[])).unwrap();
        assert_eq!(config, SummaryConfig::default());
    }

    #[test]
    fn test_fallback_chain() {
        let config = resolve(&Overrides::default(), ChainId::Bsc, env_of(&[])).unwrap();
        assert_eq!(config.chain_id, ChainId::Bsc);

        let env = env_of(&[(CHAIN_ID_VAR, "137")]);
        let config = resolve(&Overrides::default(), ChainId::Bsc, env).unwrap();
        assert_eq!(config.chain_id, ChainId::Matic);
    }

    #[test]
    fn test_env_applies() {
        let env = env_of(&[(CHAIN_ID_VAR, "56"), (SLIPPAGE_VAR, " 100 ")]);
        let config = resolve(&Overrides::default(), ChainId::Mainnet, env).unwrap();
        assert_eq!(config.chain_id, ChainId::Bsc);
        assert_eq!(config.allowed_slippage.bps(), 100);
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_of(&[(CHAIN_ID_VAR, "56"), (SLIPPAGE_VAR, "100")]);
        let overrides = Overrides {
            chain_id: Some(137),
            slippage_bps: Some(30),
        };
        let config = resolve(&overrides, ChainId::Mainnet, env).unwrap();
        assert_eq!(config.chain_id, ChainId::Matic);
        assert_eq!(config.allowed_slippage.bps(), 30);
    }

    #[test]
    fn test_invalid_values_fail() {
        let fallback = ChainId::Mainnet;
        assert!(resolve(&Overrides::default(), fallback, env_of(&[(SLIPPAGE_VAR, "lots")])).is_err());
        assert!(resolve(&Overrides::default(), fallback, env_of(&[(CHAIN_ID_VAR, "42")])).is_err());
    }
}
