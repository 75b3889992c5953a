//! Command Line Interface for inspecting swap summaries.
mod fixture;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradeview_domain::{ChainId, Currency, Token};
use tradeview_summary::prelude::*;

use crate::fixture::TradeFixture;
use crate::settings::Overrides;

#[derive(Parser)]
#[command(name = "tradeview")]
#[command(about = "Swap summary and currency symbol inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a trade described in a JSON file
    Summary {
        /// Trade description file
        #[arg(short, long)]
        trade: PathBuf,

        /// Allowed slippage in basis points (default 50)
        #[arg(short, long)]
        slippage: Option<u32>,

        /// Connected chain id (defaults to the chain of the trade's pairs)
        #[arg(short, long)]
        chain: Option<u64>,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve the display symbol of a currency
    Symbol {
        /// Connected chain id (default 1)
        #[arg(short, long)]
        chain: Option<u64>,

        /// Token symbol; the native asset is used when omitted
        #[arg(long)]
        token: Option<String>,
    },
}

/// Everything the details panel would render.
#[derive(Serialize)]
struct Report<'a> {
    chain_id: ChainId,
    slippage: SlippageBps,
    label: &'static str,
    bound: String,
    price_impact: String,
    severity: Severity,
    requires_confirmation: bool,
    lp_fee: String,
    route: Option<Vec<String>>,
    analytics_url: Option<String>,
    summary: &'a TradeSummary,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            trade,
            slippage,
            chain,
            json,
        } => {
            let trade = TradeFixture::load(&trade)?.into_trade()?;
            let route_chain = trade.route.chain_id().unwrap_or_default();

            let config = settings::load(
                &Overrides {
                    chain_id: chain,
                    slippage_bps: slippage,
                },
                route_chain,
            )?;
            info!(chain = %config.chain_id, slippage = %config.allowed_slippage, "Loaded settings");

            let summary = derive_summary_with_config(&trade, &config)?;

            let report = Report {
                chain_id: config.chain_id,
                slippage: config.allowed_slippage,
                label: summary.label.text(),
                bound: summary.display_text(),
                price_impact: summary.formatted_price_impact(),
                severity: summary.severity(),
                requires_confirmation: requires_confirmation(&summary.price_impact_without_fee),
                lp_fee: summary.formatted_lp_fee(),
                route: should_show_route(&trade).then(|| route_symbols(&trade, config.chain_id)),
                analytics_url: pair_analytics_url(&trade, &config.analytics_base_url),
                summary: &summary,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Symbol { chain, token } => {
            let config = settings::load(
                &Overrides {
                    chain_id: chain,
                    slippage_bps: None,
                },
                ChainId::default(),
            )?;
            let currency = match token {
                Some(symbol) => {
                    Currency::Token(Token::new(config.chain_id, "", 18, symbol.clone(), symbol))
                }
                None => Currency::Native,
            };
            println!("{}", resolve_symbol(Some(&currency), config.chain_id));
        }
    }

    Ok(())
}

fn print_report(report: &Report<'_>) {
    println!("\n📊 Trade Summary (chain {}, {})", report.chain_id, report.slippage);
    println!("════════════════════════════════════");
    println!("{:<24} {}", capitalize(report.label), report.bound);
    println!("{:<24} {}", "Price impact", report.price_impact);
    println!("{:<24} {}", "Liquidity provider fee", report.lp_fee);
    if let Some(route) = &report.route {
        println!("{:<24} {}", "Route", route.join(" > "));
    }
    if let Some(url) = &report.analytics_url {
        println!("{:<24} {}", "Pair analytics", url);
    }
    if report.severity >= Severity::High {
        println!("⚠️  Price impact warning level {}", report.severity.level());
    }
    if report.requires_confirmation {
        println!("⚠️  Price impact too high: swap requires explicit confirmation");
    }
    println!("════════════════════════════════════");
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
