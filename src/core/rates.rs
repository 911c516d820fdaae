//! Fixed conversion rates for the demo wallet
//!
//! All conversion math uses constants: one deposit rate mapping USD into the
//! target token, and one USD unit price per supported token. The deposit
//! rate pair is deliberately lossy (0.0005 ETH/USD against an 1800 USD/ETH
//! price leaves a 0.1 USD spread per deposited dollar); withdrawals are
//! value-exact at the unit prices. [`rate_spread_per_usd`] documents the
//! spread so conservation checks can bound total drift precisely.

use rust_decimal::Decimal;

/// Tokens the demo wallet supports, in fixture order
pub const SUPPORTED_TOKENS: [&str; 3] = ["ETH", "USDT", "USDC"];

/// Token credited by fiat deposits
pub const DEPOSIT_TARGET: &str = "ETH";

/// Fixed deposit rate: token units per USD (USD -> ETH)
pub fn usd_to_eth_rate() -> Decimal {
    Decimal::new(5, 4) // 0.0005
}

/// Fixed USD unit price for a supported token
///
/// Returns `None` for symbols outside [`SUPPORTED_TOKENS`].
pub fn unit_price_usd(symbol: &str) -> Option<Decimal> {
    match symbol {
        "ETH" => Some(Decimal::new(1800, 0)),
        "USDT" | "USDC" => Some(Decimal::ONE),
        _ => None,
    }
}

/// USD value lost per deposited dollar to the fixed-rate spread
///
/// `1 - usd_to_eth_rate() * unit_price_usd(ETH)`; the only source of value
/// drift in the conversion engine.
pub fn rate_spread_per_usd() -> Decimal {
    let eth_price = unit_price_usd(DEPOSIT_TARGET).unwrap_or_default();
    Decimal::ONE - usd_to_eth_rate() * eth_price
}
