//! Currency formatting utilities for Bitcoin and satoshi values
//!
//! This module provides standardised formatting for displaying Bitcoin amounts
//! in both BTC and satoshi units for better readability and precision.

use bitcoin::SignedAmount;

/// Satoshis per Bitcoin
const SATS_PER_BTC: f64 = 100_000_000.0;

/// Format a satoshi amount as dual BTC + sats display
///
/// # Examples
/// ```
/// use tx_payload_forensics::utils::currency::format_sats_as_btc;
///
/// assert_eq!(
///     format_sats_as_btc(28125351850),
///     "281.25351850 BTC (28125351850 sats)"
/// );
/// assert_eq!(
///     format_sats_as_btc(5471),
///     "0.00005471 BTC (5471 sats)"
/// );
/// ```
pub fn format_sats_as_btc(sats: u64) -> String {
    let btc = sats as f64 / SATS_PER_BTC;
    format!("{:.8} BTC ({} sats)", btc, sats)
}

/// Format a signed amount (fees can be negative when a lookup returns
/// inconsistent data) as dual BTC + sats display
///
/// # Examples
/// ```
/// use bitcoin::SignedAmount;
/// use tx_payload_forensics::utils::currency::format_signed_amount;
///
/// assert_eq!(
///     format_signed_amount(SignedAmount::from_sat(3000)),
///     "0.00003000 BTC (3000 sats)"
/// );
/// assert_eq!(
///     format_signed_amount(SignedAmount::from_sat(-150)),
///     "-0.00000150 BTC (-150 sats)"
/// );
/// ```
pub fn format_signed_amount(amount: SignedAmount) -> String {
    let sats = amount.to_sat();
    let btc = sats as f64 / SATS_PER_BTC;
    format!("{:.8} BTC ({} sats)", btc, sats)
}
