//! Currency amount formatting.

use finboard_shared::types::Currency;
use num_format::{CustomFormat, Grouping, Locale, ToFormattedString as _};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency every amount is rendered in.
pub const DISPLAY_CURRENCY: Currency = Currency::Inr;

/// Formats an amount as rupees with Indian digit grouping.
///
/// Always shows exactly two fraction digits, rounding half away from zero.
/// Negative amounts put the minus sign before the currency symbol.
///
/// ```
/// use finboard_core::format::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(123_456_789, 2)), "₹12,34,567.89");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let scale = DISPLAY_CURRENCY.exponent();
    let rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();
    let whole = magnitude.trunc();
    let minor_units = ((magnitude - whole) * Decimal::from(10u32.pow(scale)))
        .to_u32()
        .unwrap_or_default();

    format!(
        "{sign}{symbol}{whole}.{minor_units:0width$}",
        sign = if amount < Decimal::ZERO { "-" } else { "" },
        symbol = DISPLAY_CURRENCY.symbol(),
        whole = group_digits(whole.to_u128().unwrap_or_default()),
        width = scale as usize,
    )
}

/// Last three digits, then groups of two (`12,34,567`).
fn group_digits(whole: u128) -> String {
    match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => whole.to_formatted_string(&format),
        Err(_) => whole.to_formatted_string(&Locale::en),
    }
}
