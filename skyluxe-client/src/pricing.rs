//! Commission pricing.
//!
//! Every offer is resold with a fixed commission on top of the airline's
//! price. See [`PriceBreakdown`].

use rust_decimal::{Decimal, RoundingStrategy};

use skyluxe_model::offer::Offer;

/// The commission added on top of the airline's price.
pub const COMMISSION_RATE: f64 = 0.10;

/// What the airline charges, what the reseller keeps and what the customer
/// pays.
///
/// Amounts are formatted with two decimals. A price that cannot be read is
/// shown as `"0"` across the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// The airline's price.
    pub original: String,
    /// The commission.
    pub profit: String,
    /// The customer's price.
    pub total: String,
}

impl PriceBreakdown {
    /// The breakdown of an unreadable price.
    pub fn zero() -> PriceBreakdown {
        PriceBreakdown {
            original: "0".to_owned(),
            profit: "0".to_owned(),
            total: "0".to_owned(),
        }
    }

    /// Computes the breakdown of a price string such as `"100.00"`.
    pub fn from_amount(amount: Option<&str>) -> PriceBreakdown {
        let Some(original) = amount.and_then(parse_amount) else {
            return PriceBreakdown::zero();
        };

        let profit = original * COMMISSION_RATE;
        let total = original + profit;

        PriceBreakdown {
            original: to_fixed(original),
            profit: to_fixed(profit),
            total: to_fixed(total),
        }
    }

    /// Computes the breakdown of an offer's total.
    pub fn of(offer: &Offer) -> PriceBreakdown {
        PriceBreakdown::from_amount(offer.total_amount.as_deref())
    }
}

/// The commission as a whole percentage, e.g. `"10%"`.
pub fn commission_label() -> String {
    format!("{:.0}%", COMMISSION_RATE * 100.0)
}

/// Reads the longest decimal number at the start of `amount`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5 USD"` is `12.5`. Returns `None` if there is no number or it is not
/// finite.
fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim_start();
    let bytes = amount.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(|b| b.is_ascii_digit());

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }

        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts if it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }

        let exp_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }

        if exp_end > exp_start {
            end = exp_end;
        }
    }

    amount[..end]
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Formats with two decimals.
///
/// Rounds the exact binary value of `value`, ties away from zero, so `11.495`
/// (stored just below the tie) is `"11.49"` and `1.125` is `"1.13"`.
fn to_fixed(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(value) => format!(
            "{:.2}",
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // out of decimal range, cents are noise here
        None => format!("{:.2}", value),
    }
}
