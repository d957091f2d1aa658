//! Anticipation fee calculation
//!
//! ```text
//! fee_rate   = 0.025 + days / 1000
//! fee_amount = gross * fee_rate
//! net_amount = gross - fee_amount
//! ```
//!
//! Nothing is rounded here.

use rust_decimal::prelude::*;
use shared::models::{AnticipationQuote, FeeRateCap};

/// Fixed 2.5% base rate
const BASE_FEE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// 0.1% per 100 days
const DAYS_DIVISOR: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Fee rate for a horizon
pub fn fee_rate(days: u32, cap: FeeRateCap) -> Decimal {
    let rate = BASE_FEE_RATE + Decimal::from(days) / DAYS_DIVISOR;
    match cap {
        FeeRateCap::Unbounded => rate,
        FeeRateCap::Clamp => rate.clamp(Decimal::ZERO, Decimal::ONE),
    }
}

/// Compute fee and net amount for a gross value over `days`
pub fn calculate_fee(gross: Decimal, days: u32, cap: FeeRateCap) -> AnticipationQuote {
    let rate = fee_rate(days, cap);
    if rate >= Decimal::ONE {
        tracing::warn!(
            days,
            fee_rate = %rate,
            "Anticipation fee rate reaches 100% of the gross amount"
        );
    }

    let fee_amount = gross.saturating_mul(rate);
    AnticipationQuote {
        gross_amount: gross,
        horizon_days: days,
        fee_rate: rate,
        fee_amount,
        net_amount: gross.saturating_sub(fee_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_day_quote() {
        let quote = calculate_fee(Decimal::new(2314500, 2), 30, FeeRateCap::Unbounded);
        assert_eq!(quote.fee_rate, Decimal::new(55, 3));
        assert_eq!(quote.fee_amount, Decimal::new(1272975, 3));
        assert_eq!(quote.net_amount, Decimal::new(21872025, 3));
        assert_eq!(quote.horizon_days, 30);
    }

    #[test]
    fn test_zero_day_quote() {
        let quote = calculate_fee(Decimal::new(100000, 2), 0, FeeRateCap::Unbounded);
        assert_eq!(quote.fee_rate, Decimal::new(25, 3));
        assert_eq!(quote.fee_amount, Decimal::from(25));
        assert_eq!(quote.net_amount, Decimal::from(975));
    }

    #[test]
    fn test_zero_gross() {
        let quote = calculate_fee(Decimal::ZERO, 30, FeeRateCap::Unbounded);
        assert_eq!(quote.fee_amount, Decimal::ZERO);
        assert_eq!(quote.net_amount, Decimal::ZERO);
    }

    #[test]
    fn test_rate_is_affine_in_days() {
        let step = Decimal::new(1, 3);
        for days in [0u32, 1, 29, 30, 364, 974] {
            let a = fee_rate(days, FeeRateCap::Unbounded);
            let b = fee_rate(days + 1, FeeRateCap::Unbounded);
            assert_eq!(b - a, step);
        }
    }

    #[test]
    fn test_rate_cap() {
        assert_eq!(fee_rate(975, FeeRateCap::Unbounded), Decimal::ONE);
        assert_eq!(fee_rate(2000, FeeRateCap::Unbounded), Decimal::new(2025, 3));
        assert_eq!(fee_rate(2000, FeeRateCap::Clamp), Decimal::ONE);
        assert_eq!(fee_rate(30, FeeRateCap::Clamp), Decimal::new(55, 3));

        let unbounded = calculate_fee(Decimal::from(100), 2000, FeeRateCap::Unbounded);
        assert!(unbounded.net_amount.is_sign_negative());

        let clamped = calculate_fee(Decimal::from(100), 2000, FeeRateCap::Clamp);
        assert_eq!(clamped.fee_amount, Decimal::from(100));
        assert_eq!(clamped.net_amount, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let gross = Decimal::new(98765, 2);
        assert_eq!(
            calculate_fee(gross, 42, FeeRateCap::Unbounded),
            calculate_fee(gross, 42, FeeRateCap::Unbounded)
        );
    }
}
