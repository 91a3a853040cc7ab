//! Derived-value arithmetic shared by every consumer of the API: installment
//! breakdowns, balance aggregation, discount display. The backend owns the
//! authoritative figures; these helpers only reproduce what the UI shows
//! between refetches, in one tested place.

use rust_decimal::Decimal;

use crate::models::{CartItem, WalletBalance};

/// Installment terms as the checkout presents them: 40% deposit up front,
/// the remainder split evenly across the chosen months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallmentBreakdown {
    pub deposit: Decimal,
    pub remaining: Decimal,
    pub monthly: Decimal,
}

pub fn installment_breakdown(total: Decimal, months: u32) -> Option<InstallmentBreakdown> {
    if months == 0 || total < Decimal::ZERO {
        return None;
    }
    let deposit_rate = Decimal::new(40, 2);
    let deposit = (total * deposit_rate).round_dp(2);
    let remaining = total - deposit;
    let monthly = (remaining / Decimal::from(months)).round_dp(2);
    Some(InstallmentBreakdown {
        deposit,
        remaining,
        monthly,
    })
}

/// Balance spendable on packages and premium purchases. Views earnings only
/// count for marketer accounts; the referral pool is withdrawable but never
/// spendable here.
pub fn available_balance(wallet: &WalletBalance, is_marketer: bool) -> Decimal {
    if is_marketer {
        wallet.deposit_balance + wallet.views_earnings_balance
    } else {
        wallet.deposit_balance
    }
}

/// Whole-percent discount for the price badge, e.g. 1000 → 800 shows 20.
pub fn discount_percent(price: Decimal, discounted: Decimal) -> Option<Decimal> {
    if price <= Decimal::ZERO || discounted >= price {
        return None;
    }
    Some(((price - discounted) / price * Decimal::from(100)).round_dp(0))
}

pub fn cart_total(items: &[CartItem]) -> Decimal {
    items.iter().map(|item| item.total_price).sum()
}

pub fn cart_item_count(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// A package with three or fewer days left gets the renewal nudge; this is
/// UI state, not a server status.
pub fn is_expiring_soon(days_remaining: i64) -> bool {
    (1..=3).contains(&days_remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn installment_breakdown_is_exact_for_even_splits() {
        let plan = installment_breakdown(dec("1000"), 3).unwrap();
        assert_eq!(plan.deposit, dec("400.00"));
        assert_eq!(plan.remaining, dec("600.00"));
        assert_eq!(plan.monthly, dec("200.00"));
    }

    #[test]
    fn installment_breakdown_rounds_uneven_splits_to_cents() {
        let plan = installment_breakdown(dec("999.99"), 7).unwrap();
        assert_eq!(plan.deposit, dec("400.00"));
        assert_eq!(plan.remaining, dec("599.99"));
        assert_eq!(plan.monthly, dec("85.71"));
    }

    #[test]
    fn installment_breakdown_rejects_zero_months() {
        assert!(installment_breakdown(dec("1000"), 0).is_none());
        assert!(installment_breakdown(dec("-1"), 3).is_none());
    }

    #[test]
    fn available_balance_counts_views_earnings_for_marketers() {
        let wallet = WalletBalance {
            deposit_balance: dec("100.50"),
            views_earnings_balance: dec("50.25"),
            referral_balance: dec("999.00"),
            total_balance: None,
        };
        assert_eq!(available_balance(&wallet, true), dec("150.75"));
        assert_eq!(available_balance(&wallet, false), dec("100.50"));
    }

    #[test]
    fn discount_percent_rounds_to_whole_points() {
        assert_eq!(discount_percent(dec("1000"), dec("800")), Some(dec("20")));
        assert_eq!(discount_percent(dec("300"), dec("200")), Some(dec("33")));
        assert_eq!(discount_percent(dec("1000"), dec("1000")), None);
        assert_eq!(discount_percent(dec("0"), dec("10")), None);
    }

    #[test]
    fn expiring_soon_window() {
        assert!(!is_expiring_soon(0));
        assert!(is_expiring_soon(1));
        assert!(is_expiring_soon(3));
        assert!(!is_expiring_soon(4));
    }
}
