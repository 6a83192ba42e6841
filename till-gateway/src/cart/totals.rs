//! Derived cart totals using rust_decimal for precision
//!
//! All money math runs on `Decimal` internally and converts to `f64` at
//! the boundary, rounded to 2 decimal places half-up. Totals are derived
//! per read and never persisted; line totals are always recomputed from
//! `unit_price * quantity` locally, whatever the remote reports.

use rust_decimal::prelude::*;

use shared::{CartLineView, CartTotals};

/// Fixed VAT rate applied to the subtotal (20%).
pub const TAX_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: `unit_price * quantity`, rounded to cents.
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Compute cart totals over a set of display lines.
///
/// - `subtotal` is the sum of the rounded line totals, so it always
///   matches what the till shows per line.
/// - `tax = subtotal * TAX_RATE`, `total = subtotal + tax - discount`,
///   both exact at 2 decimal places.
/// - An empty item set yields all zeros, never an error.
pub fn compute(items: &[CartLineView]) -> CartTotals {
    if items.is_empty() {
        return CartTotals::zero();
    }

    let mut subtotal = Decimal::ZERO;
    let mut discount = Decimal::ZERO;
    let mut item_count: i64 = 0;

    for item in items {
        subtotal += round(to_decimal(item.unit_price) * Decimal::from(item.quantity));
        item_count += item.quantity;

        if item.discount > 0.0 {
            discount += to_decimal(item.discount);
        }
    }

    let discount = round(discount);
    let tax = round(subtotal * TAX_RATE);
    let total = subtotal + tax - discount;

    CartTotals {
        subtotal: to_f64(subtotal),
        discount: to_f64(discount),
        tax: to_f64(tax),
        total: to_f64(total),
        item_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(unit_price: f64, quantity: i64, discount: f64) -> CartLineView {
        CartLineView {
            id: Some(1),
            product_id: Some(42),
            product_name: "Test".to_string(),
            unit_price,
            quantity,
            shop_id: None,
            discount,
            added_at: None,
            item_total: line_total(unit_price, quantity),
        }
    }

    #[test]
    fn decimal_avoids_float_accumulation_drift() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(line_total(9.99, 2), 19.98);
        assert_eq!(line_total(10.0, 0), 0.0);
        assert_eq!(line_total(0.0, 5), 0.0);
    }

    #[test]
    fn empty_item_set_yields_zero_totals() {
        assert_eq!(compute(&[]), CartTotals::zero());
    }

    #[test]
    fn totals_for_a_single_line() {
        let totals = compute(&[line(9.99, 2, 0.0)]);

        assert_eq!(totals.subtotal, 19.98);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.tax, 4.0); // 19.98 * 0.20 = 3.996, half-up
        assert_eq!(totals.total, 23.98);
        assert_eq!(totals.item_count, 2);
    }

    #[test]
    fn discounts_are_subtracted_after_tax() {
        let totals = compute(&[line(10.0, 3, 1.5), line(5.0, 1, 0.0)]);

        assert_eq!(totals.subtotal, 35.0);
        assert_eq!(totals.discount, 1.5);
        assert_eq!(totals.tax, 7.0);
        assert_eq!(totals.total, 40.5); // 35 + 7 - 1.5
        assert_eq!(totals.item_count, 4);
    }

    #[test]
    fn negative_discounts_are_ignored() {
        let totals = compute(&[line(10.0, 1, -3.0)]);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.total, 12.0);
    }

    #[test]
    fn total_identity_holds_at_two_decimals() {
        let item_sets = [
            vec![line(0.01, 100, 0.0)],
            vec![line(9.99, 2, 0.5), line(3.33, 3, 0.0)],
            vec![line(19.95, 1, 2.0), line(0.99, 7, 0.25), line(120.0, 2, 10.0)],
        ];

        for items in &item_sets {
            let totals = compute(items);
            let expected_tax = to_f64(round(to_decimal(totals.subtotal) * TAX_RATE));
            let expected_total = to_f64(
                to_decimal(totals.subtotal) + to_decimal(totals.tax) - to_decimal(totals.discount),
            );

            assert_eq!(totals.tax, expected_tax);
            assert_eq!(totals.total, expected_total);
        }
    }

    #[test]
    fn subtotal_matches_the_displayed_line_totals() {
        // Each line is rounded to cents before summing, so the subtotal
        // agrees with what the till shows per line (6.66, not 6.67).
        let items = vec![line(3.333, 1, 0.0), line(3.333, 1, 0.0)];
        let totals = compute(&items);

        assert_eq!(items[0].item_total, 3.33);
        assert_eq!(totals.subtotal, 6.66);
    }

    #[test]
    fn many_penny_lines_sum_exactly() {
        let items: Vec<CartLineView> = (0..100).map(|_| line(0.01, 1, 0.0)).collect();
        let totals = compute(&items);

        assert_eq!(totals.subtotal, 1.0);
        assert_eq!(totals.tax, 0.2);
        assert_eq!(totals.total, 1.2);
        assert_eq!(totals.item_count, 100);
    }

    #[test]
    fn non_finite_prices_count_as_zero() {
        let totals = compute(&[line(f64::NAN, 2, 0.0), line(10.0, 1, 0.0)]);
        assert_eq!(totals.subtotal, 10.0);
    }
}
