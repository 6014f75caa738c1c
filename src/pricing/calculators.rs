//! Core pricing calculation functions.
//!
//! Pure functions for quote arithmetic - no table access. All amounts are
//! whole tax-included yen, so nothing here ever rounds.

use super::models::Yen;
use super::responses::{OptionPrices, SubPrices};

/// Charge for a flat-priced option.
///
/// An unselected option is always 0, whatever quantity is stored for it.
///
/// # Examples
/// ```
/// use senkyocar_quote::pricing::option_charge;
///
/// assert_eq!(option_charge(true, 16500, 2), 33000);
/// assert_eq!(option_charge(false, 16500, 2), 0);
/// ```
pub fn option_charge(selected: bool, unit_price: Yen, quantity: u32) -> Yen {
    if selected {
        unit_price * Yen::from(quantity)
    } else {
        0
    }
}

/// Number of wireless mikes actually billed: at least one once selected.
pub fn mike_quantity(selected: bool, requested: u32) -> u32 {
    if selected {
        requested.max(1)
    } else {
        0
    }
}

/// Insurance charge for the campaign.
///
/// # Arguments
/// * `selected` - Whether insurance was chosen
/// * `daily_rate` - Rate for the resolved platform state
/// * `days` - Insured days
///
/// # Returns
/// Tuple of (daily rate, total). Both are 0 when unselected; the total is 0
/// when `days` is 0.
pub fn insurance_charge(selected: bool, daily_rate: Yen, days: u32) -> (Yen, Yen) {
    if !selected {
        return (0, 0);
    }
    (daily_rate, daily_rate * Yen::from(days))
}

/// Sum of the equipment charges.
pub fn sub_total(subs: &SubPrices) -> Yen {
    subs.car_price + subs.amp_size + subs.signal_light + subs.taking_platform
}

/// Sum of the option charges. Uses the day-multiplied insurance total, not the daily rate.
pub fn option_total(options: &OptionPrices) -> Yen {
    options.total_mike_price
        + options.sd_price
        + options.intercom_price
        + options.hand_speaker_price
        + options.bluetooth_unit_price
        + options.total_insurance_price
}

/// Aggregate fields of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTotals {
    pub sub_total_price: Yen,
    pub option_total_price: Yen,
    pub delivery_price: Yen,
    pub total_price: Yen,
}

/// Calculate the four aggregate fields.
///
/// `total_price` is always exactly the sum of the other three.
pub fn calculate_totals(subs: &SubPrices, options: &OptionPrices, delivery_price: Yen) -> QuoteTotals {
    let sub_total_price = sub_total(subs);
    let option_total_price = option_total(options);

    QuoteTotals {
        sub_total_price,
        option_total_price,
        delivery_price,
        total_price: sub_total_price + option_total_price + delivery_price,
    }
}
