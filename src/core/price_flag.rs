//! Price Flag Classifier
//!
//! Compares an asking rent to the fair-rent mid estimate. Thresholds are
//! exclusive lower bounds on the overage ratio; the first match wins.

use crate::models::types::{FlagLevel, PriceFlag};
use crate::utils::constants::round_half_even;

/// (exclusive lower bound, level, label), evaluated top-down
const FLAG_LADDER: [(f64, FlagLevel, &str); 4] = [
    (0.50, FlagLevel::Red, "Extreme premium"),
    (0.35, FlagLevel::Red, "Significantly overpriced"),
    (0.20, FlagLevel::Yellow, "Above market"),
    (-0.10, FlagLevel::Green, "At market rate"),
];

const BELOW_MARKET_LABEL: &str = "Below market — good deal";
const UNKNOWN_LABEL: &str = "Unable to estimate";

pub fn classify_price(asking_rent: f64, fair_rent_mid: f64) -> PriceFlag {
    if fair_rent_mid == 0.0 {
        return PriceFlag {
            level: FlagLevel::Unknown,
            label: UNKNOWN_LABEL.to_string(),
            overage_pct: 0,
            monthly_delta: None,
            annual_delta: None,
        };
    }

    let overage = (asking_rent - fair_rent_mid) / fair_rent_mid;
    let monthly_delta = round_half_even(asking_rent - fair_rent_mid);

    let (level, label) = FLAG_LADDER
        .iter()
        .find(|(threshold, _, _)| overage > *threshold)
        .map(|(_, level, label)| (*level, *label))
        .unwrap_or((FlagLevel::Green, BELOW_MARKET_LABEL));

    PriceFlag {
        level,
        label: label.to_string(),
        overage_pct: round_half_even(overage * 100.0),
        monthly_delta: Some(monthly_delta),
        annual_delta: Some(monthly_delta.saturating_mul(12)),
    }
}
