//! Fair Rent Estimator
//!
//! mid = SAFMR base + amenity adjustments + square-footage scaling,
//! bracketed by a fixed ±7% band.

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{BedroomCategory, RentEstimate};
use crate::utils::constants::{
    round_half_even, BAND_HIGH_MULTIPLIER, BAND_LOW_MULTIPLIER, SAFMR_DATA_SOURCE,
    SQFT_SCALING_FACTOR,
};
use crate::utils::reference::ReferenceData;

/// Estimate the fair rent for a unit.
///
/// Fails with `ZipNotCovered` for an unknown ZIP and `InvalidBedroomCount`
/// when `bedrooms` is not `studio`, `1`, `2` or `3`. Unknown amenities
/// contribute nothing. A square footage of 0 is treated as not supplied;
/// any other value, negative included, scales linearly.
pub fn estimate_fair_rent(
    data: &ReferenceData,
    zip_code: &str,
    bedrooms: &str,
    amenities: &[String],
    sqft: Option<i64>,
) -> AppResult<RentEstimate> {
    let profile = data
        .profile(zip_code)
        .ok_or_else(|| AppError::zip_not_covered(zip_code))?;

    let category = BedroomCategory::from_request(bedrooms)
        .ok_or_else(|| AppError::invalid_bedroom_count(bedrooms))?;

    let base = profile.baseline(category);
    let amenity_adjustments = data.amenity_adjustment(amenities);

    let sqft_delta = match sqft.filter(|&s| s != 0) {
        Some(sqft) => sqft_adjustment(base, sqft, data.median_sqft(category)),
        None => 0.0,
    };

    let fair_rent = base as f64 + amenity_adjustments as f64 + sqft_delta;

    Ok(RentEstimate {
        zip_code: zip_code.to_string(),
        neighborhood: profile.neighborhood.clone(),
        base_safmr: base,
        amenity_adjustments,
        sqft_adjustment: round_half_even(sqft_delta),
        fair_rent_low: round_half_even(fair_rent * BAND_LOW_MULTIPLIER),
        fair_rent_mid: round_half_even(fair_rent),
        fair_rent_high: round_half_even(fair_rent * BAND_HIGH_MULTIPLIER),
        data_source: SAFMR_DATA_SOURCE.to_string(),
    })
}

/// Linear scaling: 10% of base per 100% deviation from the category median.
/// Not clamped.
fn sqft_adjustment(base: u32, sqft: i64, median_sqft: u32) -> f64 {
    if median_sqft == 0 {
        return 0.0;
    }
    let median = median_sqft as f64;
    ((sqft as f64 - median) / median) * base as f64 * SQFT_SCALING_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use crate::models::types::BedroomTable;
    use crate::utils::reference::ZipRentProfile;
    use proptest::prelude::*;

    fn fixture() -> ReferenceData {
        ReferenceData::new(vec![
            ZipRentProfile::new("02903", "Downtown", BedroomTable::new(1400, 1600, 1800, 2200)),
            ZipRentProfile::new("02909", "Olneyville", BedroomTable::new(0, 0, 0, 0)),
        ])
    }

    fn amenities(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_bedroom_no_extras() {
        let est = estimate_fair_rent(&fixture(), "02903", "2", &[], None).unwrap();
        assert_eq!(est.base_safmr, 1800);
        assert_eq!(est.fair_rent_mid, 1800);
        assert_eq!(est.fair_rent_low, 1674);
        assert_eq!(est.fair_rent_high, 1926);
        assert_eq!(est.amenity_adjustments, 0);
        assert_eq!(est.sqft_adjustment, 0);
        assert_eq!(est.neighborhood, "Downtown");
        assert_eq!(est.data_source, SAFMR_DATA_SOURCE);
    }

    #[test]
    fn test_amenities_added() {
        let est = estimate_fair_rent(
            &fixture(),
            "02903",
            "studio",
            &amenities(&["parking", "central_ac", "sauna"]),
            None,
        )
        .unwrap();
        assert_eq!(est.amenity_adjustments, 160);
        assert_eq!(est.fair_rent_mid, 1560);
    }

    #[test]
    fn test_sqft_scaling() {
        // 2br median 850; 1020 sqft is +20% -> +2% of base = +36
        let est = estimate_fair_rent(&fixture(), "02903", "2", &[], Some(1020)).unwrap();
        assert_eq!(est.sqft_adjustment, 36);
        assert_eq!(est.fair_rent_mid, 1836);

        // Below the median reduces the estimate
        let est = estimate_fair_rent(&fixture(), "02903", "2", &[], Some(425)).unwrap();
        assert_eq!(est.sqft_adjustment, -90);
        assert_eq!(est.fair_rent_mid, 1710);
    }

    #[test]
    fn test_zero_sqft_ignored() {
        let est = estimate_fair_rent(&fixture(), "02903", "2", &[], Some(0)).unwrap();
        assert_eq!(est.sqft_adjustment, 0);
        assert_eq!(est.fair_rent_mid, 1800);
    }

    #[test]
    fn test_negative_sqft_not_clamped() {
        // -85 sqft is 110% below the 2br median -> -11% of base
        let est = estimate_fair_rent(&fixture(), "02903", "2", &[], Some(-85)).unwrap();
        assert_eq!(est.sqft_adjustment, -198);
        assert_eq!(est.fair_rent_mid, 1602);
    }

    #[test]
    fn test_unknown_zip() {
        let err = estimate_fair_rent(&fixture(), "10001", "2", &[], None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZipNotCovered);
    }

    #[test]
    fn test_invalid_bedrooms() {
        for bad in ["4", "2br", "Studio", " 2", ""] {
            let err = estimate_fair_rent(&fixture(), "02903", bad, &[], None).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidBedroomCount, "input {:?}", bad);
        }
    }

    #[test]
    fn test_zip_checked_before_bedrooms() {
        let err = estimate_fair_rent(&fixture(), "10001", "9", &[], None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZipNotCovered);
    }

    #[test]
    fn test_zero_base_yields_zero_mid() {
        let est = estimate_fair_rent(&fixture(), "02909", "1", &[], Some(900)).unwrap();
        assert_eq!(est.fair_rent_mid, 0);
        assert_eq!(est.sqft_adjustment, 0);
    }

    proptest! {
        #[test]
        fn prop_band_is_ordered(
            bedrooms in prop::sample::select(vec!["studio", "1", "2", "3"]),
            picks in prop::collection::vec(
                prop::sample::select(vec!["parking", "in_unit_laundry", "utilities_included",
                    "central_ac", "pets_allowed", "no_elevator", "unknown"]),
                0..6,
            ),
            sqft in prop::option::of(1i64..5000),
        ) {
            let amenities: Vec<String> = picks.iter().map(|s| s.to_string()).collect();
            let data = fixture();
            let est = estimate_fair_rent(&data, "02903", bedrooms, &amenities, sqft).unwrap();
            prop_assert!(est.fair_rent_low <= est.fair_rent_mid);
            prop_assert!(est.fair_rent_mid <= est.fair_rent_high);

            let again = estimate_fair_rent(&data, "02903", bedrooms, &amenities, sqft).unwrap();
            prop_assert_eq!(est, again);
        }
    }
}
