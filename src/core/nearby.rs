//! Nearby ZIP Comparator
//!
//! Estimates the same unit profile in each neighbouring ZIP using base +
//! amenities only (no square footage, no band), cheapest first.
//!
//! Unlike the estimator, an unrecognised bedroom count does not fail here:
//! it falls back to 2br.

use crate::models::types::{BedroomCategory, NearbyZip};
use crate::utils::constants::{round_half_even, NEARBY_FALLBACK_BEDROOMS};
use crate::utils::reference::ReferenceData;

pub fn compare_nearby(
    data: &ReferenceData,
    zip_code: &str,
    bedrooms: &str,
    amenities: &[String],
) -> Vec<NearbyZip> {
    let category = BedroomCategory::from_request(bedrooms).unwrap_or(NEARBY_FALLBACK_BEDROOMS);
    let adjustment = data.amenity_adjustment(amenities) as f64;

    let mut results: Vec<NearbyZip> = data
        .neighbours(zip_code)
        .iter()
        .filter_map(|zip| data.profile(zip))
        .map(|profile| NearbyZip {
            zip_code: profile.zip_code.clone(),
            neighborhood: profile.neighborhood.clone(),
            estimated_fair_rent: round_half_even(profile.baseline(category) as f64 + adjustment),
        })
        .collect();

    // stable: ties keep adjacency order
    results.sort_by_key(|n| n.estimated_fair_rent);
    results
}
