//! Constants Module - Single Source of Truth
//!
//! Built-in reference tables and service defaults. The SAFMR table and
//! the landlord cache are loaded from data files; everything else lives here.

use crate::models::types::BedroomCategory;

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "PVD Fair Rent";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound HTTP requests
pub const USER_AGENT: &str = concat!("pvd-fair-rent/", env!("CARGO_PKG_VERSION"));

/// Label attached to every rent estimate
pub const SAFMR_DATA_SOURCE: &str = "HUD FY2025 Small Area Fair Market Rents";

// ============================================
// SERVICE DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SAFMR_PATH: &str = "data/safmr.json";
pub const DEFAULT_LANDLORD_CACHE_PATH: &str = "data/landlord_cache.json";

/// Live landlord lookups get a single attempt bounded by this timeout
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Whole-request timeout applied by the HTTP layer
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// OpenPVD (Socrata) property ownership dataset
pub const OPENPVD_PROPERTY_URL: &str = "https://data.providenceri.gov/resource/k6gu-363f.json";

// ============================================
// FAIR RENT FORMULA
// ============================================

/// Fraction of base rent applied per 100% deviation from median square footage
pub const SQFT_SCALING_FACTOR: f64 = 0.10;

/// Confidence band multipliers around the mid estimate
pub const BAND_LOW_MULTIPLIER: f64 = 0.93;
pub const BAND_HIGH_MULTIPLIER: f64 = 1.07;

/// Median square footage per bedroom category: studio, 1br, 2br, 3br
pub const MEDIAN_SQFT: [u32; 4] = [450, 650, 850, 1100];

/// Bedroom category the nearby comparison falls back to
pub const NEARBY_FALLBACK_BEDROOMS: BedroomCategory = BedroomCategory::TwoBedroom;

// ============================================
// AMENITIES
// ============================================

/// Amenity definition: id, display label, monthly dollar adjustment
pub struct AmenityDef {
    pub id: &'static str,
    pub label: &'static str,
    pub adjustment: i32,
}

pub const AMENITIES: [AmenityDef; 6] = [
    AmenityDef { id: "parking", label: "Parking Included", adjustment: 100 },
    AmenityDef { id: "in_unit_laundry", label: "In-Unit Laundry", adjustment: 90 },
    AmenityDef { id: "utilities_included", label: "Utilities Included", adjustment: 175 },
    AmenityDef { id: "central_ac", label: "Central A/C", adjustment: 60 },
    AmenityDef { id: "pets_allowed", label: "Pets Allowed", adjustment: 50 },
    AmenityDef { id: "no_elevator", label: "3+ Floors, No Elevator", adjustment: -30 },
];

// ============================================
// ZIP ADJACENCY
// ============================================

/// Neighbouring ZIPs, in display order. Not symmetric.
pub const ZIP_ADJACENCY: [(&str, [&str; 3]); 10] = [
    ("02903", ["02906", "02905", "02908"]),
    ("02906", ["02903", "02912", "02904"]),
    ("02912", ["02906", "02903", "02904"]),
    ("02908", ["02904", "02909", "02911"]),
    ("02909", ["02907", "02908", "02905"]),
    ("02907", ["02909", "02905", "02910"]),
    ("02904", ["02906", "02908", "02911"]),
    ("02905", ["02907", "02909", "02910"]),
    ("02910", ["02905", "02907", "02904"]),
    ("02911", ["02904", "02908", "02910"]),
];

// ============================================
// LANDLORD SCORING
// ============================================

pub const LANDLORD_BASE_SCORE: i32 = 100;

/// Portfolio size thresholds (exclusive)
pub const LARGE_PORTFOLIO_THRESHOLD: u32 = 20;
pub const MEDIUM_PORTFOLIO_THRESHOLD: u32 = 10;

/// Buildings older than this with no permits take an extra deduction
pub const PRE_RENOVATION_YEAR: i32 = 1980;

/// Defaults for unknown record fields
pub const DEFAULT_TOTAL_PROPERTIES: u32 = 1;
pub const DEFAULT_YEAR_BUILT: i32 = 2000;

pub const PENALTY_LARGE_PORTFOLIO: i32 = 10;
pub const PENALTY_MEDIUM_PORTFOLIO: i32 = 5;
pub const PENALTY_LLC: i32 = 10;
pub const PENALTY_NON_RESIDENT: i32 = 10;
pub const PENALTY_NO_PERMITS: i32 = 25;
pub const PENALTY_OLD_BUILDING_NO_PERMITS: i32 = 15;
pub const PENALTY_FEW_PERMITS: i32 = 10;

// ============================================
// HELPER FUNCTIONS
// ============================================

/// Round to the nearest whole unit, ties to even.
///
/// Used for every currency and percentage figure the service reports.
#[inline]
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
