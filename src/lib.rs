//! PVD Fair Rent Library
//!
//! Fair-rent analysis for Providence, RI rental listings:
//! - HUD SAFMR-based fair rent estimate with amenity and square-footage
//!   adjustments and a ±7% band
//! - Price flag for the asking rent (red / yellow / green)
//! - Nearby ZIP comparison for the same unit profile
//! - Landlord lookup (local cache, then OpenPVD) with a letter grade

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{
    classify_price, compare_nearby, estimate_fair_rent, score_landlord, LandlordResolver,
    LandlordScore, RentAnalyzer,
};
pub use models::{
    AnalysisReport, AppError, AppResult, BedroomCategory, ErrorCode, FlagLevel, Grade,
    LandlordRecord, Listing, NearbyZip, PriceFlag, Provenance, RentEstimate, ServiceConfig,
};
pub use providers::{OpenPvdClient, PropertyRecordsSource};
pub use utils::{LandlordCache, ReferenceData, ZipRentProfile};
