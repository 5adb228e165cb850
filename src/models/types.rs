//! Type definitions for the fair-rent service
//! Value objects shared by the estimator, classifier, resolver and API

use serde::{Deserialize, Serialize};

/// Bedroom category used to key SAFMR baselines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedroomCategory {
    #[serde(rename = "studio")]
    Studio,
    #[serde(rename = "1br")]
    OneBedroom,
    #[serde(rename = "2br")]
    TwoBedroom,
    #[serde(rename = "3br")]
    ThreeBedroom,
}

impl BedroomCategory {
    /// Map the request-level bedroom count (`studio`, `1`, `2`, `3`)
    pub fn from_request(bedrooms: &str) -> Option<Self> {
        match bedrooms {
            "studio" => Some(Self::Studio),
            "1" => Some(Self::OneBedroom),
            "2" => Some(Self::TwoBedroom),
            "3" => Some(Self::ThreeBedroom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::OneBedroom => "1br",
            Self::TwoBedroom => "2br",
            Self::ThreeBedroom => "3br",
        }
    }
}

/// One value per bedroom category. All four are required when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedroomTable<T> {
    pub studio: T,
    #[serde(rename = "1br")]
    pub one_br: T,
    #[serde(rename = "2br")]
    pub two_br: T,
    #[serde(rename = "3br")]
    pub three_br: T,
}

impl<T: Copy> BedroomTable<T> {
    pub fn new(studio: T, one_br: T, two_br: T, three_br: T) -> Self {
        Self {
            studio,
            one_br,
            two_br,
            three_br,
        }
    }

    #[inline]
    pub fn get(&self, category: BedroomCategory) -> T {
        match category {
            BedroomCategory::Studio => self.studio,
            BedroomCategory::OneBedroom => self.one_br,
            BedroomCategory::TwoBedroom => self.two_br,
            BedroomCategory::ThreeBedroom => self.three_br,
        }
    }
}

// ============================================
// Rent Estimate
// ============================================

/// Fair rent estimate with a low/mid/high confidence band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentEstimate {
    pub zip_code: String,
    pub neighborhood: String,
    /// HUD SAFMR baseline for the bedroom category
    pub base_safmr: u32,
    /// Sum of amenity adjustments (unknown amenities count as 0)
    pub amenity_adjustments: i64,
    /// Square-footage scaling, rounded
    pub sqft_adjustment: i64,
    pub fair_rent_low: i64,
    pub fair_rent_mid: i64,
    pub fair_rent_high: i64,
    pub data_source: String,
}

// ============================================
// Price Flag
// ============================================

/// Severity of an asking rent relative to the fair estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagLevel {
    Red,
    Yellow,
    Green,
    Unknown,
}

impl FlagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceFlag {
    pub level: FlagLevel,
    pub label: String,
    pub overage_pct: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_delta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_delta: Option<i64>,
}

// ============================================
// Nearby ZIP comparison
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearbyZip {
    pub zip_code: String,
    pub neighborhood: String,
    pub estimated_fair_rent: i64,
}

// ============================================
// Landlord
// ============================================

/// Where a landlord record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Cached,
    Live,
    NotFound,
}

/// Letter grade for a landlord score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Grade {
    /// Grade bands: >=85 A, >=70 B, >=55 C, >=40 D, else F
    pub fn from_score(score: i32) -> Self {
        if score >= 85 {
            Self::A
        } else if score >= 70 {
            Self::B
        } else if score >= 55 {
            Self::C
        } else if score >= 40 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
            Self::NotAvailable => "N/A",
        }
    }
}

/// Ownership and compliance facts about a property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandlordRecord {
    pub owner_name: String,
    pub is_llc: bool,
    pub non_resident: bool,
    pub total_properties: Option<u32>,
    pub year_built: Option<i32>,
    pub recent_permits: Option<u32>,
    pub permit_details: Vec<String>,
    pub notes: Vec<String>,
    pub score: Option<u8>,
    pub grade: Option<Grade>,
    pub source: Provenance,
}

impl LandlordRecord {
    /// Sentinel returned when neither the cache nor the live lookup knows the address
    pub fn not_found() -> Self {
        Self {
            owner_name: "Not found in public records".to_string(),
            is_llc: false,
            non_resident: false,
            total_properties: None,
            year_built: None,
            recent_permits: None,
            permit_details: Vec::new(),
            notes: vec!["Address not found in Providence property database".to_string()],
            score: None,
            grade: Some(Grade::NotAvailable),
            source: Provenance::NotFound,
        }
    }

    /// Records are scored once; cache entries may arrive pre-scored
    pub fn needs_scoring(&self) -> bool {
        self.score.is_none() && self.source != Provenance::NotFound
    }
}

// ============================================
// Analysis
// ============================================

/// A listing submitted for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub address: String,
    pub zip_code: String,
    pub bedrooms: String,
    pub asking_rent: f64,
    pub amenities: Vec<String>,
    pub sqft: Option<i64>,
}

/// Composite report for one listing
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub rent_estimate: RentEstimate,
    pub asking_rent: f64,
    pub flag: PriceFlag,
    pub landlord: LandlordRecord,
    pub nearby_zips: Vec<NearbyZip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_mapping() {
        assert_eq!(BedroomCategory::from_request("studio"), Some(BedroomCategory::Studio));
        assert_eq!(BedroomCategory::from_request("2"), Some(BedroomCategory::TwoBedroom));
        assert_eq!(BedroomCategory::from_request("2br"), None);
        assert_eq!(BedroomCategory::from_request("4"), None);
        assert_eq!(BedroomCategory::from_request(""), None);
    }

    #[test]
    fn test_bedroom_table_requires_all_categories() {
        let ok: Result<BedroomTable<u32>, _> =
            serde_json::from_str(r#"{"studio":1,"1br":2,"2br":3,"3br":4}"#);
        assert_eq!(ok.unwrap().get(BedroomCategory::ThreeBedroom), 4);

        let missing: Result<BedroomTable<u32>, _> =
            serde_json::from_str(r#"{"studio":1,"1br":2,"2br":3}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(85), Grade::A);
        assert_eq!(Grade::from_score(84), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(55), Grade::C);
        assert_eq!(Grade::from_score(54), Grade::D);
        assert_eq!(Grade::from_score(40), Grade::D);
        assert_eq!(Grade::from_score(39), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_not_found_sentinel_shape() {
        let record = LandlordRecord::not_found();
        assert!(!record.needs_scoring());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["grade"], "N/A");
        assert_eq!(json["source"], "not_found");
        assert!(json["score"].is_null());
        assert!(json["total_properties"].is_null());
    }

    #[test]
    fn test_unknown_flag_omits_deltas() {
        let flag = PriceFlag {
            level: FlagLevel::Unknown,
            label: "Unable to estimate".to_string(),
            overage_pct: 0,
            monthly_delta: None,
            annual_delta: None,
        };
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["level"], "unknown");
        assert!(json.get("monthly_delta").is_none());
    }
}
