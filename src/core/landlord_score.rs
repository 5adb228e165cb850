//! Landlord Scoring Module
//!
//! Starts at 100 and subtracts fixed penalties for portfolio size, LLC
//! ownership, non-resident owners and thin permit history. The final
//! 0-100 score maps to a letter grade:
//! - 85+: A
//! - 70-84: B
//! - 55-69: C
//! - 40-54: D
//! - below 40: F

use serde::Serialize;

use crate::models::types::{Grade, LandlordRecord};
use crate::utils::constants::{
    DEFAULT_TOTAL_PROPERTIES, DEFAULT_YEAR_BUILT, LANDLORD_BASE_SCORE, LARGE_PORTFOLIO_THRESHOLD,
    MEDIUM_PORTFOLIO_THRESHOLD, PENALTY_FEW_PERMITS, PENALTY_LARGE_PORTFOLIO, PENALTY_LLC,
    PENALTY_MEDIUM_PORTFOLIO, PENALTY_NON_RESIDENT, PENALTY_NO_PERMITS,
    PENALTY_OLD_BUILDING_NO_PERMITS, PRE_RENOVATION_YEAR,
};

/// A single penalty applied to a landlord
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub points: i32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandlordScore {
    /// 0-100
    pub score: u8,
    pub grade: Grade,
    /// Record notes followed by one note per new deduction
    pub notes: Vec<String>,
    #[serde(skip)]
    pub deductions: Vec<Deduction>,
}

impl LandlordScore {
    /// Write score, grade and notes back onto the record
    pub fn apply_to(self, record: &mut LandlordRecord) {
        record.score = Some(self.score);
        record.grade = Some(self.grade);
        record.notes = self.notes;
    }
}

/// Score a landlord record.
///
/// Unknown portfolio size counts as 1 property, unknown build year as
/// 2000 and unknown permit count as 0.
pub fn score_landlord(record: &LandlordRecord) -> LandlordScore {
    let deductions = collect_deductions(record);

    let total: i32 = deductions.iter().map(|d| d.points).sum();
    let score = (LANDLORD_BASE_SCORE - total).clamp(0, 100);

    let mut notes = record.notes.clone();
    for d in &deductions {
        if !notes.contains(&d.reason) {
            notes.push(d.reason.clone());
        }
    }

    LandlordScore {
        score: score as u8,
        grade: Grade::from_score(score),
        notes,
        deductions,
    }
}

fn collect_deductions(record: &LandlordRecord) -> Vec<Deduction> {
    let mut deductions = Vec::new();
    let mut deduct = |points: i32, reason: String| deductions.push(Deduction { points, reason });

    let units = record.total_properties.unwrap_or(DEFAULT_TOTAL_PROPERTIES);
    if units > LARGE_PORTFOLIO_THRESHOLD {
        deduct(
            PENALTY_LARGE_PORTFOLIO,
            format!("Large portfolio: {} properties statewide", units),
        );
    } else if units > MEDIUM_PORTFOLIO_THRESHOLD {
        deduct(
            PENALTY_MEDIUM_PORTFOLIO,
            format!("Medium portfolio: {} properties", units),
        );
    }

    if record.is_llc {
        deduct(PENALTY_LLC, "Owned by LLC — reduced owner transparency".to_string());
    }

    if record.non_resident {
        deduct(
            PENALTY_NON_RESIDENT,
            "Non-resident landlord registered with RI SOS".to_string(),
        );
    }

    let permits = record.recent_permits.unwrap_or(0);
    let year_built = record.year_built.unwrap_or(DEFAULT_YEAR_BUILT);

    if permits == 0 {
        deduct(PENALTY_NO_PERMITS, "No recent permits on record".to_string());
        if year_built < PRE_RENOVATION_YEAR {
            deduct(
                PENALTY_OLD_BUILDING_NO_PERMITS,
                "Pre-1980 building with no recent renovation permits".to_string(),
            );
        }
    } else if permits < 2 {
        deduct(
            PENALTY_FEW_PERMITS,
            "Minimal permit activity for building age".to_string(),
        );
    }

    deductions
}
