//! Reference Data Store
//!
//! Immutable tables loaded once at startup and shared read-only across
//! requests: SAFMR baselines per ZIP, amenity adjustments, bedroom median
//! square footage and ZIP adjacency.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{BedroomCategory, BedroomTable};
use crate::utils::constants::{AMENITIES, MEDIAN_SQFT, ZIP_ADJACENCY};

/// SAFMR baselines for one ZIP code
#[derive(Debug, Clone, PartialEq)]
pub struct ZipRentProfile {
    pub zip_code: String,
    pub neighborhood: String,
    pub rents: BedroomTable<u32>,
}

impl ZipRentProfile {
    pub fn new(zip_code: &str, neighborhood: &str, rents: BedroomTable<u32>) -> Self {
        Self {
            zip_code: zip_code.to_string(),
            neighborhood: neighborhood.to_string(),
            rents,
        }
    }

    #[inline]
    pub fn baseline(&self, category: BedroomCategory) -> u32 {
        self.rents.get(category)
    }
}

/// On-disk shape of a SAFMR entry: `{neighborhood, studio, 1br, 2br, 3br}`
#[derive(Debug, Deserialize)]
struct RawZipProfile {
    neighborhood: String,
    #[serde(flatten)]
    rents: BedroomTable<u32>,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Profiles in load order
    profiles: Vec<ZipRentProfile>,
    /// zip -> position in `profiles`
    index: HashMap<String, usize>,
    amenities: HashMap<String, i32>,
    median_sqft: BedroomTable<u32>,
    adjacency: HashMap<String, Vec<String>>,
}

impl ReferenceData {
    /// Build from ZIP profiles plus the built-in amenity, square-footage
    /// and adjacency tables
    pub fn new(profiles: Vec<ZipRentProfile>) -> Self {
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.zip_code.clone(), i))
            .collect();

        let amenities = AMENITIES
            .iter()
            .map(|a| (a.id.to_string(), a.adjustment))
            .collect();

        let adjacency = ZIP_ADJACENCY
            .iter()
            .map(|(zip, neighbours)| {
                (
                    zip.to_string(),
                    neighbours.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect();

        let [studio, one_br, two_br, three_br] = MEDIAN_SQFT;

        Self {
            profiles,
            index,
            amenities,
            median_sqft: BedroomTable::new(studio, one_br, two_br, three_br),
            adjacency,
        }
    }

    /// Replace the adjacency table
    pub fn with_adjacency<I, S>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        self.adjacency = table
            .into_iter()
            .map(|(zip, neighbours)| (zip.into(), neighbours.into_iter().map(Into::into).collect()))
            .collect();
        self
    }

    /// Parse a SAFMR table (`{"02903": {"neighborhood": .., "studio": .., ..}}`).
    /// Key order is kept.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        if table.is_empty() {
            return Err(AppError::reference_invalid("SAFMR table has no ZIP profiles"));
        }

        let mut profiles = Vec::with_capacity(table.len());
        for (zip, value) in table {
            let raw: RawZipProfile = serde_json::from_value(value).map_err(|e| {
                AppError::with_source(
                    ErrorCode::ReferenceDataInvalid,
                    format!("Invalid SAFMR profile for ZIP {}", zip),
                    e,
                )
            })?;
            profiles.push(ZipRentProfile {
                zip_code: zip,
                neighborhood: raw.neighborhood,
                rents: raw.rents,
            });
        }

        Ok(Self::new(profiles))
    }

    /// Load the SAFMR table from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::ReferenceDataMissing,
                format!("Cannot read SAFMR table {}", path.display()),
                e,
            )
        })?;

        let data = Self::from_json_str(&json)?;
        info!("🏠 Loaded {} ZIP profiles from {}", data.profiles.len(), path.display());
        Ok(data)
    }

    pub fn profile(&self, zip_code: &str) -> Option<&ZipRentProfile> {
        self.index.get(zip_code).map(|&i| &self.profiles[i])
    }

    /// All profiles, in load order
    pub fn profiles(&self) -> &[ZipRentProfile] {
        &self.profiles
    }

    /// Sum of adjustments for each supplied amenity. Unknown ids add 0;
    /// duplicates are counted every time they appear.
    pub fn amenity_adjustment(&self, amenities: &[String]) -> i64 {
        amenities
            .iter()
            .map(|a| self.amenities.get(a).copied().unwrap_or(0) as i64)
            .sum()
    }

    #[inline]
    pub fn median_sqft(&self, category: BedroomCategory) -> u32 {
        self.median_sqft.get(category)
    }

    /// Neighbouring ZIPs; empty when the ZIP has no adjacency entry
    pub fn neighbours(&self, zip_code: &str) -> &[String] {
        self.adjacency
            .get(zip_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
