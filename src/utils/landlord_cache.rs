//! Landlord Cache Module
//!
//! Read-only table of known landlords keyed by address fragment.
//! Loaded once at startup; never written back.
//!
//! Matching is fuzzy: the normalized address and the key match when either
//! contains the other. Entries are tried in file order and the first match
//! wins, so short keys can shadow longer ones.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{Grade, LandlordRecord, Provenance};

/// On-disk shape of a cache entry
#[derive(Debug, Clone, Deserialize)]
struct CachedLandlord {
    owner_name: String,
    #[serde(default)]
    is_llc: bool,
    #[serde(default)]
    non_resident: bool,
    #[serde(default)]
    total_properties: Option<u32>,
    #[serde(default)]
    year_built: Option<i32>,
    #[serde(default)]
    recent_permits: Option<u32>,
    #[serde(default)]
    permit_details: Vec<String>,
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    score: Option<u8>,
    #[serde(default)]
    grade: Option<Grade>,
}

impl From<CachedLandlord> for LandlordRecord {
    fn from(c: CachedLandlord) -> Self {
        let grade = c
            .grade
            .or_else(|| c.score.map(|s| Grade::from_score(s as i32)));
        Self {
            owner_name: c.owner_name,
            is_llc: c.is_llc,
            non_resident: c.non_resident,
            total_properties: c.total_properties,
            year_built: c.year_built,
            recent_permits: c.recent_permits,
            permit_details: c.permit_details,
            notes: c.notes,
            score: c.score,
            grade,
            source: Provenance::Cached,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandlordCache {
    /// (normalized key, record) in file order
    entries: Vec<(String, LandlordRecord)>,
}

impl LandlordCache {
    /// Empty cache: every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (key, record) pairs; keys are normalized, order is kept
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, LandlordRecord)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, mut record)| {
                    record.source = Provenance::Cached;
                    (Self::normalize_address(key.as_ref()), record)
                })
                .collect(),
        }
    }

    /// Parse a cache file (`{"196 BROADWAY": {...}, ...}`), keeping key order
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(table.len());
        for (key, value) in table {
            let cached: CachedLandlord = serde_json::from_value(value).map_err(|e| {
                AppError::with_source(
                    ErrorCode::ReferenceDataInvalid,
                    format!("Invalid landlord cache entry '{}'", key),
                    e,
                )
            })?;
            entries.push((key, LandlordRecord::from(cached)));
        }

        Ok(Self::from_entries(entries))
    }

    /// Load the cache from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::ReferenceDataMissing,
                format!("Cannot read landlord cache {}", path.display()),
                e,
            )
        })?;

        let cache = Self::from_json_str(&json)?;
        info!("🗂️ Loaded {} landlord cache entries from {}", cache.len(), path.display());
        Ok(cache)
    }

    /// Uppercase + trim
    #[inline]
    pub fn normalize_address(address: &str) -> String {
        address.trim().to_uppercase()
    }

    /// First entry whose key contains the address or is contained by it
    pub fn get(&self, address: &str) -> Option<LandlordRecord> {
        let needle = Self::normalize_address(address);

        let hit = self
            .entries
            .iter()
            .find(|(key, _)| key.contains(&needle) || needle.contains(key.as_str()));

        match hit {
            Some((key, record)) => {
                info!("✅ LANDLORD CACHE HIT: '{}' matched key '{}'", needle, key);
                Some(record.clone())
            }
            None => {
                debug!("📭 LANDLORD CACHE MISS: {}", needle);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
