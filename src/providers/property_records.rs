//! Property Records Client - OpenPVD ownership lookups
//!
//! Queries the City of Providence property dataset (Socrata) for the owner
//! of an address. Only `owner_name` and `year_built` are consumed; the
//! dataset carries no permit or residency data, so live records always
//! report zero permits and a resident owner.
//!
//! API: https://data.providenceri.gov/resource/k6gu-363f.json
//! Free, no API key required

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::config::ServiceConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{LandlordRecord, Provenance};
use crate::utils::constants::USER_AGENT;

/// Live source of landlord records
#[async_trait]
pub trait PropertyRecordsSource: Send + Sync {
    /// `Ok(None)` when the source has no row for the address
    async fn lookup(&self, address: &str) -> AppResult<Option<LandlordRecord>>;
}

/// One row of the Socrata property dataset
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRow {
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub year_built: Option<YearBuilt>,
}

/// Socrata returns numbers as strings; accept either
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearBuilt {
    Number(i64),
    Text(String),
}

impl YearBuilt {
    fn parse(&self) -> AppResult<i32> {
        let year = match self {
            Self::Number(n) => i32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse::<f64>().ok().map(|y| y as i32),
        };
        year.ok_or_else(|| AppError::upstream_invalid(format!("Unparsable year_built: {:?}", self)))
    }
}

impl PropertyRow {
    /// Map a provider row onto the common record shape
    pub fn into_record(self) -> AppResult<LandlordRecord> {
        let owner_name = self
            .owner_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let upper = owner_name.to_uppercase();
        let is_llc = upper.contains("LLC") || upper.contains("INC");

        let year_built = self.year_built.as_ref().map(YearBuilt::parse).transpose()?;

        Ok(LandlordRecord {
            owner_name,
            is_llc,
            non_resident: false,
            total_properties: Some(1),
            year_built,
            recent_permits: Some(0),
            permit_details: Vec::new(),
            notes: Vec::new(),
            score: None,
            grade: None,
            source: Provenance::Live,
        })
    }
}

/// OpenPVD Socrata client
pub struct OpenPvdClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenPvdClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> AppResult<Self> {
        Self::new(config.property_records_url.clone(), config.lookup_timeout)
    }

    /// SoQL filter: case-insensitive substring match on the address column
    pub fn where_clause(address: &str) -> String {
        let clean = address.trim().to_uppercase().replace('\'', "''");
        format!("upper(address) like '%{}%'", clean)
    }

    /// Fetch the first matching row, if any
    pub async fn fetch_row(&self, address: &str) -> AppResult<Option<PropertyRow>> {
        let where_clause = Self::where_clause(address);
        debug!("🔍 OpenPVD: {}", where_clause);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("$where", where_clause.as_str()), ("$limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::upstream_unavailable(format!(
                "OpenPVD API error: {}",
                status
            )));
        }

        let rows: Vec<PropertyRow> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl PropertyRecordsSource for OpenPvdClient {
    async fn lookup(&self, address: &str) -> AppResult<Option<LandlordRecord>> {
        match self.fetch_row(address).await? {
            Some(row) => {
                let record = row.into_record()?;
                info!("🏛️ OpenPVD: found owner '{}' for {}", record.owner_name, address);
                Ok(Some(record))
            }
            None => {
                info!("📭 OpenPVD: no property row for {}", address);
                Ok(None)
            }
        }
    }
}
