//! API Request Handlers

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::types::*;
use crate::core::analyzer::RentAnalyzer;
use crate::core::landlord::LandlordResolver;
use crate::models::config::ServiceConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{AnalysisReport, Listing};
use crate::providers::property_records::OpenPvdClient;
use crate::utils::constants::{AMENITIES, APP_VERSION};
use crate::utils::landlord_cache::LandlordCache;
use crate::utils::reference::ReferenceData;

type ApiRejection = (StatusCode, Json<ErrorResponse>);

/// Shared application state
pub struct AppState {
    pub analyzer: RentAnalyzer,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(analyzer: RentAnalyzer, request_timeout: Duration) -> Self {
        Self {
            analyzer,
            request_timeout,
        }
    }

    /// Load reference data and wire the live property-records client
    pub fn from_config(config: &ServiceConfig) -> AppResult<Self> {
        let reference = Arc::new(ReferenceData::load(&config.safmr_path)?);
        let cache = Arc::new(LandlordCache::load(&config.landlord_cache_path)?);
        let records = Arc::new(OpenPvdClient::from_config(config)?);

        let resolver = LandlordResolver::new(cache, records);
        Ok(Self::new(
            RentAnalyzer::new(reference, resolver),
            config.request_timeout,
        ))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn reject(err: AppError, start: Instant) -> ApiRejection {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warn!(code = err.code_str(), status = status.as_u16(), "❌ {}", err.message);
    (
        status,
        Json(ErrorResponse::new(ApiError::from(&err), elapsed_ms(start))),
    )
}

// ============================================
// Health Check
// ============================================

pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
        version: APP_VERSION.to_string(),
    })
}

// ============================================
// Analysis
// ============================================

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiRejection> {
    let start = Instant::now();

    let Json(req) = payload.map_err(|rejection| {
        let err = AppError::bad_request("Invalid request body");
        warn!(code = err.code_str(), "❌ Rejected /analyze body: {}", rejection.body_text());
        let error = ApiError {
            details: Some(rejection.body_text()),
            ..ApiError::from(&err)
        };
        (rejection.status(), Json(ErrorResponse::new(error, elapsed_ms(start))))
    })?;

    info!(
        "🔍 Analyzing {} ({}, {} bedrooms, asking {})",
        req.address, req.zip_code, req.bedrooms, req.asking_rent
    );

    let listing = Listing::from(req);
    state
        .analyzer
        .analyze(&listing)
        .await
        .map(Json)
        .map_err(|e| reject(e, start))
}

// ============================================
// Reference listings
// ============================================

pub async fn list_zips(State(state): State<Arc<AppState>>) -> Json<Vec<ZipSummary>> {
    let zips = state
        .analyzer
        .reference()
        .profiles()
        .iter()
        .map(|p| ZipSummary {
            zip: p.zip_code.clone(),
            neighborhood: p.neighborhood.clone(),
        })
        .collect();
    Json(zips)
}

pub async fn list_amenities() -> Json<Vec<AmenityInfo>> {
    Json(
        AMENITIES
            .iter()
            .map(|a| AmenityInfo {
                id: a.id.to_string(),
                label: a.label.to_string(),
                adjustment: a.adjustment,
            })
            .collect(),
    )
}
