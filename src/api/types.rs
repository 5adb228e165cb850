//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;
use crate::models::types::Listing;

/// Error envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            error,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: None,
        }
    }
}

// ============================================
// Analysis
// ============================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub address: String,
    pub zip_code: String,
    /// "studio", "1", "2" or "3"
    pub bedrooms: String,
    pub asking_rent: f64,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub sqft: Option<i64>,
}

impl From<AnalyzeRequest> for Listing {
    fn from(req: AnalyzeRequest) -> Self {
        Self {
            address: req.address,
            zip_code: req.zip_code,
            bedrooms: req.bedrooms,
            asking_rent: req.asking_rent,
            amenities: req.amenities.unwrap_or_default(),
            sqft: req.sqft,
        }
    }
}

// ============================================
// Reference listings
// ============================================

#[derive(Debug, Serialize)]
pub struct ZipSummary {
    pub zip: String,
    pub neighborhood: String,
}

#[derive(Debug, Serialize)]
pub struct AmenityInfo {
    pub id: String,
    pub label: String,
    pub adjustment: i32,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
}
