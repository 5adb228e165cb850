//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so that logs and client
//! responses can be matched up.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - ZIP_xxx / BEDROOM_xxx: request validation
//! - UPSTREAM_xxx: property-records lookups
//! - DATA_xxx: reference data loading
//! - CFG_xxx: configuration

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// HTTP status for this error
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Request Validation Errors
    // ============================================
    /// ZIP code outside the Providence coverage area
    ZipNotCovered,
    /// Bedroom count is not one of studio/1/2/3
    InvalidBedroomCount,
    /// Invalid request format
    ApiBadRequest,

    // ============================================
    // Upstream (property records) Errors
    // ============================================
    /// Property-records service unreachable or returned non-200
    UpstreamUnavailable,
    /// Property-records request exceeded its timeout
    UpstreamTimeout,
    /// Property-records payload could not be parsed
    UpstreamInvalidResponse,

    // ============================================
    // Reference Data Errors
    // ============================================
    /// Reference data file missing or unreadable
    ReferenceDataMissing,
    /// Reference data file malformed or incomplete
    ReferenceDataInvalid,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZipNotCovered => "ZIP_NOT_COVERED",
            Self::InvalidBedroomCount => "BEDROOM_INVALID",
            Self::ApiBadRequest => "BAD_REQUEST",

            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            Self::UpstreamInvalidResponse => "UPSTREAM_INVALID_RESPONSE",

            Self::ReferenceDataMissing => "DATA_MISSING",
            Self::ReferenceDataInvalid => "DATA_INVALID",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidBedroomCount | Self::ApiBadRequest => 400,
            Self::ZipNotCovered => 404,
            Self::UpstreamUnavailable | Self::UpstreamInvalidResponse => 502,
            Self::UpstreamTimeout => 504,
            Self::ReferenceDataMissing | Self::ReferenceDataInvalid | Self::ConfigInvalidValue => 500,
        }
    }

    /// Errors that originate from the property-records service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable | Self::UpstreamTimeout | Self::UpstreamInvalidResponse
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// ZIP outside coverage area
    pub fn zip_not_covered(zip_code: &str) -> Self {
        Self::new(
            ErrorCode::ZipNotCovered,
            format!("ZIP code {} not in Providence coverage area", zip_code),
        )
    }

    /// Bedroom count not recognised
    pub fn invalid_bedroom_count(bedrooms: &str) -> Self {
        Self::new(
            ErrorCode::InvalidBedroomCount,
            format!(
                "Invalid bedroom count '{}'. Expected one of: studio, 1, 2, 3",
                bedrooms
            ),
        )
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// Property-records service unavailable
    pub fn upstream_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, msg)
    }

    /// Property-records payload malformed
    pub fn upstream_invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamInvalidResponse, msg)
    }

    /// Reference data malformed
    pub fn reference_invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ReferenceDataInvalid, msg)
    }

    /// Invalid configuration value
    pub fn config_invalid(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: '{}'", key, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::UpstreamTimeout, "Property records request timed out")
        } else if err.is_decode() {
            Self::new(ErrorCode::UpstreamInvalidResponse, err.to_string())
        } else {
            Self::new(ErrorCode::UpstreamUnavailable, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ReferenceDataInvalid, "JSON parse error", err)
    }
}
