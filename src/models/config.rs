//! Service configuration
//!
//! Defaults live in utils/constants.rs; every value can be overridden
//! from the environment.

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_LANDLORD_CACHE_PATH, DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SAFMR_PATH, OPENPVD_PROPERTY_URL,
};

/// Runtime configuration for the fair-rent API
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// ZIP -> SAFMR profile table
    pub safmr_path: PathBuf,
    /// Address fragment -> landlord record table
    pub landlord_cache_path: PathBuf,
    /// Socrata endpoint for property ownership records
    pub property_records_url: String,
    /// Timeout for a single live landlord lookup
    pub lookup_timeout: Duration,
    /// Timeout for a whole HTTP request
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            safmr_path: PathBuf::from(DEFAULT_SAFMR_PATH),
            landlord_cache_path: PathBuf::from(DEFAULT_LANDLORD_CACHE_PATH),
            property_records_url: OPENPVD_PROPERTY_URL.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("FAIR_RENT_HOST") {
            config.host = host;
        }

        // Hosting platforms set PORT; FAIR_RENT_PORT is for local dev
        if let Some(port) = lookup("PORT").or_else(|| lookup("FAIR_RENT_PORT")) {
            config.port = port
                .parse()
                .map_err(|_| AppError::config_invalid("PORT", &port))?;
        }

        if let Some(path) = lookup("FAIR_RENT_SAFMR_PATH") {
            config.safmr_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("FAIR_RENT_LANDLORD_CACHE_PATH") {
            config.landlord_cache_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("FAIR_RENT_PROPERTY_RECORDS_URL") {
            config.property_records_url = url;
        }

        if let Some(secs) = lookup("FAIR_RENT_LOOKUP_TIMEOUT_SECS") {
            config.lookup_timeout = parse_secs("FAIR_RENT_LOOKUP_TIMEOUT_SECS", &secs)?;
        }
        if let Some(secs) = lookup("FAIR_RENT_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = parse_secs("FAIR_RENT_REQUEST_TIMEOUT_SECS", &secs)?;
        }

        info!(
            "⚙️ Config: safmr={}, landlord_cache={}, lookup_timeout={}s",
            config.safmr_path.display(),
            config.landlord_cache_path.display(),
            config.lookup_timeout.as_secs()
        );

        Ok(config)
    }

    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_secs(key: &str, value: &str) -> AppResult<Duration> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::config_invalid(key, value)),
    }
}
