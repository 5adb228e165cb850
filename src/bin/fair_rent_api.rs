//! PVD Fair Rent API Server
//!
//! Usage:
//!   cargo run --bin fair_rent_api
//!
//! Environment:
//!   PORT / FAIR_RENT_PORT           - Server port (default: 8080)
//!   FAIR_RENT_HOST                  - Server host (default: 0.0.0.0)
//!   FAIR_RENT_SAFMR_PATH            - SAFMR table (default: data/safmr.json)
//!   FAIR_RENT_LANDLORD_CACHE_PATH   - Landlord cache (default: data/landlord_cache.json)
//!   FAIR_RENT_PROPERTY_RECORDS_URL  - OpenPVD property dataset endpoint
//!   FAIR_RENT_LOOKUP_TIMEOUT_SECS   - Live landlord lookup timeout (default: 5)
//!   FAIR_RENT_REQUEST_TIMEOUT_SECS  - Whole-request timeout (default: 30)
//!   RUST_LOG                        - Log filter (default: info)

use pvd_fair_rent::api::{create_router, AppState};
use pvd_fair_rent::utils::constants::{APP_NAME, APP_VERSION};
use pvd_fair_rent::ServiceConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    info!("🏠 {} v{}", APP_NAME, APP_VERSION);

    let config = ServiceConfig::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("🚀 Fair Rent API starting on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /analyze    - Fair rent, price flag, landlord grade, nearby ZIPs");
    info!("  GET  /zips       - Covered ZIP codes");
    info!("  GET  /amenities  - Amenity adjustments");
    info!("  GET  /health     - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Fair Rent API shutdown complete");
    Ok(())
}
