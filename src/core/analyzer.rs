//! Request Orchestrator
//!
//! Runs one listing through the estimator, price classifier, nearby
//! comparison, landlord resolver and scorer. Only ZIP and bedroom
//! validation can fail a request; landlord trouble is reported as data.

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::estimator::estimate_fair_rent;
use super::landlord::LandlordResolver;
use super::landlord_score::score_landlord;
use super::nearby::compare_nearby;
use super::price_flag::classify_price;
use crate::models::errors::AppResult;
use crate::models::types::{AnalysisReport, Listing};
use crate::utils::reference::ReferenceData;

#[derive(Clone)]
pub struct RentAnalyzer {
    reference: Arc<ReferenceData>,
    resolver: LandlordResolver,
}

impl RentAnalyzer {
    pub fn new(reference: Arc<ReferenceData>, resolver: LandlordResolver) -> Self {
        Self {
            reference,
            resolver,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub async fn analyze(&self, listing: &Listing) -> AppResult<AnalysisReport> {
        let start = Instant::now();

        let rent_estimate = estimate_fair_rent(
            &self.reference,
            &listing.zip_code,
            &listing.bedrooms,
            &listing.amenities,
            listing.sqft,
        )?;

        let flag = classify_price(listing.asking_rent, rent_estimate.fair_rent_mid as f64);

        let nearby_zips = compare_nearby(
            &self.reference,
            &listing.zip_code,
            &listing.bedrooms,
            &listing.amenities,
        );

        let mut landlord = self.resolver.resolve(&listing.address).await;
        if landlord.needs_scoring() {
            score_landlord(&landlord).apply_to(&mut landlord);
        }

        info!(
            "📊 {} ({}) fair={} asking={} flag={} landlord={}/{:?} in {}ms",
            listing.zip_code,
            rent_estimate.neighborhood,
            rent_estimate.fair_rent_mid,
            listing.asking_rent,
            flag.level.as_str(),
            landlord.grade.map(|g| g.as_str()).unwrap_or("-"),
            landlord.source,
            start.elapsed().as_millis()
        );

        Ok(AnalysisReport {
            rent_estimate,
            asking_rent: listing.asking_rent,
            flag,
            landlord,
            nearby_zips,
        })
    }
}
