//! Landlord Resolver
//!
//! Cache lookup first, then a single live property-records query. Any
//! live failure (transport, timeout, non-200, bad payload) is logged and
//! treated as a miss: resolution never fails, it degrades to the
//! not-found record.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::types::LandlordRecord;
use crate::providers::property_records::PropertyRecordsSource;
use crate::utils::landlord_cache::LandlordCache;

#[derive(Clone)]
pub struct LandlordResolver {
    cache: Arc<LandlordCache>,
    records: Arc<dyn PropertyRecordsSource>,
}

impl LandlordResolver {
    pub fn new(cache: Arc<LandlordCache>, records: Arc<dyn PropertyRecordsSource>) -> Self {
        Self { cache, records }
    }

    /// Resolve an address to a landlord record. Always returns a record;
    /// `source` tells which stage produced it.
    pub async fn resolve(&self, address: &str) -> LandlordRecord {
        if let Some(record) = self.cache.get(address) {
            return record;
        }

        match self.records.lookup(address).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!("📭 No landlord found for {}", address);
                LandlordRecord::not_found()
            }
            Err(e) if e.code.is_upstream() => {
                warn!(
                    code = e.code_str(),
                    "⚠️ Live landlord lookup failed for {}: {}", address, e
                );
                LandlordRecord::not_found()
            }
            Err(e) => {
                error!(
                    code = e.code_str(),
                    "❌ Landlord lookup error for {}: {}", address, e
                );
                LandlordRecord::not_found()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::{AppError, AppResult};
    use crate::models::types::{Grade, Provenance};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records calls and returns a fixed outcome
    struct FakeRecords {
        outcome: fn() -> AppResult<Option<LandlordRecord>>,
        calls: AtomicUsize,
    }

    impl FakeRecords {
        fn new(outcome: fn() -> AppResult<Option<LandlordRecord>>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl PropertyRecordsSource for FakeRecords {
        async fn lookup(&self, _address: &str) -> AppResult<Option<LandlordRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn live_record() -> AppResult<Option<LandlordRecord>> {
        let mut record = LandlordRecord::not_found();
        record.owner_name = "Live Owner".to_string();
        record.source = Provenance::Live;
        record.grade = None;
        record.notes.clear();
        Ok(Some(record))
    }

    fn cache() -> Arc<LandlordCache> {
        let mut cached = LandlordRecord::not_found();
        cached.owner_name = "Cached Owner".to_string();
        cached.score = Some(92);
        cached.grade = Some(Grade::A);
        Arc::new(LandlordCache::from_entries(vec![("45 PROSPECT", cached)]))
    }

    #[tokio::test]
    async fn test_cache_hit_skips_live_lookup() {
        let records = FakeRecords::new(live_record);
        let resolver = LandlordResolver::new(cache(), records.clone());

        let record = resolver.resolve("45 Prospect St").await;
        assert_eq!(record.owner_name, "Cached Owner");
        assert_eq!(record.source, Provenance::Cached);
        assert_eq!(records.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_uses_live_lookup() {
        let records = FakeRecords::new(live_record);
        let resolver = LandlordResolver::new(cache(), records.clone());

        let record = resolver.resolve("9 Benefit St").await;
        assert_eq!(record.owner_name, "Live Owner");
        assert_eq!(record.source, Provenance::Live);
        assert_eq!(records.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_live_empty_is_not_found() {
        let resolver = LandlordResolver::new(cache(), FakeRecords::new(|| Ok(None)));
        let record = resolver.resolve("9 Benefit St").await;
        assert_eq!(record, LandlordRecord::not_found());
    }

    #[tokio::test]
    async fn test_live_failure_degrades_to_not_found() {
        let records = FakeRecords::new(|| Err(AppError::upstream_unavailable("connection refused")));
        let resolver = LandlordResolver::new(cache(), records.clone());

        let record = resolver.resolve("9 Benefit St").await;
        assert_eq!(record.source, Provenance::NotFound);
        assert_eq!(record.grade, Some(Grade::NotAvailable));
        // single attempt, no retries
        assert_eq!(records.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_upstream_failure_also_degrades() {
        let records = FakeRecords::new(|| Err(AppError::reference_invalid("bad row mapping")));
        let resolver = LandlordResolver::new(cache(), records);

        let record = resolver.resolve("9 Benefit St").await;
        assert_eq!(record, LandlordRecord::not_found());
    }
}
