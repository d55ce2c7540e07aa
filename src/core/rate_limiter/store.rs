//! Bucket storage
//!
//! The store owns the mutable bucket map so the limiter itself stays a
//! pure description of the policy. The in-memory map is the only
//! implementation today; a shared cache could stand in behind the same
//! trait without touching call sites. In-memory state does not survive a
//! restart and is not shared across horizontally scaled instances.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[cfg(test)]
use mockall::automock;

use super::types::{AdmissionDecision, TokenBucket};

/// Storage for token buckets keyed by client and endpoint.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Refill the bucket at `key` and consume one token if a whole token
    /// is available. Refill and consumption happen under a single lock
    /// acquisition so concurrent checks cannot interleave mid-update.
    async fn try_consume(&self, key: &str, max_tokens: f64, refill_rate: f64)
    -> AdmissionDecision;
}

/// Process-local bucket map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    buckets: RwLock<HashMap<String, TokenBucket>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for MemoryStore {
    async fn try_consume(
        &self,
        key: &str,
        max_tokens: f64,
        refill_rate: f64,
    ) -> AdmissionDecision {
        let now = Instant::now();
        let mut buckets = self.buckets.write().await;
        let bucket = buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::full(max_tokens, now));

        let elapsed = now.duration_since(bucket.last_refill);
        bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * refill_rate).min(max_tokens);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            AdmissionDecision::admitted()
        } else {
            let retry_after = ((1.0 - bucket.tokens) / refill_rate).ceil() as u64;
            AdmissionDecision::limited(retry_after)
        }
    }
}
