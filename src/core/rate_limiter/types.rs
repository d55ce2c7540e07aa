//! Rate limiter data shapes

use tokio::time::Instant;

/// Outcome of one admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionDecision {
    pub allowed: bool,
    pub retry_after_secs: Option<u64>,
}

impl AdmissionDecision {
    pub fn admitted() -> Self {
        Self {
            allowed: true,
            retry_after_secs: None,
        }
    }

    pub fn limited(retry_after_secs: u64) -> Self {
        Self {
            allowed: false,
            retry_after_secs: Some(retry_after_secs),
        }
    }
}

/// One client+endpoint bucket
#[derive(Debug, Clone, Copy)]
pub struct TokenBucket {
    pub tokens: f64,
    pub last_refill: Instant,
}

impl TokenBucket {
    /// New buckets start full so a first-time client gets its whole burst.
    pub fn full(max_tokens: f64, now: Instant) -> Self {
        Self {
            tokens: max_tokens,
            last_refill: now,
        }
    }
}
