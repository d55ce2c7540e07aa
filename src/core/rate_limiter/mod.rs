//! Admission control
//!
//! Token-bucket rate limiting keyed by client identity and endpoint.
//! The bucket map lives behind [`RateLimitStore`] so call sites never
//! touch the storage directly.

pub mod limiter;
pub mod store;
pub mod types;

pub use limiter::{
    CHAT_ENDPOINT, EXPORT_ENDPOINT, QUERY_ENDPOINT, RateLimiter, WORKFLOWS_ENDPOINT,
    client_identity,
};
pub use store::{MemoryStore, RateLimitStore};
pub use types::{AdmissionDecision, TokenBucket};
