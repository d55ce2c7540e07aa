//! Core domain logic
//!
//! Everything between the HTTP boundary and the external collaborators:
//! admission control, SQL validation, query generation, and result
//! post-processing. Nothing in here touches actix types.

pub mod generation;
pub mod postprocess;
pub mod rate_limiter;
pub mod schema_context;
pub mod types;
pub mod validator;

pub use types::{ChatTurn, GeneratedQuery, TurnRole};
