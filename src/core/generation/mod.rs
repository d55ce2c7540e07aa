//! Query generation
//!
//! Turns a natural-language question into SQL: provider clients, the
//! reply parser, the fallback orchestrator, and the retry cycle that
//! couples generation to validation.

pub mod cycle;
pub mod orchestrator;
pub mod parser;
pub mod providers;

pub use cycle::{CycleOutcome, MAX_ATTEMPTS, run_cycle};
pub use orchestrator::GenerationOrchestrator;
pub use parser::parse_model_reply;
