//! Common test utilities for nlq-gateway
//!
//! Shared infrastructure for the integration suite:
//! - Scripted generation providers that play back fixed replies
//! - Builders for the reply formats providers actually produce
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{ScriptedGenerator, sql_reply};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let provider = ScriptedGenerator::replies(
//!         "openai",
//!         &[&sql_reply("SELECT COUNT(*) FROM users", "Counts users.")],
//!     );
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items
pub use fixtures::{fenced_sql_reply, sql_reply};
pub use generators::ScriptedGenerator;
