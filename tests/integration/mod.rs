//! Integration tests for nlq-gateway
//!
//! These tests verify the interaction between multiple components
//! through the crate's public API.

pub mod error_handling_tests;
pub mod generation_cycle_tests;
pub mod validator_policy_tests;
