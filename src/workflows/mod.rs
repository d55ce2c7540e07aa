//! Workflow engine proxy
//!
//! Read-only access to the automation engine that runs the WhatsApp chatbot.
//! The gateway never mutates workflow state; it lists executions and fetches
//! execution detail so the dashboard can surface failures.

pub mod client;

pub use client::WorkflowClient;
