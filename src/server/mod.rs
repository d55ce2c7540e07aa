//! HTTP server implementation
//!
//! Actix-web boundary: routing, CORS, state assembly, and startup.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;


pub use builder::run_server;
pub use server::HttpServer;
pub use state::AppState;
