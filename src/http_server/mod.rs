//! # Trivia HTTP Server Module
//!
//! Combines the trivia REST routes and the health check into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/categories`, `/categories/{id}/questions`
//! - `/questions`, `/questions/search`, `/questions/{id}`
//! - `/quizzes`

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
